//! 言語ごとの集計コンテナ

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use langstat_core::{Language, LanguageType, PlainStats, Report, Sort};
use serde::Serialize;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::{FileOutcome, scan};

/// Ignore entry that means "ignore nothing".
pub const IGNORE_NOTHING: &str = "nothing";

/// 集計できなかったファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Statistics of every language found by one or more scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Languages {
    inner: BTreeMap<LanguageType, Language>,
    skipped: Vec<SkippedFile>,
}

impl Languages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `paths` and fold the results into `self`.
    ///
    /// Entries of `ignored` (and of `config.ignore_paths()`) are exclusion
    /// globs; empty entries and [`IGNORE_NOTHING`] are skipped. Files that
    /// cannot be read are recorded in [`Self::skipped`].
    ///
    /// # Errors
    /// Returns an error only when an ignore pattern is invalid.
    pub fn get_statistics<P, S>(&mut self, paths: &[P], ignored: &[S], config: &Config) -> Result<()>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        self.get_statistics_cancellable(paths, ignored, config, &AtomicBool::new(false))
    }

    /// Same as [`Self::get_statistics`], stopping the walk once `cancel` is set.
    ///
    /// Files already enumerated are still counted, so the result stays
    /// well-formed.
    ///
    /// # Errors
    /// Returns an error only when an ignore pattern is invalid.
    pub fn get_statistics_cancellable<P, S>(
        &mut self,
        paths: &[P],
        ignored: &[S],
        config: &Config,
        cancel: &AtomicBool,
    ) -> Result<()>
    where
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let roots: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_path_buf()).collect();
        let excludes: Vec<String> = config
            .ignore_paths()
            .iter()
            .map(String::as_str)
            .chain(ignored.iter().map(|pattern| pattern.as_ref()))
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty() && *pattern != IGNORE_NOTHING)
            .map(str::to_owned)
            .collect();

        let mut fresh = Self::new();
        for outcome in scan(&roots, &excludes, config, cancel)? {
            match outcome {
                FileOutcome::Counted(language, report) => fresh.add_report(language, report),
                FileOutcome::Skipped(skipped) => fresh.skipped.push(skipped),
            }
        }

        log::info!(
            "counted {} files in {} languages ({} skipped)",
            fresh.inner.values().map(Language::files).sum::<usize>(),
            fresh.len(),
            fresh.skipped.len()
        );
        self.merge(fresh);
        Ok(())
    }

    /// Fold one report into the entry for `language`.
    pub fn add_report(&mut self, language: LanguageType, report: Report) {
        self.inner.entry(language).or_default().add_report(report);
    }

    /// Merge another container into this one.
    pub fn merge(&mut self, other: Self) {
        for (language, stats) in other.inner {
            *self.inner.entry(language).or_default() += stats;
        }
        self.skipped.extend(other.skipped);
    }

    #[must_use]
    pub fn get(&self, language: &LanguageType) -> Option<&Language> {
        self.inner.get(language)
    }

    pub fn get_mut(&mut self, language: &LanguageType) -> Option<&mut Language> {
        self.inner.get_mut(language)
    }

    /// Like [`Self::get`], but a missing language is an error.
    ///
    /// # Errors
    /// Returns [`EngineError::LanguageNotFound`].
    pub fn lookup(&self, language: LanguageType) -> Result<&Language> {
        self.inner
            .get(&language)
            .ok_or(EngineError::LanguageNotFound(language))
    }

    pub fn iter(&self) -> btree_map::Iter<'_, LanguageType, Language> {
        self.inner.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    /// 全言語の合計
    #[must_use]
    pub fn total(&self) -> Language {
        let mut total = Language::new();
        for language in self.inner.values() {
            total += language.clone();
        }
        total
    }

    /// Every language summarised; see [`Language::summarise`].
    #[must_use]
    pub fn summarise(&self) -> Self {
        Self {
            inner: self
                .inner
                .iter()
                .map(|(lang, language)| (*lang, language.summarise()))
                .collect(),
            skipped: self.skipped.clone(),
        }
    }

    /// Languages ordered descending by `sort`, ties by name.
    #[must_use]
    pub fn sorted(&self, sort: Sort) -> Vec<(LanguageType, &Language)> {
        let mut languages: Vec<(LanguageType, &Language)> =
            self.inner.iter().map(|(lang, language)| (*lang, language)).collect();
        languages.sort_by(|(a_lang, a), (b_lang, b)| {
            b.metric(sort)
                .cmp(&a.metric(sort))
                .then_with(|| a_lang.name().cmp(b_lang.name()))
        });
        languages
    }

    /// Sort the reports of every language in place.
    pub fn sort_reports(&mut self, sort: Sort) {
        for language in self.inner.values_mut() {
            language.sort_by(sort);
        }
    }

    /// 検出された言語名 (名前順)
    #[must_use]
    pub fn language_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.inner.keys().map(|lang| lang.name()).collect();
        names.sort_unstable();
        names
    }

    /// Language name to its file count.
    #[must_use]
    pub fn files(&self) -> BTreeMap<&'static str, usize> {
        self.inner
            .iter()
            .map(|(lang, language)| (lang.name(), language.files()))
            .collect()
    }

    /// Language name to the paths counted as that language.
    #[must_use]
    pub fn file_paths(&self) -> BTreeMap<&'static str, Vec<String>> {
        self.inner
            .iter()
            .map(|(lang, language)| {
                let files = language.reports.iter().map(|report| report.name.clone()).collect();
                (lang.name(), files)
            })
            .collect()
    }

    /// Language name to its compact totals.
    #[must_use]
    pub fn report_compact_plain(&self) -> BTreeMap<&'static str, BTreeMap<&'static str, usize>> {
        self.inner
            .iter()
            .map(|(lang, language)| (lang.name(), language.compact_plain()))
            .collect()
    }

    #[must_use]
    pub fn total_plain(&self) -> BTreeMap<&'static str, usize> {
        self.total().compact_plain()
    }

    /// Language name to per-file plain stats.
    #[must_use]
    pub fn languages_plain(&self) -> BTreeMap<&'static str, BTreeMap<String, PlainStats>> {
        self.inner
            .iter()
            .map(|(lang, language)| (lang.name(), language.reports_plain()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Languages {
    type Item = (&'a LanguageType, &'a Language);
    type IntoIter = btree_map::Iter<'a, LanguageType, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
