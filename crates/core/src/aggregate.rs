//! 言語単位の集計
//!
//! A [`Language`] owns every [`Report`] classified as that language plus one
//! child report per embedded blob found in those files.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Reverse;
use core::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::language::LanguageType;
use crate::sort::Sort;
use crate::stats::{CodeStats, PlainStats, Report};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub blanks: usize,
    pub code: usize,
    pub comments: usize,
    pub reports: Vec<Report>,
    /// 埋め込み言語ごとのレポート (元ファイル名で命名)
    pub children: BTreeMap<LanguageType, Vec<Report>>,
    /// 不正確と判定されたレポート数
    pub inaccurate: usize,
}

impl Language {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report, adding its top-level counters to the totals and
    /// splitting its blobs into `children`.
    pub fn add_report(&mut self, report: Report) {
        self.blanks += report.stats.blanks;
        self.code += report.stats.code;
        self.comments += report.stats.comments;
        if report.inaccurate {
            self.inaccurate += 1;
        }

        for (lang, blobs) in &report.stats.blobs {
            let children = self.children.entry(*lang).or_default();
            children.extend(blobs.iter().map(|blob| Report {
                name: report.name.clone(),
                stats: blob.clone(),
                inaccurate: false,
            }));
        }
        self.reports.push(report);
    }

    pub fn mark_inaccurate(&mut self) {
        self.inaccurate += 1;
    }

    #[must_use]
    pub const fn lines(&self) -> usize {
        self.blanks + self.code + self.comments
    }

    #[must_use]
    pub fn files(&self) -> usize {
        self.reports.len()
    }

    /// 空 (レポートなし、合計ゼロ) か
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty() && self.lines() == 0
    }

    /// Value of `sort` for this language as a whole.
    #[must_use]
    pub fn metric(&self, sort: Sort) -> usize {
        match sort {
            Sort::Blanks => self.blanks,
            Sort::Comments => self.comments,
            Sort::Code => self.code,
            Sort::Files => self.files(),
            Sort::Lines => self.lines(),
        }
    }

    /// Sort reports and every children list descending by `sort`, ties by
    /// name ascending.
    pub fn sort_by(&mut self, sort: Sort) {
        sort_reports(&mut self.reports, sort);
        for reports in self.children.values_mut() {
            sort_reports(reports, sort);
        }
    }

    /// Fold blobs into their parent reports.
    ///
    /// Returns a new value; children are emptied and totals recomputed from
    /// the summarised reports.
    #[must_use]
    pub fn summarise(&self) -> Self {
        let mut summary = Self::new();
        for report in &self.reports {
            summary.add_report(report.summarise());
        }
        summary.inaccurate = self.inaccurate;
        summary
    }

    #[must_use]
    pub fn reports_plain(&self) -> BTreeMap<String, PlainStats> {
        self.reports
            .iter()
            .map(|report| (report.name.clone(), report.stats.plain()))
            .collect()
    }

    /// Child language name to the summed stats of its blobs.
    #[must_use]
    pub fn children_plain(&self) -> BTreeMap<&'static str, PlainStats> {
        self.children
            .iter()
            .map(|(lang, reports)| {
                let mut total = CodeStats::new();
                for report in reports {
                    total += report.stats.summarise();
                }
                (lang.name(), total.plain())
            })
            .collect()
    }

    /// `files`, `lines`, `code`, `comments`, `blanks`
    #[must_use]
    pub fn compact_plain(&self) -> BTreeMap<&'static str, usize> {
        BTreeMap::from([
            ("files", self.files()),
            ("lines", self.lines()),
            ("code", self.code),
            ("comments", self.comments),
            ("blanks", self.blanks),
        ])
    }
}

impl AddAssign for Language {
    fn add_assign(&mut self, rhs: Self) {
        self.blanks += rhs.blanks;
        self.code += rhs.code;
        self.comments += rhs.comments;
        self.inaccurate += rhs.inaccurate;
        self.reports.extend(rhs.reports);
        for (lang, reports) in rhs.children {
            self.children.entry(lang).or_default().extend(reports);
        }
    }
}

fn report_metric(report: &Report, sort: Sort) -> usize {
    let stats = &report.stats;
    match sort {
        Sort::Blanks => stats.blanks,
        Sort::Comments => stats.comments,
        Sort::Code => stats.code,
        Sort::Files => 1,
        Sort::Lines => stats.lines(),
    }
}

fn sort_reports(reports: &mut [Report], sort: Sort) {
    reports.sort_by(|a, b| {
        Reverse(report_metric(a, sort))
            .cmp(&Reverse(report_metric(b, sort)))
            .then_with(|| a.name.cmp(&b.name))
    });
}
