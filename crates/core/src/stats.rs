use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::config::ClassifyConfig;
use crate::error::{CoreError, Result};
use crate::language::LanguageType;
use crate::parser;

/// Flat `{"blanks", "code", "comments", "lines"}` view of a [`CodeStats`].
pub type PlainStats = BTreeMap<&'static str, usize>;

const PLAIN_KEYS: [&str; 3] = ["blanks", "code", "comments"];

/// 1 ファイル (または埋め込みブロック 1 つ) の行数集計
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStats {
    pub blanks: usize,
    pub code: usize,
    pub comments: usize,
    /// 埋め込みコード (Markdown のフェンス等)。フェンス 1 つにつき 1 要素
    pub blobs: BTreeMap<LanguageType, Vec<CodeStats>>,
}

impl CodeStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level line count; blob lines are not included until [`Self::summarise`].
    #[must_use]
    pub const fn lines(&self) -> usize {
        self.blanks + self.code + self.comments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines() == 0 && self.blobs.is_empty()
    }

    /// Fold every blob, recursively, into the top-level counters.
    #[must_use]
    pub fn summarise(&self) -> Self {
        let mut summary = Self {
            blanks: self.blanks,
            code: self.code,
            comments: self.comments,
            blobs: BTreeMap::new(),
        };
        for blob in self.blobs.values().flatten() {
            let folded = blob.summarise();
            summary.blanks += folded.blanks;
            summary.code += folded.code;
            summary.comments += folded.comments;
        }
        summary
    }

    #[must_use]
    pub fn plain(&self) -> PlainStats {
        BTreeMap::from([
            ("blanks", self.blanks),
            ("code", self.code),
            ("comments", self.comments),
            ("lines", self.lines()),
        ])
    }

    /// Rebuild the counters from [`Self::plain`] output.
    ///
    /// # Errors
    ///
    /// [`CoreError::MalformedPlainStats`] when a counter is missing or when
    /// `lines` is present and disagrees with the sum.
    pub fn from_plain(plain: &BTreeMap<&str, usize>) -> Result<Self> {
        let mut values = [0usize; 3];
        for (slot, key) in values.iter_mut().zip(PLAIN_KEYS) {
            *slot = *plain.get(key).ok_or(CoreError::MalformedPlainStats(key))?;
        }
        let [blanks, code, comments] = values;
        let stats = Self {
            blanks,
            code,
            comments,
            blobs: BTreeMap::new(),
        };
        match plain.get("lines") {
            Some(&lines) if lines != stats.lines() => Err(CoreError::MalformedPlainStats("lines")),
            _ => Ok(stats),
        }
    }
}

impl AddAssign<&Self> for CodeStats {
    fn add_assign(&mut self, rhs: &Self) {
        self.blanks += rhs.blanks;
        self.code += rhs.code;
        self.comments += rhs.comments;
        for (lang, blobs) in &rhs.blobs {
            self.blobs.entry(*lang).or_default().extend(blobs.iter().cloned());
        }
    }
}

impl AddAssign for CodeStats {
    fn add_assign(&mut self, rhs: Self) {
        self.blanks += rhs.blanks;
        self.code += rhs.code;
        self.comments += rhs.comments;
        for (lang, blobs) in rhs.blobs {
            self.blobs.entry(lang).or_default().extend(blobs);
        }
    }
}

/// ファイル単位の集計結果
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// ファイルパス
    pub name: String,
    pub stats: CodeStats,
    /// 未終端のコメント/文字列、不正な UTF-8 などを含んでいた
    pub inaccurate: bool,
}

impl Report {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Classify `content` as `language` and wrap the counts in a report.
    #[must_use]
    pub fn classify(
        name: impl Into<String>,
        content: &[u8],
        language: LanguageType,
        config: &ClassifyConfig,
    ) -> Self {
        let classified = parser::classify_bytes(content, language, config);
        Self {
            name: name.into(),
            stats: classified.stats,
            inaccurate: classified.inaccurate,
        }
    }

    #[must_use]
    pub fn summarise(&self) -> Self {
        Self {
            name: self.name.clone(),
            stats: self.stats.summarise(),
            inaccurate: self.inaccurate,
        }
    }

    #[must_use]
    pub fn plain(&self) -> BTreeMap<String, PlainStats> {
        BTreeMap::from([(self.name.clone(), self.stats.plain())])
    }
}
