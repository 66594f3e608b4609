//! 言語レジストリ
//!
//! Every supported language is a [`LanguageType`] variant backed by a
//! `'static` [`LanguageSyntax`] record from the table in [`definitions`].

pub mod definitions;
pub mod resolve;
pub mod string_utils;
pub mod syntax;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

pub use definitions::LanguageType;
pub use syntax::{Delimiters, EmbedRule, LanguageSyntax};

use crate::error::{CoreError, Result};

impl LanguageType {
    /// 登録順の全言語
    #[must_use]
    pub fn list() -> &'static [Self] {
        Self::ALL
    }

    #[must_use]
    pub fn line_comments(self) -> &'static [&'static str] {
        self.syntax().line_comments
    }

    #[must_use]
    pub fn multi_line_comments(self) -> &'static [Delimiters] {
        self.syntax().multi_line_comments
    }

    #[must_use]
    pub fn nested_comments(self) -> &'static [Delimiters] {
        self.syntax().nested_comments
    }

    #[must_use]
    pub fn allows_nested(self) -> bool {
        self.syntax().allows_nested
    }

    #[must_use]
    pub fn quotes(self) -> &'static [Delimiters] {
        self.syntax().quotes
    }

    #[must_use]
    pub fn verbatim_quotes(self) -> &'static [Delimiters] {
        self.syntax().verbatim_quotes
    }

    #[must_use]
    pub fn doc_quotes(self) -> &'static [Delimiters] {
        self.syntax().doc_quotes
    }

    #[must_use]
    pub fn shebangs(self) -> &'static [&'static str] {
        self.syntax().shebangs
    }

    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        self.syntax().extensions
    }

    #[must_use]
    pub fn file_names(self) -> &'static [&'static str] {
        self.syntax().file_names
    }

    #[must_use]
    pub fn mime_types(self) -> &'static [&'static str] {
        self.syntax().mime
    }

    #[must_use]
    pub fn is_literate(self) -> bool {
        self.syntax().literate
    }

    #[must_use]
    pub fn embeds(self) -> &'static [EmbedRule] {
        self.syntax().embed
    }

    /// 高速判定に使うトークン (開始デリミタ + `important_syntax`)
    #[must_use]
    pub fn important_syntax(self) -> Vec<&'static str> {
        self.syntax().important_tokens()
    }

    /// See [`resolve::resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnresolvedLanguage`] when no rule matches.
    pub fn resolve(path: &str, first_line: Option<&str>, mime: Option<&str>) -> Result<Self> {
        resolve::resolve(path, first_line, mime)
    }

    /// 全言語名を名前順で返す
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::ALL.iter().map(|lang| lang.name()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageType {
    type Err = CoreError;

    /// Exact display name first, then a case-insensitive match.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .iter()
            .find(|lang| lang.name() == name)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .find(|lang| lang.name().eq_ignore_ascii_case(name))
            })
            .copied()
            .ok_or_else(|| CoreError::InvalidLanguageName(String::from(s)))
    }
}

impl serde::Serialize for LanguageType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for LanguageType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        struct NameVisitor;

        impl serde::de::Visitor<'_> for NameVisitor {
            type Value = LanguageType;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a language name")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> core::result::Result<LanguageType, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}
