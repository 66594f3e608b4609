//! 言語ごとの字句規則レコード
//!
//! Every entry of the language table is a plain `'static` value of
//! [`LanguageSyntax`]. Behaviour only varies by data, so the classifier reads
//! these fields directly instead of dispatching on per-language types.

use alloc::vec::Vec;

use super::LanguageType;

/// `(start, end)` delimiter pair.
pub type Delimiters = (&'static str, &'static str);

/// Fenced region of a literate language whose content belongs to another language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedRule {
    /// Token the trimmed line must start with to open the region.
    pub start: &'static str,
    /// Token the trimmed line must start with to close the region.
    pub end: &'static str,
    /// 固定の子言語。`None` の場合はフェンス直後の info string から判定する
    pub child: Option<LanguageType>,
}

impl EmbedRule {
    #[must_use]
    pub const fn tagged(start: &'static str, end: &'static str) -> Self {
        Self {
            start,
            end,
            child: None,
        }
    }
}

/// Lexical rule set of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSyntax {
    pub line_comments: &'static [&'static str],
    pub multi_line_comments: &'static [Delimiters],
    /// Pairs that always nest, regardless of `allows_nested`.
    pub nested_comments: &'static [Delimiters],
    /// When set, `multi_line_comments` nest as well.
    pub allows_nested: bool,
    pub quotes: &'static [Delimiters],
    /// Raw strings: backslash escapes are not honoured inside.
    pub verbatim_quotes: &'static [Delimiters],
    pub doc_quotes: &'static [Delimiters],
    pub shebangs: &'static [&'static str],
    /// Interpreters recognised after `#!/usr/bin/env`.
    pub env: &'static [&'static str],
    /// Extra fast-path tokens on top of the derived openers.
    pub important_syntax: &'static [&'static str],
    pub literate: bool,
    pub embed: &'static [EmbedRule],
    pub extensions: &'static [&'static str],
    pub file_names: &'static [&'static str],
    pub mime: &'static [&'static str],
}

impl LanguageSyntax {
    /// Base record the language table starts every entry from.
    pub const EMPTY: Self = Self {
        line_comments: &[],
        multi_line_comments: &[],
        nested_comments: &[],
        allows_nested: false,
        quotes: &[],
        verbatim_quotes: &[],
        doc_quotes: &[],
        shebangs: &[],
        env: &[],
        important_syntax: &[],
        literate: false,
        embed: &[],
        extensions: &[],
        file_names: &[],
        mime: &[],
    };

    /// Tokens that force a full scan of a line.
    ///
    /// Line comment prefixes are deliberately absent: a line without any of
    /// these tokens is either a pure line comment or code.
    #[must_use]
    pub fn important_tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<&'static str> = Vec::new();
        let openers = self
            .multi_line_comments
            .iter()
            .chain(self.nested_comments)
            .chain(self.doc_quotes)
            .chain(self.verbatim_quotes)
            .chain(self.quotes)
            .map(|&(start, _)| start)
            .chain(self.important_syntax.iter().copied());

        for token in openers {
            if !token.is_empty() && !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        tokens
    }

    /// Whether `multi_line_comments` pairs nest.
    #[must_use]
    pub const fn nests(&self) -> bool {
        self.allows_nested
    }

    /// 言語がコメント構文を一切持たないか
    #[must_use]
    pub const fn has_comments(&self) -> bool {
        !self.line_comments.is_empty()
            || !self.multi_line_comments.is_empty()
            || !self.nested_comments.is_empty()
    }
}
