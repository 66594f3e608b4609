//! 行分類エンジン
//!
//! Entry points turn raw file content into [`CodeStats`]. Ordinary languages
//! go through the [`scanner::SyntaxScanner`] state machine, literate ones
//! (Markdown, Org, ...) through [`literate`], which recurses into this module
//! for every fenced block.

pub mod literate;
pub mod scanner;

use crate::config::ClassifyConfig;
use crate::language::string_utils::from_utf8_lossy;
use crate::language::{LanguageSyntax, LanguageType};
use crate::stats::CodeStats;

/// 分類結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classified {
    pub stats: CodeStats,
    /// 未終端の領域、または不正な UTF-8 を含んでいた
    pub inaccurate: bool,
}

/// Classify raw bytes. Invalid UTF-8 is replaced and flags the result.
#[must_use]
pub fn classify_bytes(input: &[u8], language: LanguageType, config: &ClassifyConfig) -> Classified {
    let (text, lossy) = from_utf8_lossy(input);
    let mut classified = classify_str(&text, language, config);
    classified.inaccurate |= lossy;
    classified
}

#[must_use]
pub fn classify_str(text: &str, language: LanguageType, config: &ClassifyConfig) -> Classified {
    classify_with_syntax(text, language.syntax(), config)
}

/// Classify with an explicit rule set instead of a registered language.
#[must_use]
pub fn classify_with_syntax(text: &str, syntax: &LanguageSyntax, config: &ClassifyConfig) -> Classified {
    if syntax.literate {
        literate::classify(text, syntax, config)
    } else {
        let mut scanner = scanner::SyntaxScanner::new(syntax, *config);
        for line in crate::language::string_utils::lines(text) {
            scanner.push_line(line);
        }
        scanner.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(text: &str, lang: LanguageType) -> (usize, usize, usize) {
        let stats = classify_str(text, lang, &ClassifyConfig::new()).stats;
        (stats.code, stats.comments, stats.blanks)
    }

    #[test]
    fn test_c_code_comment_blank() {
        let classified = classify_str("code;\n// comment\n\n", LanguageType::C, &ClassifyConfig::new());
        assert_eq!(classified.stats.code, 1);
        assert_eq!(classified.stats.comments, 1);
        assert_eq!(classified.stats.blanks, 1);
        assert_eq!(classified.stats.lines(), 3);
        assert!(!classified.inaccurate);
    }

    #[test]
    fn test_empty_input() {
        let classified = classify_bytes(b"", LanguageType::Rust, &ClassifyConfig::new());
        assert_eq!(classified.stats.lines(), 0);
        assert!(!classified.inaccurate);
    }

    #[test]
    fn test_invalid_utf8_marks_inaccurate() {
        let classified = classify_bytes(b"let x = 1;\n\xff\xfe\n", LanguageType::Rust, &ClassifyConfig::new());
        assert_eq!(classified.stats.code, 2);
        assert!(classified.inaccurate);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(counts("a = 1\r\n# c\r\n\r\n", LanguageType::Python), (1, 1, 1));
    }

    #[test]
    fn test_markdown_dispatches_to_literate() {
        let text = "# Title\n```rust\nlet a = 1;\n\nlet b = 2;\n```\n";
        let stats = classify_str(text, LanguageType::Markdown, &ClassifyConfig::new()).stats;
        assert_eq!(stats.comments, 3);
        assert_eq!(stats.code, 0);
        let rust = &stats.blobs[&LanguageType::Rust];
        assert_eq!(rust.len(), 1);
        assert_eq!((rust[0].code, rust[0].blanks, rust[0].comments), (2, 1, 0));
    }
}
