use alloc::string::String;
use thiserror::Error;

/// Errors raised by malformed requests against the core model.
///
/// Classification itself never fails: unreadable or unterminated content is
/// reported through the `inaccurate` flag instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Unknown language name: {0}")]
    InvalidLanguageName(String),

    #[error("Unknown sort key: {0} (expected one of blanks, comments, code, files, lines)")]
    InvalidSortKey(String),

    #[error("No language matches '{0}'")]
    UnresolvedLanguage(String),

    #[error("Plain stats are missing or inconsistent for key '{0}'")]
    MalformedPlainStats(&'static str),
}

pub type Result<T> = core::result::Result<T, CoreError>;
