use std::path::PathBuf;

use langstat_core::{CoreError, LanguageType};
use thiserror::Error;

use crate::config::ConfigBuilderError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("LanguageType not found: {0}")]
    LanguageNotFound(LanguageType),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ConfigBuilderError> for EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
