#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod aggregate;
pub mod config;
pub mod error;
pub mod language;
pub mod parser;
pub mod sort;
pub mod stats;

pub use aggregate::Language;
pub use config::ClassifyConfig;
pub use error::{CoreError, Result};
pub use language::{LanguageSyntax, LanguageType};
pub use sort::Sort;
pub use stats::{CodeStats, PlainStats, Report};
