//! Parallel scanning engine for langstat.
//!
//! Paths are enumerated on a background thread, classified on the rayon
//! pool and folded into [`Languages`] by the calling thread.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use langstat_core::{LanguageType, Report};
use rayon::prelude::*;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod languages;
pub mod processor;

pub use config::{Config, ConfigBuilder};
pub use error::{EngineError, Result};
pub use languages::{IGNORE_NOTHING, Languages, SkippedFile};

/// Result of handling one enumerated entry.
#[derive(Debug)]
pub(crate) enum FileOutcome {
    Counted(LanguageType, Report),
    Skipped(SkippedFile),
}

impl FileOutcome {
    fn sort_key(&self) -> &str {
        match self {
            Self::Counted(_, report) => &report.name,
            Self::Skipped(skipped) => skipped.path.to_str().unwrap_or_default(),
        }
    }
}

/// Walk `roots` and classify every file found.
///
/// Outcomes are sorted by path so that folding them is deterministic.
///
/// # Errors
///
/// Returns an error only for failures that prevent the walk from starting,
/// such as an invalid exclude pattern.
pub(crate) fn scan(
    roots: &[PathBuf],
    excludes: &[String],
    config: &Config,
    cancel: &AtomicBool,
) -> Result<Vec<FileOutcome>> {
    let (tx, rx) = crossbeam_channel::bounded(1024);

    let (walked, mut outcomes) = std::thread::scope(|scope| {
        let walker = scope.spawn(move || filesystem::walk_parallel(roots, excludes, config, cancel, &tx));

        let outcomes: Vec<FileOutcome> = rx
            .into_iter()
            .par_bridge()
            .filter_map(|item| match item {
                Ok(path) => match processor::process_file(&path, config) {
                    Ok(counted) => counted.map(|(language, report)| FileOutcome::Counted(language, report)),
                    Err(err) => {
                        log::warn!("{err}");
                        Some(FileOutcome::Skipped(SkippedFile {
                            path,
                            reason: err.to_string(),
                        }))
                    }
                },
                Err(err) => {
                    log::warn!("{err}");
                    Some(FileOutcome::Skipped(SkippedFile {
                        path: filesystem::error_path(&err).map(PathBuf::from).unwrap_or_default(),
                        reason: err.to_string(),
                    }))
                }
            })
            .collect();

        let walked = walker
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (walked, outcomes)
    });
    walked?;

    outcomes.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    Ok(outcomes)
}
