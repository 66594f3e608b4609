// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod parsers;
pub mod presentation;

use langstat_engine::Languages;

use crate::args::Args;
use crate::error::Result;
use crate::presentation::RenderOptions;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan the paths named by `args` and render the result.
///
/// # Errors
/// Returns an error for invalid configuration, invalid ignore patterns or a
/// serialisation failure.
pub fn run(args: &Args) -> Result<String> {
    let config = config::build_config(args)?;
    let mut languages = Languages::new();
    languages.get_statistics(&args.paths, &args.ignore_paths, &config)?;
    for skipped in languages.skipped() {
        log::debug!("skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    presentation::render(&languages, &config, &RenderOptions::from(args))
}
