//! CLI 引数と設定ファイルの統合

use langstat_engine::{Config, ConfigBuilder};

use crate::args::Args;
use crate::error::Result;

/// Config files first, then command-line overrides.
///
/// # Errors
/// Returns an error when a config file is malformed or the merged values
/// are invalid.
pub fn build_config(args: &Args) -> Result<Config> {
    let mut builder = Config::builder_from_config_files()?;
    apply_args(&mut builder, args);
    Ok(builder.build().map_err(langstat_engine::EngineError::from)?)
}

/// Overwrite builder fields with the flags actually given on the command line.
pub fn apply_args(builder: &mut ConfigBuilder, args: &Args) {
    if args.hidden {
        builder.hidden(true);
    }
    if args.no_ignore {
        builder.no_ignore(true);
    }
    if args.no_ignore_parent {
        builder.no_ignore_parent(true);
    }
    if args.no_ignore_dot {
        builder.no_ignore_dot(true);
    }
    if args.no_ignore_vcs {
        builder.no_ignore_vcs(true);
    }
    if args.follow {
        builder.follow_links(true);
    }
    if args.doc_as_comments {
        builder.treat_doc_strings_as_comments(true);
    }
    if let Some(columns) = args.columns {
        builder.columns(columns);
    }
    if let Some(sort) = args.sort {
        builder.sort(sort);
    }
    if !args.types.is_empty() {
        builder.types(args.types.clone());
    }
    if let Some(threads) = args.threads {
        builder.threads(threads);
    }
}
