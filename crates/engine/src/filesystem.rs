use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::Sender;
use ignore::overrides::OverrideBuilder;
use ignore::{WalkBuilder, WalkState};

use crate::config::Config;
use crate::error::Result;

/// `.ignore` と同じ扱いの独自 ignore ファイル
pub const CUSTOM_IGNORE_FILE: &str = ".langstatignore";

/// Item sent by the walker: a file to count, or an entry it could not visit.
pub type WalkItem = std::result::Result<PathBuf, ignore::Error>;

/// Parallel recursive directory walk.
///
/// Every regular file below `roots` that survives the ignore rules is sent
/// to `tx`. Each entry of `excludes` becomes a `!pattern` override, matched
/// relative to the root the file was found under. Setting `cancel` stops the
/// walk early.
///
/// # Errors
/// Returns an error if an exclude pattern is not a valid glob.
pub fn walk_parallel(
    roots: &[PathBuf],
    excludes: &[String],
    config: &Config,
    cancel: &AtomicBool,
    tx: &Sender<WalkItem>,
) -> Result<()> {
    for root in roots {
        if cancel.load(Ordering::Relaxed) {
            break;
        }
        walk_root(root, excludes, config, cancel, tx)?;
    }
    Ok(())
}

// Overrides are anchored to the path given to `OverrideBuilder::new`, so each
// root gets its own walker.
fn walk_root(
    root: &Path,
    excludes: &[String],
    config: &Config,
    cancel: &AtomicBool,
    tx: &Sender<WalkItem>,
) -> Result<()> {
    let mut builder = WalkBuilder::new(root);

    let no_ignore = config.no_ignore();
    let vcs = !(no_ignore || config.no_ignore_vcs());
    builder
        .threads(config.threads())
        .hidden(!config.hidden())
        .follow_links(config.follow_links())
        .ignore(!(no_ignore || config.no_ignore_dot()))
        .parents(!(no_ignore || config.no_ignore_parent()))
        .git_ignore(vcs)
        .git_global(vcs)
        .git_exclude(vcs)
        .require_git(false);

    if !(no_ignore || config.no_ignore_dot()) {
        builder.add_custom_ignore_filename(CUSTOM_IGNORE_FILE);
    }

    if !excludes.is_empty() {
        let mut overrides = OverrideBuilder::new(root);
        for pattern in excludes {
            overrides.add(&format!("!{pattern}"))?;
        }
        builder.overrides(overrides.build()?);
    }

    builder.build_parallel().run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            if cancel.load(Ordering::Relaxed) {
                return WalkState::Quit;
            }
            let item = match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => Ok(entry.into_path()),
                Ok(_) => return WalkState::Continue,
                Err(err) => Err(err),
            };
            if tx.send(item).is_err() {
                return WalkState::Quit;
            }
            WalkState::Continue
        })
    });

    Ok(())
}

/// Path carried by a walk error, if any.
#[must_use]
pub fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => error_path(err),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}
