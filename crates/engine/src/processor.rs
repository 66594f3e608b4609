use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use langstat_core::language::string_utils::{first_line, from_utf8_lossy};
use langstat_core::{LanguageType, Report};

use crate::config::Config;
use crate::error::{EngineError, Result};

/// Resolve, read and classify a single file.
///
/// Returns `Ok(None)` for files that are not counted: binary content, no
/// matching language, or a language outside the configured `types`.
///
/// # Errors
/// Returns [`EngineError::FileRead`] when the file cannot be opened or read.
pub fn process_file(path: &Path, config: &Config) -> Result<Option<(LanguageType, Report)>> {
    let read_err = |source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut reader = BufReader::new(file);

    // 先頭バッファでバイナリ判定とシバン取得
    let language = {
        let head = reader.fill_buf().map_err(read_err)?;
        if head.contains(&0) {
            log::debug!("skipping binary file {}", path.display());
            return Ok(None);
        }
        let (head_text, _) = from_utf8_lossy(head);
        let name = path.to_string_lossy();
        match LanguageType::resolve(&name, first_line(&head_text), None) {
            Ok(language) => language,
            Err(err) => {
                log::debug!("{err}");
                return Ok(None);
            }
        }
    };

    if !config.allows(language) {
        return Ok(None);
    }

    let mut content = Vec::new();
    reader.read_to_end(&mut content).map_err(read_err)?;

    let report = Report::classify(
        path.to_string_lossy(),
        &content,
        language,
        &config.classify_config(),
    );
    if report.inaccurate {
        log::debug!("{} was counted inaccurately", path.display());
    }
    Ok(Some((language, report)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn temp_with(suffix: &str, content: &[u8]) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_process_rust_file() {
        let file = temp_with(".rs", b"// c\nfn main() {}\n\n");
        let (language, report) = process_file(file.path(), &Config::default()).unwrap().unwrap();
        assert_eq!(language, LanguageType::Rust);
        assert_eq!((report.stats.code, report.stats.comments, report.stats.blanks), (1, 1, 1));
        assert_eq!(report.name, file.path().to_string_lossy());
    }

    #[test]
    fn test_shebang_without_extension() {
        let file = temp_with("", b"#!/usr/bin/env python3\nprint(1)\n");
        let (language, report) = process_file(file.path(), &Config::default()).unwrap().unwrap();
        assert_eq!(language, LanguageType::Python);
        assert_eq!(report.stats.comments, 1);
        assert_eq!(report.stats.code, 1);
    }

    #[test]
    fn test_binary_is_skipped() {
        let file = temp_with(".rs", b"fn\0main");
        assert!(process_file(file.path(), &Config::default()).unwrap().is_none());
    }

    #[test]
    fn test_unknown_language_is_skipped() {
        let file = temp_with(".unknownext", b"hello\n");
        assert!(process_file(file.path(), &Config::default()).unwrap().is_none());
    }

    #[test]
    fn test_types_filter() {
        let file = temp_with(".py", b"x = 1\n");
        let config = Config::builder().types(vec![LanguageType::Rust]).build().unwrap();
        assert!(process_file(file.path(), &config).unwrap().is_none());
    }

    #[test]
    fn test_empty_file_is_counted() {
        let file = temp_with(".rs", b"");
        let (_, report) = process_file(file.path(), &Config::default()).unwrap().unwrap();
        assert_eq!(report.stats.lines(), 0);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = process_file(&dir.path().join("gone.rs"), &Config::default()).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
    }
}
