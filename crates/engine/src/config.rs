//! 走査設定
//!
//! [`Config`] is built through [`ConfigBuilder`]; `build()` validates the
//! values. Settings can also come from `langstat.toml` / `.langstatrc` files,
//! which pre-populate a builder that callers then override.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use langstat_core::{ClassifyConfig, LanguageType, Sort};
use serde::Deserialize;

use crate::error::{EngineError, Result};

/// 設定ファイル名 (上から順に読み込み、後のものが優先)
pub const CONFIG_FILE_NAMES: [&str; 2] = ["langstat.toml", ".langstatrc"];

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// 表の幅
    #[builder(default)]
    columns: Option<usize>,
    #[builder(default)]
    follow_links: bool,
    /// 隠しファイルも数える
    #[builder(default)]
    hidden: bool,
    /// ignore ファイルを一切使わない
    #[builder(default)]
    no_ignore: bool,
    #[builder(default)]
    no_ignore_parent: bool,
    #[builder(default)]
    no_ignore_dot: bool,
    #[builder(default)]
    no_ignore_vcs: bool,
    #[builder(default)]
    treat_doc_strings_as_comments: bool,
    #[builder(default)]
    sort: Option<Sort>,
    /// 対象言語の制限
    #[builder(default)]
    types: Option<Vec<LanguageType>>,
    #[builder(default)]
    ignore_paths: Vec<String>,
    /// 0 の場合は CPU 数
    #[builder(default)]
    threads: usize,
}

impl ConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(Some(0)) = self.columns {
            return Err("columns must be greater than zero".to_string());
        }
        if let Some(Some(types)) = &self.types
            && types.is_empty()
        {
            return Err("types must name at least one language".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: None,
            follow_links: false,
            hidden: false,
            no_ignore: false,
            no_ignore_parent: false,
            no_ignore_dot: false,
            no_ignore_vcs: false,
            treat_doc_strings_as_comments: false,
            sort: None,
            types: None,
            ignore_paths: Vec::new(),
            threads: 0,
        }
    }
}

impl Config {
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    #[must_use]
    pub const fn columns(&self) -> Option<usize> {
        self.columns
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    #[must_use]
    pub const fn hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub const fn no_ignore(&self) -> bool {
        self.no_ignore
    }

    #[must_use]
    pub const fn no_ignore_parent(&self) -> bool {
        self.no_ignore_parent
    }

    #[must_use]
    pub const fn no_ignore_dot(&self) -> bool {
        self.no_ignore_dot
    }

    #[must_use]
    pub const fn no_ignore_vcs(&self) -> bool {
        self.no_ignore_vcs
    }

    #[must_use]
    pub const fn treat_doc_strings_as_comments(&self) -> bool {
        self.treat_doc_strings_as_comments
    }

    #[must_use]
    pub const fn sort(&self) -> Option<Sort> {
        self.sort
    }

    #[must_use]
    pub fn types(&self) -> Option<&[LanguageType]> {
        self.types.as_deref()
    }

    #[must_use]
    pub fn ignore_paths(&self) -> &[String] {
        &self.ignore_paths
    }

    /// Worker count with `0` resolved to the number of CPUs.
    #[must_use]
    pub fn threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }

    /// 行分類に渡すオプション
    #[must_use]
    pub const fn classify_config(&self) -> ClassifyConfig {
        ClassifyConfig::new().with_doc_strings_as_comments(self.treat_doc_strings_as_comments)
    }

    /// Whether `language` passes the `types` restriction.
    #[must_use]
    pub fn allows(&self, language: LanguageType) -> bool {
        self.types.as_ref().is_none_or(|types| types.contains(&language))
    }

    /// Load the default config files and build the result.
    ///
    /// # Errors
    ///
    /// Returns an error when a config file exists but cannot be read or
    /// parsed, or when the merged values fail validation.
    pub fn from_config_files() -> Result<Self> {
        Ok(Self::builder_from_config_files()?.build()?)
    }

    /// Builder pre-populated from the default config files, for callers that
    /// apply their own overrides before building.
    ///
    /// # Errors
    ///
    /// See [`Self::from_config_files`].
    pub fn builder_from_config_files() -> Result<ConfigBuilder> {
        Self::builder_from_paths(&config_file_candidates())
    }

    /// Builder populated from `paths` in order. Missing files are skipped.
    ///
    /// # Errors
    ///
    /// See [`Self::from_config_files`].
    pub fn builder_from_paths(paths: &[PathBuf]) -> Result<ConfigBuilder> {
        let mut builder = Self::builder();
        for path in paths {
            if let Some(file) = ConfigFile::read(path)? {
                log::debug!("loaded config file {}", path.display());
                file.apply(&mut builder)?;
            }
        }
        Ok(builder)
    }

    /// Parse a single TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParse`] for malformed TOML and
    /// [`EngineError::InvalidConfig`] for invalid values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file = ConfigFile::parse(source, Path::new("<inline>"))?;
        let mut builder = Self::builder();
        file.apply(&mut builder)?;
        Ok(builder.build()?)
    }
}

/// Config file locations: user config directory, home directory, then the
/// current directory.
#[must_use]
pub fn config_file_candidates() -> Vec<PathBuf> {
    let dirs = [
        dirs::config_dir().map(|dir| dir.join("langstat")),
        dirs::home_dir(),
        std::env::current_dir().ok(),
    ];
    dirs.into_iter()
        .flatten()
        .flat_map(|dir| CONFIG_FILE_NAMES.map(|name| dir.join(name)))
        .collect()
}

/// 設定ファイルの内容。未知のキーは無視する
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    columns: Option<usize>,
    follow_links: Option<bool>,
    hidden: Option<bool>,
    no_ignore: Option<bool>,
    no_ignore_parent: Option<bool>,
    no_ignore_dot: Option<bool>,
    no_ignore_vcs: Option<bool>,
    treat_doc_strings_as_comments: Option<bool>,
    sort: Option<String>,
    types: Option<Vec<String>>,
    ignore_paths: Option<Vec<String>>,
    threads: Option<usize>,
}

impl ConfigFile {
    fn read(path: &Path) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(source) => Self::parse(&source, path).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EngineError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    fn parse(source: &str, path: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|source| EngineError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply(self, builder: &mut ConfigBuilder) -> Result<()> {
        if let Some(columns) = self.columns {
            builder.columns(columns);
        }
        if let Some(value) = self.follow_links {
            builder.follow_links(value);
        }
        if let Some(value) = self.hidden {
            builder.hidden(value);
        }
        if let Some(value) = self.no_ignore {
            builder.no_ignore(value);
        }
        if let Some(value) = self.no_ignore_parent {
            builder.no_ignore_parent(value);
        }
        if let Some(value) = self.no_ignore_dot {
            builder.no_ignore_dot(value);
        }
        if let Some(value) = self.no_ignore_vcs {
            builder.no_ignore_vcs(value);
        }
        if let Some(value) = self.treat_doc_strings_as_comments {
            builder.treat_doc_strings_as_comments(value);
        }
        if let Some(sort) = self.sort {
            let sort: Sort = sort
                .parse()
                .map_err(|e: langstat_core::CoreError| EngineError::InvalidConfig(e.to_string()))?;
            builder.sort(sort);
        }
        if let Some(types) = self.types {
            let types = types
                .iter()
                .map(|name| name.parse::<LanguageType>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
            builder.types(types);
        }
        if let Some(paths) = self.ignore_paths {
            builder.ignore_paths(paths);
        }
        if let Some(threads) = self.threads {
            builder.threads(threads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_builder_matches_default() {
        let built = Config::builder().build().unwrap();
        assert_eq!(built, Config::default());
        assert!(built.threads() >= 1);
    }

    #[test]
    fn test_zero_columns_is_rejected() {
        let err = Config::builder().columns(0).build().unwrap_err();
        let err = EngineError::from(err);
        assert!(matches!(err, EngineError::InvalidConfig(msg) if msg.contains("columns")));
    }

    #[test]
    fn test_empty_types_is_rejected() {
        let result = Config::builder().types(Vec::<LanguageType>::new()).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_allows_respects_types() {
        let config = Config::builder().types(vec![LanguageType::Rust]).build().unwrap();
        assert!(config.allows(LanguageType::Rust));
        assert!(!config.allows(LanguageType::Python));
        assert!(Config::default().allows(LanguageType::Python));
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
            columns = 100
            hidden = true
            sort = "code"
            types = ["Rust", "python"]
            treat_doc_strings_as_comments = true
            unknown_key = "ignored"
            "#,
        )
        .unwrap();
        assert_eq!(config.columns(), Some(100));
        assert!(config.hidden());
        assert_eq!(config.sort(), Some(Sort::Code));
        assert_eq!(config.types(), Some(&[LanguageType::Rust, LanguageType::Python][..]));
        assert!(config.classify_config().treat_doc_strings_as_comments);
    }

    #[test]
    fn test_from_toml_str_rejects_bad_values() {
        assert!(matches!(
            Config::from_toml_str("sort = \"size\""),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_toml_str("columns = \"wide\""),
            Err(EngineError::ConfigParse { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("columns = 0"),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("langstat.toml");
        let second = dir.path().join(".langstatrc");
        fs::write(&first, "columns = 80\nhidden = true\n").unwrap();
        fs::write(&second, "columns = 120\n").unwrap();
        let missing = dir.path().join("missing.toml");

        let config = Config::builder_from_paths(&[first, missing, second])
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.columns(), Some(120));
        assert!(config.hidden());
    }

    #[test]
    fn test_candidates_cover_both_file_names() {
        let candidates = config_file_candidates();
        assert!(candidates.iter().any(|p| p.ends_with("langstat.toml")));
        assert!(candidates.iter().any(|p| p.ends_with(".langstatrc")));
    }
}
