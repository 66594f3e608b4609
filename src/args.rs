use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use langstat_core::{LanguageType, Sort};
use langstat_engine::IGNORE_NOTHING;
use std::path::PathBuf;

use crate::parsers;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(
    name = "langstat",
    version,
    about = "言語ごとのコード/コメント/空行の集計ツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// 対象パス
    #[arg(value_hint = ValueHint::AnyPath, default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// 除外パターン (カンマ区切り, "nothing" で除外なし)
    #[arg(short = 'i', long, value_delimiter = ',', default_value = IGNORE_NOTHING, help_heading = "走査")]
    pub ignore_paths: Vec<String>,

    /// 隠しファイルも対象にする
    #[arg(long, help_heading = "走査")]
    pub hidden: bool,

    /// ignore ファイルを一切使わない
    #[arg(long, help_heading = "走査")]
    pub no_ignore: bool,

    /// 親ディレクトリの ignore ファイルを使わない
    #[arg(long, help_heading = "走査")]
    pub no_ignore_parent: bool,

    /// .ignore / .langstatignore を使わない
    #[arg(long, help_heading = "走査")]
    pub no_ignore_dot: bool,

    /// .gitignore 等 VCS の ignore を使わない
    #[arg(long, help_heading = "走査")]
    pub no_ignore_vcs: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査")]
    pub follow: bool,

    /// 対象言語 (カンマ区切り, 例: Rust,Python)
    #[arg(long, value_delimiter = ',', help_heading = "走査")]
    pub types: Vec<LanguageType>,

    /// 走査スレッド数 (0 = CPU 数)
    #[arg(long, help_heading = "走査")]
    pub threads: Option<usize>,

    /// ドキュメント文字列をコメントとして数える
    #[arg(long, help_heading = "分類")]
    pub doc_as_comments: bool,

    /// ソートキー (blanks, comments, code, files, lines)
    #[arg(short, long, help_heading = "出力")]
    pub sort: Option<Sort>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 色付き表示
    #[arg(long, default_value_t = true, action = ArgAction::Set, help_heading = "出力")]
    pub colored: bool,

    /// ファイル単位の内訳も表示
    #[arg(long, help_heading = "出力")]
    pub files: bool,

    /// 表の幅
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "出力")]
    pub columns: Option<usize>,

    /// ログを詳細にする (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["langstat"]).unwrap();
        assert_eq!(args.paths, [PathBuf::from(".")]);
        assert_eq!(args.ignore_paths, [IGNORE_NOTHING]);
        assert!(args.colored);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.sort, None);
        assert!(args.types.is_empty());
    }

    #[test]
    fn test_comma_separated_lists() {
        let args = Args::try_parse_from(["langstat", "src", "-i", "target,*.md", "--types", "Rust,python"]).unwrap();
        assert_eq!(args.ignore_paths, ["target", "*.md"]);
        assert_eq!(args.types, [LanguageType::Rust, LanguageType::Python]);
    }

    #[test]
    fn test_sort_and_colored() {
        let args = Args::try_parse_from(["langstat", "-s", "CODE", "--colored", "false"]).unwrap();
        assert_eq!(args.sort, Some(Sort::Code));
        assert!(!args.colored);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Args::try_parse_from(["langstat", "--sort", "size"]).is_err());
        assert!(Args::try_parse_from(["langstat", "--types", "Klingon"]).is_err());
        assert!(Args::try_parse_from(["langstat", "--columns", "0"]).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let args = Args::try_parse_from(["langstat", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
