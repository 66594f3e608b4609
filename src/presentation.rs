//! 集計結果の表示
//!
//! Table output goes through comfy-table; JSON and YAML share one
//! serialisable document so both formats carry the same fields.

use std::collections::BTreeMap;

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use langstat_core::{Language, LanguageType, PlainStats, Sort};
use langstat_engine::{Config, Languages, SkippedFile};
use serde::Serialize;

use crate::args::{Args, OutputFormat};
use crate::error::Result;

const HEADER: [&str; 6] = ["Language", "Files", "Lines", "Code", "Comments", "Blanks"];

/// 表示オプション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub colored: bool,
    pub files: bool,
}

impl From<&Args> for RenderOptions {
    fn from(args: &Args) -> Self {
        Self {
            format: args.format,
            colored: args.colored,
            files: args.files,
        }
    }
}

/// Render `languages` in the requested format.
///
/// # Errors
/// Returns an error when JSON or YAML serialisation fails.
pub fn render(languages: &Languages, config: &Config, options: &RenderOptions) -> Result<String> {
    let sort = config.sort().unwrap_or_default();
    match options.format {
        OutputFormat::Table => Ok(render_table(languages, config, options, sort)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&Document::new(languages, options.files))?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&Document::new(languages, options.files))?),
    }
}

#[derive(Serialize)]
struct Document<'a> {
    languages: BTreeMap<&'static str, BTreeMap<&'static str, usize>>,
    #[serde(rename = "Total")]
    total: BTreeMap<&'static str, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<BTreeMap<&'static str, BTreeMap<String, PlainStats>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<BTreeMap<&'static str, BTreeMap<&'static str, PlainStats>>>,
    #[serde(skip_serializing_if = "<[SkippedFile]>::is_empty")]
    skipped: &'a [SkippedFile],
}

impl<'a> Document<'a> {
    fn new(languages: &'a Languages, files: bool) -> Self {
        let children: BTreeMap<_, _> = languages
            .iter()
            .filter(|(_, language)| !language.children.is_empty())
            .map(|(lang, language)| (lang.name(), language.children_plain()))
            .collect();
        Self {
            languages: languages.report_compact_plain(),
            total: languages.total_plain(),
            files: files.then(|| languages.languages_plain()),
            children: (!children.is_empty()).then_some(children),
            skipped: languages.skipped(),
        }
    }
}

fn render_table(languages: &Languages, config: &Config, options: &RenderOptions, sort: Sort) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !options.colored {
        table.force_no_tty();
    }
    if let Some(columns) = config.columns() {
        table.set_width(u16::try_from(columns).unwrap_or(u16::MAX));
    }

    table.set_header(HEADER.iter().map(|title| {
        let cell = Cell::new(title).add_attribute(Attribute::Bold);
        if options.colored { cell.fg(Color::Cyan) } else { cell }
    }));
    for column in table.column_iter_mut().skip(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for (lang, language) in languages.sorted(sort) {
        table.add_row(language_row(lang, language, options.colored));

        for (child, stats) in language.children_plain() {
            table.add_row(stats_row(&format!(" |- {child}"), None, &stats));
        }

        if options.files {
            let mut language = language.clone();
            language.sort_by(sort);
            for report in &language.reports {
                let marker = if report.inaccurate { " (!)" } else { "" };
                table.add_row(stats_row(
                    &format!("   {}{marker}", report.name),
                    Some(1),
                    &report.stats.summarise().plain(),
                ));
            }
        }
    }

    let total = languages.total();
    let mut total_row = language_row_cells("Total", &total);
    if options.colored {
        total_row = total_row
            .into_iter()
            .map(|cell| cell.add_attribute(Attribute::Bold))
            .collect();
    }
    table.add_row(total_row);

    let mut out = table.to_string();
    out.push('\n');
    let inaccurate: usize = languages.iter().map(|(_, language)| language.inaccurate).sum();
    if inaccurate > 0 {
        out.push_str(&format!("{inaccurate} file(s) could not be classified exactly\n"));
    }
    out
}

fn language_row(lang: LanguageType, language: &Language, colored: bool) -> Vec<Cell> {
    let mut cells = language_row_cells(lang.name(), language);
    if colored && let Some(first) = cells.first_mut() {
        *first = Cell::new(lang.name()).fg(Color::Green);
    }
    cells
}

fn language_row_cells(name: &str, language: &Language) -> Vec<Cell> {
    vec![
        Cell::new(name),
        Cell::new(language.files()),
        Cell::new(language.lines()),
        Cell::new(language.code),
        Cell::new(language.comments),
        Cell::new(language.blanks),
    ]
}

fn stats_row(name: &str, files: Option<usize>, stats: &PlainStats) -> Vec<Cell> {
    let get = |key: &str| stats.get(key).copied().unwrap_or_default();
    vec![
        Cell::new(name),
        files.map_or_else(|| Cell::new(""), Cell::new),
        Cell::new(get("lines")),
        Cell::new(get("code")),
        Cell::new(get("comments")),
        Cell::new(get("blanks")),
    ]
}
