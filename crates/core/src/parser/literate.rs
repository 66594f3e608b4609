//! Literate languages: prose with fenced code blocks.
//!
//! Prose and fence lines are comments. The body of a fence whose tag names a
//! known language is cut out and classified with that language's rules; the
//! result lands in `CodeStats::blobs`.

use alloc::string::String;

use super::{Classified, classify_str};
use crate::config::ClassifyConfig;
use crate::language::LanguageSyntax;
use crate::language::LanguageType;
use crate::language::resolve::from_fence_tag;
use crate::language::string_utils::lines;
use crate::stats::CodeStats;

/// 開いているフェンス
struct OpenBlock {
    end: &'static str,
    /// Length of the opening run for ```` ``` ```` / `~~~` style fences.
    run: usize,
    /// `None`: タグ不明。本文は散文として数える
    child: Option<LanguageType>,
    body: String,
}

impl OpenBlock {
    /// A repeated-character fence closes only on a run at least as long as
    /// the one that opened it.
    fn closes(&self, trimmed: &str) -> bool {
        match fence_char(self.end) {
            Some(c) => run_len(trimmed, c) >= self.run.max(self.end.len()),
            None => trimmed.starts_with(self.end),
        }
    }
}

/// `Some(c)` when `delimiter` is a run of a single character.
fn fence_char(delimiter: &str) -> Option<char> {
    let mut chars = delimiter.chars();
    let first = chars.next()?;
    chars.all(|c| c == first).then_some(first)
}

fn run_len(text: &str, c: char) -> usize {
    text.chars().take_while(|&x| x == c).count()
}

pub(super) fn classify(text: &str, syntax: &LanguageSyntax, config: &ClassifyConfig) -> Classified {
    let mut stats = CodeStats::new();
    let mut inaccurate = false;
    let mut open: Option<OpenBlock> = None;

    for line in lines(text) {
        let trimmed = line.trim();

        if let Some(block) = open.as_mut() {
            if block.closes(trimmed) {
                stats.comments += 1;
                if let Some(block) = open.take() {
                    inaccurate |= flush(block, &mut stats, config);
                }
            } else if block.child.is_some() {
                block.body.push_str(line);
                block.body.push('\n');
            } else {
                count_prose(trimmed, &mut stats);
            }
            continue;
        }

        count_prose(trimmed, &mut stats);
        if let Some(rule) = syntax.embed.iter().find(|rule| trimmed.starts_with(rule.start)) {
            let (run, info) = match fence_char(rule.start) {
                Some(c) => {
                    let run = run_len(trimmed, c);
                    (run, &trimmed[run * c.len_utf8()..])
                }
                None => (0, &trimmed[rule.start.len()..]),
            };
            open = Some(OpenBlock {
                end: rule.end,
                run,
                child: rule.child.or_else(|| from_fence_tag(info)),
                body: String::new(),
            });
        }
    }

    if let Some(block) = open {
        flush(block, &mut stats, config);
        inaccurate = true;
    }

    Classified { stats, inaccurate }
}

fn count_prose(trimmed: &str, stats: &mut CodeStats) {
    if trimmed.is_empty() {
        stats.blanks += 1;
    } else {
        stats.comments += 1;
    }
}

/// Classify a finished block and record it. Returns the child's inaccuracy.
fn flush(block: OpenBlock, stats: &mut CodeStats, config: &ClassifyConfig) -> bool {
    let Some(child) = block.child else {
        return false;
    };
    let classified = classify_str(&block.body, child, config);
    stats.blobs.entry(child).or_default().push(classified.stats);
    classified.inaccurate
}
