//! 状態機械による行分類
//!
//! State is carried across lines, so a block comment or string opened on one
//! line keeps classifying the following ones until it is closed.

use alloc::vec::Vec;

use super::Classified;
use crate::config::ClassifyConfig;
use crate::language::LanguageSyntax;
use crate::stats::CodeStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment {
        start: &'static str,
        end: &'static str,
        nest: bool,
        depth: usize,
    },
    Str {
        end: &'static str,
        verbatim: bool,
    },
    DocString {
        end: &'static str,
    },
}

/// Token recognised while in code.
#[derive(Debug, Clone, Copy)]
enum Opener {
    Line(&'static str),
    Block {
        start: &'static str,
        end: &'static str,
        nest: bool,
    },
    Doc(&'static str, &'static str),
    Quote {
        start: &'static str,
        end: &'static str,
        verbatim: bool,
    },
}

impl Opener {
    const fn start(self) -> &'static str {
        match self {
            Self::Line(start) | Self::Block { start, .. } | Self::Doc(start, _) | Self::Quote { start, .. } => start,
        }
    }

    const fn len(self) -> usize {
        self.start().len()
    }
}

/// 1 行ずつ分類するスキャナ
#[derive(Debug)]
pub struct SyntaxScanner<'a> {
    syntax: &'a LanguageSyntax,
    config: ClassifyConfig,
    important: Vec<&'static str>,
    state: State,
    stats: CodeStats,
}

impl<'a> SyntaxScanner<'a> {
    #[must_use]
    pub fn new(syntax: &'a LanguageSyntax, config: ClassifyConfig) -> Self {
        Self {
            syntax,
            config,
            important: syntax.important_tokens(),
            state: State::Code,
            stats: CodeStats::new(),
        }
    }

    /// Classify one line (without its terminator).
    pub fn push_line(&mut self, line: &str) {
        let start_state = self.state;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            match start_state {
                State::Code | State::LineComment => self.stats.blanks += 1,
                State::BlockComment { .. } => self.stats.comments += 1,
                State::Str { .. } => self.stats.code += 1,
                State::DocString { .. } => self.count_doc_line(),
            }
            return;
        }

        if start_state == State::Code && !self.important.iter().any(|token| line.contains(token)) {
            if self.syntax.line_comments.iter().any(|prefix| trimmed.starts_with(prefix)) {
                self.stats.comments += 1;
            } else {
                self.stats.code += 1;
            }
            return;
        }

        let (has_code, has_comment) = self.scan(line);
        if has_code || !has_comment {
            self.stats.code += 1;
        } else {
            self.stats.comments += 1;
        }
    }

    /// Consume the scanner. An open comment, string or doc string marks the
    /// result inaccurate.
    #[must_use]
    pub fn finish(self) -> Classified {
        Classified {
            inaccurate: !matches!(self.state, State::Code | State::LineComment),
            stats: self.stats,
        }
    }

    fn count_doc_line(&mut self) {
        if self.config.treat_doc_strings_as_comments {
            self.stats.comments += 1;
        } else {
            self.stats.code += 1;
        }
    }

    /// Walk a line token by token. Returns `(has_code, has_comment)`.
    fn scan(&mut self, line: &str) -> (bool, bool) {
        let doc_as_comment = self.config.treat_doc_strings_as_comments;
        let mut has_code = false;
        let mut has_comment = false;
        let mut first_token = self.state == State::Code;
        let mut i = 0;

        while let Some(c) = line[i..].chars().next() {
            let rest = &line[i..];
            let mut step = c.len_utf8();

            match self.state {
                State::LineComment => {
                    has_comment = true;
                    break;
                }
                State::Code if c.is_whitespace() => {}
                State::Code => {
                    match self.match_opener(rest, first_token) {
                        Some(Opener::Line(_)) => {
                            has_comment = true;
                            self.state = State::LineComment;
                            break;
                        }
                        Some(opener @ Opener::Block { start, end, nest }) => {
                            has_comment = true;
                            self.state = State::BlockComment {
                                start,
                                end,
                                nest,
                                depth: 1,
                            };
                            step = opener.len();
                        }
                        Some(opener @ Opener::Doc(_, end)) => {
                            if doc_as_comment {
                                has_comment = true;
                            } else {
                                has_code = true;
                            }
                            self.state = State::DocString { end };
                            step = opener.len();
                        }
                        Some(opener @ Opener::Quote { end, verbatim, .. }) => {
                            has_code = true;
                            self.state = State::Str { end, verbatim };
                            step = opener.len();
                        }
                        None => has_code = true,
                    }
                    first_token = false;
                }
                State::BlockComment {
                    start,
                    end,
                    nest,
                    depth,
                } => {
                    if rest.starts_with(end) {
                        self.state = if depth > 1 {
                            State::BlockComment {
                                start,
                                end,
                                nest,
                                depth: depth - 1,
                            }
                        } else {
                            State::Code
                        };
                        step = end.len();
                    } else if nest && rest.starts_with(start) {
                        self.state = State::BlockComment {
                            start,
                            end,
                            nest,
                            depth: depth + 1,
                        };
                        step = start.len();
                    }
                    has_comment |= !c.is_whitespace();
                    first_token = false;
                }
                State::Str { end, verbatim } => {
                    if !verbatim && c == '\\' {
                        step += rest[1..].chars().next().map_or(0, char::len_utf8);
                    } else if rest.starts_with(end) {
                        self.state = State::Code;
                        step = end.len();
                    }
                    has_code = true;
                    first_token = false;
                }
                State::DocString { end } => {
                    if c == '\\' {
                        step += rest[1..].chars().next().map_or(0, char::len_utf8);
                    } else if rest.starts_with(end) {
                        self.state = State::Code;
                        step = end.len();
                    }
                    if !c.is_whitespace() {
                        if doc_as_comment {
                            has_comment = true;
                        } else {
                            has_code = true;
                        }
                    }
                    first_token = false;
                }
            }
            i += step;
        }

        if self.state == State::LineComment {
            self.state = State::Code;
        }
        (has_code, has_comment)
    }

    /// Longest opener at the start of `rest`. On equal length comments win,
    /// then doc quotes, verbatim quotes and plain quotes.
    fn match_opener(&self, rest: &str, first_token: bool) -> Option<Opener> {
        let syntax = self.syntax;
        let line = syntax.line_comments.iter().map(|&start| Opener::Line(start));
        let block = syntax.multi_line_comments.iter().map(|&(start, end)| Opener::Block {
            start,
            end,
            nest: syntax.allows_nested,
        });
        let nested = syntax.nested_comments.iter().map(|&(start, end)| Opener::Block {
            start,
            end,
            nest: true,
        });
        // 行頭以外のドキュメント文字列は通常の文字列として扱う
        let doc = syntax.doc_quotes.iter().map(|&(start, end)| {
            if first_token {
                Opener::Doc(start, end)
            } else {
                Opener::Quote {
                    start,
                    end,
                    verbatim: false,
                }
            }
        });
        let verbatim = syntax.verbatim_quotes.iter().map(|&(start, end)| Opener::Quote {
            start,
            end,
            verbatim: true,
        });
        let quotes = syntax.quotes.iter().map(|&(start, end)| Opener::Quote {
            start,
            end,
            verbatim: false,
        });

        let mut best: Option<Opener> = None;
        for opener in line.chain(block).chain(nested).chain(doc).chain(verbatim).chain(quotes) {
            let start = opener.start();
            if !start.is_empty()
                && rest.starts_with(start)
                && best.is_none_or(|current| start.len() > current.len())
            {
                best = Some(opener);
            }
        }
        best
    }
}
