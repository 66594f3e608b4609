//! 言語テーブル
//!
//! The table is the single source of truth for the closed set of
//! [`LanguageType`] values. Declaration order is user-observable: it is the
//! tie-break order when several languages claim the same extension, shebang
//! or MIME type (first declared wins).

use super::syntax::{EmbedRule, LanguageSyntax};

macro_rules! language_table {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $name:literal {
            $($field:ident: $value:expr),* $(,)?
        }
    )+) => {
        /// 登録済み言語の識別子
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum LanguageType {
            $($(#[$meta])* $variant,)+
        }

        impl LanguageType {
            /// All registered languages in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Display name, which is also the name accepted by `FromStr`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Lexical rules of this language.
            #[must_use]
            pub fn syntax(self) -> &'static LanguageSyntax {
                match self {
                    $(Self::$variant => {
                        static SYNTAX: LanguageSyntax = LanguageSyntax {
                            $($field: $value,)*
                            ..LanguageSyntax::EMPTY
                        };
                        &SYNTAX
                    })+
                }
            }
        }
    };
}

const C_BLOCK: &[(&str, &str)] = &[("/*", "*/")];
const C_QUOTES: &[(&str, &str)] = &[("\"", "\""), ("'", "'")];
const DOUBLE_QUOTE: &[(&str, &str)] = &[("\"", "\"")];
const BOTH_QUOTES: &[(&str, &str)] = &[("\"", "\""), ("'", "'")];
const JS_QUOTES: &[(&str, &str)] = &[("\"", "\""), ("'", "'"), ("`", "`")];
const XML_COMMENT: &[(&str, &str)] = &[("<!--", "-->")];
const TRIPLE_DOUBLE: (&str, &str) = ("\"\"\"", "\"\"\"");
const FENCES: &[EmbedRule] = &[EmbedRule::tagged("```", "```"), EmbedRule::tagged("~~~", "~~~")];

language_table! {
    Assembly => "Assembly" {
        line_comments: &[";"],
        extensions: &["asm", "nasm"],
    }
    AssemblyGas => "GNU Style Assembly" {
        line_comments: &["#"],
        multi_line_comments: C_BLOCK,
        quotes: DOUBLE_QUOTE,
        extensions: &["s"],
    }
    Bash => "BASH" {
        line_comments: &["#"],
        quotes: BOTH_QUOTES,
        shebangs: &["#!/bin/sh", "#!/bin/bash"],
        env: &["bash", "sh"],
        extensions: &["bash", "sh"],
        file_names: &[".bash_login", ".bash_logout", ".bash_profile", ".bashrc"],
        mime: &["application/x-sh", "text/x-shellscript"],
    }
    Batch => "Batch" {
        line_comments: &["REM", "rem", "Rem", "::"],
        extensions: &["bat", "btm", "cmd"],
    }
    C => "C" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: C_QUOTES,
        extensions: &["c", "ec", "pgc"],
        mime: &["text/x-c"],
    }
    CHeader => "C Header" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: C_QUOTES,
        extensions: &["h"],
    }
    CMake => "CMake" {
        line_comments: &["#"],
        quotes: DOUBLE_QUOTE,
        extensions: &["cmake"],
        file_names: &["cmakelists.txt"],
    }
    CSharp => "C#" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: C_QUOTES,
        verbatim_quotes: &[("@\"", "\"")],
        extensions: &["cs", "csx"],
    }
    Clojure => "Clojure" {
        line_comments: &[";"],
        quotes: DOUBLE_QUOTE,
        extensions: &["clj", "cljc", "cljs", "edn"],
    }
    Cpp => "C++" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: C_QUOTES,
        verbatim_quotes: &[("R\"(", ")\"")],
        extensions: &["c++", "cc", "cpp", "cxx", "pcc", "tpp"],
        mime: &["text/x-c++src"],
    }
    CppHeader => "C++ Header" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: C_QUOTES,
        verbatim_quotes: &[("R\"(", ")\"")],
        extensions: &["hh", "hpp", "hxx", "inl", "ipp"],
    }
    Css => "CSS" {
        multi_line_comments: C_BLOCK,
        quotes: BOTH_QUOTES,
        extensions: &["css"],
        mime: &["text/css"],
    }
    D => "D" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        nested_comments: &[("/+", "+/")],
        quotes: C_QUOTES,
        verbatim_quotes: &[("r\"", "\""), ("`", "`")],
        extensions: &["d"],
    }
    Dart => "Dart" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: &[TRIPLE_DOUBLE, ("'''", "'''"), ("\"", "\""), ("'", "'")],
        extensions: &["dart"],
    }
    Dockerfile => "Dockerfile" {
        line_comments: &["#"],
        quotes: DOUBLE_QUOTE,
        extensions: &["dockerfile"],
        file_names: &["dockerfile"],
    }
    Elixir => "Elixir" {
        line_comments: &["#"],
        quotes: DOUBLE_QUOTE,
        doc_quotes: &[TRIPLE_DOUBLE],
        env: &["elixir"],
        extensions: &["ex", "exs"],
    }
    Elm => "Elm" {
        line_comments: &["--"],
        multi_line_comments: &[("{-", "-}")],
        allows_nested: true,
        quotes: DOUBLE_QUOTE,
        extensions: &["elm"],
    }
    Erlang => "Erlang" {
        line_comments: &["%"],
        quotes: DOUBLE_QUOTE,
        extensions: &["erl", "hrl"],
    }
    FSharp => "F#" {
        line_comments: &["//"],
        multi_line_comments: &[("(*", "*)")],
        quotes: DOUBLE_QUOTE,
        verbatim_quotes: &[("@\"", "\"")],
        extensions: &["fs", "fsi", "fsscript", "fsx"],
    }
    Fish => "Fish" {
        line_comments: &["#"],
        quotes: BOTH_QUOTES,
        shebangs: &["#!/usr/bin/fish"],
        env: &["fish"],
        extensions: &["fish"],
    }
    Go => "Go" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: C_QUOTES,
        verbatim_quotes: &[("`", "`")],
        extensions: &["go"],
    }
    Groovy => "Groovy" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: BOTH_QUOTES,
        env: &["groovy"],
        extensions: &["gradle", "groovy", "grt", "gtpl", "gvy"],
    }
    Haskell => "Haskell" {
        line_comments: &["--"],
        multi_line_comments: &[("{-", "-}")],
        allows_nested: true,
        quotes: DOUBLE_QUOTE,
        extensions: &["hs"],
    }
    Html => "HTML" {
        multi_line_comments: XML_COMMENT,
        quotes: DOUBLE_QUOTE,
        extensions: &["htm", "html"],
        mime: &["text/html"],
    }
    Ini => "INI" {
        line_comments: &[";", "#"],
        extensions: &["ini"],
    }
    Java => "Java" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: &[TRIPLE_DOUBLE, ("\"", "\""), ("'", "'")],
        extensions: &["java"],
        mime: &["text/x-java"],
    }
    JavaScript => "JavaScript" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: JS_QUOTES,
        env: &["node"],
        extensions: &["cjs", "js", "mjs"],
        mime: &["application/javascript", "text/javascript"],
    }
    Json => "JSON" {
        quotes: DOUBLE_QUOTE,
        extensions: &["json"],
        mime: &["application/json"],
    }
    Jsx => "JSX" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: JS_QUOTES,
        extensions: &["jsx"],
    }
    Julia => "Julia" {
        line_comments: &["#"],
        multi_line_comments: &[("#=", "=#")],
        allows_nested: true,
        quotes: DOUBLE_QUOTE,
        doc_quotes: &[TRIPLE_DOUBLE],
        env: &["julia"],
        extensions: &["jl"],
    }
    Kotlin => "Kotlin" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        allows_nested: true,
        quotes: C_QUOTES,
        verbatim_quotes: &[TRIPLE_DOUBLE],
        extensions: &["kt", "kts"],
    }
    Lisp => "Lisp" {
        line_comments: &[";"],
        multi_line_comments: &[("#|", "|#")],
        allows_nested: true,
        quotes: DOUBLE_QUOTE,
        extensions: &["cl", "lisp", "lsp"],
    }
    Lua => "Lua" {
        line_comments: &["--"],
        multi_line_comments: &[("--[[", "]]")],
        quotes: BOTH_QUOTES,
        verbatim_quotes: &[("[[", "]]")],
        env: &["lua"],
        extensions: &["lua"],
    }
    Makefile => "Makefile" {
        line_comments: &["#"],
        extensions: &["mak", "makefile", "mk"],
        file_names: &["gnumakefile", "makefile"],
    }
    Markdown => "Markdown" {
        literate: true,
        embed: FENCES,
        extensions: &["markdown", "md"],
        mime: &["text/markdown"],
    }
    Nix => "Nix" {
        line_comments: &["#"],
        multi_line_comments: C_BLOCK,
        quotes: DOUBLE_QUOTE,
        verbatim_quotes: &[("''", "''")],
        extensions: &["nix"],
    }
    ObjectiveC => "Objective-C" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: C_QUOTES,
        extensions: &["m"],
    }
    OCaml => "OCaml" {
        multi_line_comments: &[("(*", "*)")],
        allows_nested: true,
        quotes: DOUBLE_QUOTE,
        extensions: &["ml", "mli", "mll", "mly"],
    }
    Org => "Org" {
        literate: true,
        embed: &[
            EmbedRule::tagged("#+BEGIN_SRC", "#+END_SRC"),
            EmbedRule::tagged("#+begin_src", "#+end_src"),
        ],
        extensions: &["org"],
    }
    Pascal => "Pascal" {
        line_comments: &["//"],
        multi_line_comments: &[("{", "}"), ("(*", "*)")],
        quotes: &[("'", "'")],
        extensions: &["pas"],
    }
    Perl => "Perl" {
        line_comments: &["#"],
        multi_line_comments: &[("=pod", "=cut")],
        quotes: BOTH_QUOTES,
        shebangs: &["#!/usr/bin/perl"],
        env: &["perl"],
        extensions: &["pl", "pm"],
    }
    Php => "PHP" {
        line_comments: &["#", "//"],
        multi_line_comments: C_BLOCK,
        quotes: BOTH_QUOTES,
        env: &["php"],
        extensions: &["php"],
    }
    PlainText => "Plain Text" {
        literate: true,
        extensions: &["text", "txt"],
        mime: &["text/plain"],
    }
    PowerShell => "PowerShell" {
        line_comments: &["#"],
        multi_line_comments: &[("<#", "#>")],
        quotes: BOTH_QUOTES,
        env: &["pwsh"],
        extensions: &["ps1", "psd1", "psm1"],
    }
    Prolog => "Prolog" {
        line_comments: &["%"],
        multi_line_comments: C_BLOCK,
        quotes: BOTH_QUOTES,
        extensions: &["pl", "pro", "prolog"],
    }
    Protobuf => "Protocol Buffers" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: BOTH_QUOTES,
        extensions: &["proto"],
    }
    Python => "Python" {
        line_comments: &["#"],
        quotes: BOTH_QUOTES,
        doc_quotes: &[TRIPLE_DOUBLE, ("'''", "'''")],
        env: &["python", "python2", "python3"],
        extensions: &["py", "pyi", "pyw"],
        mime: &["text/x-python", "application/x-python-code"],
    }
    R => "R" {
        line_comments: &["#"],
        quotes: BOTH_QUOTES,
        env: &["Rscript"],
        extensions: &["r"],
    }
    RMarkdown => "RMarkdown" {
        literate: true,
        embed: &[EmbedRule::tagged("```", "```")],
        extensions: &["rmd"],
    }
    Ruby => "Ruby" {
        line_comments: &["#"],
        multi_line_comments: &[("=begin", "=end")],
        quotes: BOTH_QUOTES,
        env: &["ruby"],
        extensions: &["rb"],
        file_names: &["gemfile", "rakefile"],
    }
    Rust => "Rust" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        allows_nested: true,
        quotes: DOUBLE_QUOTE,
        verbatim_quotes: &[("r##\"", "\"##"), ("r#\"", "\"#")],
        extensions: &["rs"],
        mime: &["text/rust"],
    }
    Sass => "Sass" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: BOTH_QUOTES,
        extensions: &["sass", "scss"],
    }
    Scala => "Scala" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        allows_nested: true,
        quotes: DOUBLE_QUOTE,
        verbatim_quotes: &[TRIPLE_DOUBLE],
        extensions: &["sc", "scala"],
    }
    Sql => "SQL" {
        line_comments: &["--"],
        multi_line_comments: C_BLOCK,
        quotes: &[("'", "'")],
        extensions: &["sql"],
    }
    Swift => "Swift" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        allows_nested: true,
        quotes: &[TRIPLE_DOUBLE, ("\"", "\"")],
        extensions: &["swift"],
    }
    Tcl => "Tcl" {
        line_comments: &["#"],
        quotes: DOUBLE_QUOTE,
        env: &["tclsh"],
        extensions: &["tcl"],
    }
    Tex => "TeX" {
        line_comments: &["%"],
        extensions: &["sty", "tex"],
    }
    Toml => "TOML" {
        line_comments: &["#"],
        quotes: &[TRIPLE_DOUBLE, ("\"", "\"")],
        verbatim_quotes: &[("'''", "'''"), ("'", "'")],
        extensions: &["toml"],
    }
    Tsx => "TSX" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: JS_QUOTES,
        extensions: &["tsx"],
    }
    TypeScript => "TypeScript" {
        line_comments: &["//"],
        multi_line_comments: C_BLOCK,
        quotes: JS_QUOTES,
        extensions: &["cts", "mts", "ts"],
    }
    VimScript => "Vim script" {
        line_comments: &["\""],
        quotes: &[("'", "'")],
        extensions: &["vim"],
        file_names: &[".gvimrc", ".vimrc", "_vimrc"],
    }
    Xml => "XML" {
        multi_line_comments: XML_COMMENT,
        quotes: DOUBLE_QUOTE,
        extensions: &["svg", "xml", "xsd", "xsl", "xslt"],
        mime: &["application/xml", "text/xml"],
    }
    Yaml => "YAML" {
        line_comments: &["#"],
        quotes: DOUBLE_QUOTE,
        extensions: &["yaml", "yml"],
    }
    Zig => "Zig" {
        line_comments: &["//"],
        quotes: C_QUOTES,
        extensions: &["zig"],
    }
}
