//! 言語判定
//!
//! Precedence: exact file name, shebang, extension, MIME type. Within one
//! rule the first language in table order wins, so `.pl` is Perl, not Prolog.

use alloc::string::String;

use super::LanguageType;
use crate::error::{CoreError, Result};

fn find(mut pred: impl FnMut(LanguageType) -> bool) -> Option<LanguageType> {
    LanguageType::ALL.iter().copied().find(|&lang| pred(lang))
}

/// ファイル名 (大文字小文字を無視) から判定する
#[must_use]
pub fn from_file_name(file_name: &str) -> Option<LanguageType> {
    find(|lang| {
        lang.syntax()
            .file_names
            .iter()
            .any(|name| name.eq_ignore_ascii_case(file_name))
    })
}

/// 拡張子 (先頭の `.` は不要) から判定する
#[must_use]
pub fn from_extension(extension: &str) -> Option<LanguageType> {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    if extension.is_empty() {
        return None;
    }
    find(|lang| {
        lang.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    })
}

#[must_use]
pub fn from_mime(mime: &str) -> Option<LanguageType> {
    let essence = mime.split(';').next().unwrap_or(mime).trim();
    find(|lang| {
        lang.syntax()
            .mime
            .iter()
            .any(|m| m.eq_ignore_ascii_case(essence))
    })
}

/// Resolve from the first line of a file.
///
/// Declared shebang prefixes are tried first. Otherwise the interpreter is
/// taken from `#!/usr/bin/env [-flags] name` or from the basename of a direct
/// interpreter path, and a trailing version such as `3.11` is ignored.
#[must_use]
pub fn from_shebang(line: &str) -> Option<LanguageType> {
    let line = line.trim_end();
    if !line.starts_with("#!") {
        return None;
    }

    if let Some(lang) = find(|lang| {
        lang.shebangs().iter().any(|shebang| {
            line.strip_prefix(shebang)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        })
    }) {
        return Some(lang);
    }

    let interpreter = interpreter_name(line)?;
    let versionless = interpreter.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    find(|lang| lang.syntax().env.iter().any(|&env| env == interpreter))
        .or_else(|| find(|lang| lang.syntax().env.iter().any(|&env| env == versionless)))
}

fn interpreter_name(line: &str) -> Option<&str> {
    let mut words = line[2..].split_whitespace();
    let program = words.next()?;
    let basename = program.rsplit('/').next().unwrap_or(program);

    if basename == "env" {
        // `env -S python3 -u` などのオプションを読み飛ばす
        words.find(|word| !word.starts_with('-') && !word.contains('='))
    } else {
        Some(basename)
    }
}

/// パスから判定する (ファイル名 > 拡張子)
///
/// Both `/` and `\` are accepted as separators.
#[must_use]
pub fn from_path(path: &str) -> Option<LanguageType> {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    if file_name.is_empty() {
        return None;
    }
    from_file_name(file_name).or_else(|| {
        file_name
            .rsplit_once('.')
            .and_then(|(_, extension)| from_extension(extension))
    })
}

/// Resolve the info string of a literate code fence.
///
/// ```` ```rust ````, ```` ```{r echo=FALSE} ```` and ```` ```.py ```` all
/// name a language either by display name or by extension.
#[must_use]
pub fn from_fence_tag(info: &str) -> Option<LanguageType> {
    let info = info.trim_start_matches(['`', '~']).trim();
    let info = info.strip_prefix('{').unwrap_or(info);
    let tag = info
        .split(|c: char| c.is_whitespace() || c == ',' || c == '}')
        .next()
        .unwrap_or_default();
    let tag = tag.strip_prefix('.').unwrap_or(tag);
    if tag.is_empty() {
        return None;
    }
    tag.parse::<LanguageType>()
        .ok()
        .or_else(|| from_extension(tag))
}

/// Full resolution for a file.
///
/// # Errors
///
/// Returns [`CoreError::UnresolvedLanguage`] when no rule matches.
pub fn resolve(path: &str, first_line: Option<&str>, mime: Option<&str>) -> Result<LanguageType> {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    from_file_name(file_name)
        .or_else(|| first_line.and_then(from_shebang))
        .or_else(|| from_path(path))
        .or_else(|| mime.and_then(from_mime))
        .ok_or_else(|| CoreError::UnresolvedLanguage(String::from(path)))
}
