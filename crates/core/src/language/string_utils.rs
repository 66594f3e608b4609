//! テキスト処理ユーティリティ

use alloc::borrow::Cow;
use alloc::string::String;

/// Decode bytes as UTF-8, replacing invalid sequences with `U+FFFD`.
///
/// The second value reports whether any replacement happened.
#[must_use]
pub fn from_utf8_lossy(input: &[u8]) -> (Cow<'_, str>, bool) {
    match core::str::from_utf8(input) {
        Ok(valid) => (Cow::Borrowed(valid), false),
        Err(_) => {
            let mut res = String::with_capacity(input.len());
            for chunk in input.utf8_chunks() {
                res.push_str(chunk.valid());
                if !chunk.invalid().is_empty() {
                    res.push(char::REPLACEMENT_CHARACTER);
                }
            }
            (Cow::Owned(res), true)
        }
    }
}

/// `\n` で行分割する (末尾の `\r` は除去)
///
/// A trailing newline does not produce an extra empty line, so
/// `"a\nb\n"` yields two lines and `""` yields none.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let empty = text.is_empty();
    body.split('\n')
        .filter(move |_| !empty)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// 先頭行 (シバン判定用)
#[must_use]
pub fn first_line(text: &str) -> Option<&str> {
    lines(text).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_valid_utf8_is_borrowed() {
        let (text, lossy) = from_utf8_lossy(b"hello");
        assert!(matches!(text, Cow::Borrowed("hello")));
        assert!(!lossy);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let (text, lossy) = from_utf8_lossy(b"a\xffb");
        assert_eq!(text, "a\u{FFFD}b");
        assert!(lossy);
    }

    #[test]
    fn test_lines_without_trailing_newline() {
        assert_eq!(lines("a\nb").collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_lines_with_trailing_newline() {
        assert_eq!(lines("a\nb\n").collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(lines("a\n\n").collect::<Vec<_>>(), ["a", ""]);
    }

    #[test]
    fn test_lines_strip_carriage_return() {
        assert_eq!(lines("a\r\nb\r\n").collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert_eq!(lines("").count(), 0);
        assert_eq!(lines("\n").collect::<Vec<_>>(), [""]);
        assert_eq!(first_line(""), None);
    }
}
