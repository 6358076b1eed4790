// Parse-mode escaping strategies.
//
// Every entity-preserving strategy makes one left-to-right pass over the text.
// At each offset it either recognizes a span of deliberate markup, which is
// copied verbatim and skipped as a whole, or classifies a single byte as a
// literal, escaping it when it is reserved. Nothing is revisited.
//
// Offsets are UTF-8 byte offsets. All delimiters are ASCII, so span boundaries
// always fall on character boundaries.

pub mod html;
pub mod markdown;
pub mod markdown_v2;
pub(crate) mod span;

use crate::parse_mode::ParseMode;
use span::Finder;

/// Single pass shared by the scanners.
///
/// `span_end` returns the exclusive end of a verbatim span opening at the given
/// offset. `replacement` returns the escaped form of a reserved byte.
pub(crate) fn scan(
    text: &str,
    span_end: impl FnMut(&mut Finder<'_>, usize) -> Option<usize>,
    replacement: impl Fn(u8) -> Option<&'static str>,
) -> String {
    scan_with(&mut Finder::new(text), span_end, replacement)
}

/// [`scan`] over a caller-owned [`Finder`].
pub(crate) fn scan_with(
    finder: &mut Finder<'_>,
    mut span_end: impl FnMut(&mut Finder<'_>, usize) -> Option<usize>,
    replacement: impl Fn(u8) -> Option<&'static str>,
) -> String {
    let text = finder.text();
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    // Start of the pending run of unmodified text.
    let mut run = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(end) = span_end(finder, i) {
            i = end;
            continue;
        }
        if let Some(escaped) = replacement(bytes[i]) {
            out.push_str(&text[run..i]);
            out.push_str(escaped);
            run = i + 1;
        }
        i += 1;
    }

    out.push_str(&text[run..]);
    out
}

/// Backslash-prefixed form of a byte reserved by one of the Markdown dialects.
pub(crate) fn backslashed(b: u8) -> Option<&'static str> {
    let escaped = match b {
        b'\\' => "\\\\",
        b'_' => "\\_",
        b'*' => "\\*",
        b'[' => "\\[",
        b']' => "\\]",
        b'(' => "\\(",
        b')' => "\\)",
        b'~' => "\\~",
        b'`' => "\\`",
        b'>' => "\\>",
        b'#' => "\\#",
        b'+' => "\\+",
        b'-' => "\\-",
        b'=' => "\\=",
        b'|' => "\\|",
        b'{' => "\\{",
        b'}' => "\\}",
        b'.' => "\\.",
        b'!' => "\\!",
        _ => return None,
    };
    Some(escaped)
}

/// Simple Markdown escaping: backslash every reserved byte and every backslash.
///
/// A single pass gives the same result as doubling backslashes first and then
/// prefixing each special, without ever compounding inserted escapes.
pub(crate) fn backslash_all(text: &str, mode: ParseMode) -> String {
    scan(
        text,
        |_, _| None,
        |b| {
            if b == b'\\' || mode.is_special_byte(b) {
                backslashed(b)
            } else {
                None
            }
        },
    )
}

/// Entity-preserving replacement for the Markdown dialects.
pub(crate) fn backslash_special(mode: ParseMode) -> impl Fn(u8) -> Option<&'static str> {
    move |b| if mode.is_special_byte(b) { backslashed(b) } else { None }
}
