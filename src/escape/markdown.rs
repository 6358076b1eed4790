//! Legacy Markdown escaping.
//!
//! Reserved characters are `_`, `*`, `` ` `` and `[`. Bold, italic, inline
//! code, pre-formatted blocks and links are left intact by
//! [`escape_preserving_entities`].

use super::span::{self, Finder};
use super::{backslash_all, backslash_special, scan};
use crate::parse_mode::ParseMode;

const MODE: ParseMode = ParseMode::Markdown;

/// Escape every reserved character regardless of context.
///
/// Existing backslashes are doubled, so the output always renders as the
/// literal input.
///
/// ```
/// use parse_mode_escape::escape::markdown;
///
/// assert_eq!(markdown::escape("*not bold*"), r"\*not bold\*");
/// ```
pub fn escape(text: &str) -> String {
    backslash_all(text, MODE)
}

/// Escape reserved characters that are not part of recognized markup.
///
/// ```
/// use parse_mode_escape::escape::markdown;
///
/// assert_eq!(markdown::escape_preserving_entities("*bold* and 2*3"), r"*bold* and 2\*3");
/// ```
pub fn escape_preserving_entities(text: &str) -> String {
    scan(text, span_end, backslash_special(MODE))
}

fn span_end(f: &mut Finder<'_>, start: usize) -> Option<usize> {
    match *f.bytes().get(start)? {
        b'\\' => span::escaped(f, start, |b| MODE.is_special_byte(b)),
        b'*' => span::delimited(f, start, "*"),
        b'_' => span::delimited(f, start, "_"),
        b'`' => span::double_delimited(f, start, "```").or_else(|| span::delimited(f, start, "`")),
        b'[' => span::link(f, start),
        _ => None,
    }
}
