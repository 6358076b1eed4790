//! HTML escaping.
//!
//! Only `<`, `>` and `&` are reserved. Tags and character references already
//! present in the text can be kept intact with [`escape_preserving_tags`], or
//! the tag structure alone can be trusted with [`escape_content_only`].

use std::sync::LazyLock;

use regex::Regex;

use super::scan;
use super::span::Finder;

/// Start of a tag body after `<`: optional `/`, then a letter. Anything may
/// follow up to the closing `>`, line breaks included.
static TAG_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/?[A-Za-z]").unwrap());

/// A character reference after `&`, up to and including its `;`.
static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]+|#[0-9]+|#x[0-9A-Fa-f]+);").unwrap());

fn reference(b: u8) -> Option<&'static str> {
    match b {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        _ => None,
    }
}

/// Replace every `&`, `<` and `>` with its character reference.
///
/// The three are replaced in a single pass, so the `&` of an inserted
/// reference is never escaped again.
///
/// ```
/// use parse_mode_escape::escape::html;
///
/// assert_eq!(html::escape("5 > 3 & 2 < 4"), "5 &gt; 3 &amp; 2 &lt; 4");
/// ```
pub fn escape(text: &str) -> String {
    scan(text, |_, _| None, reference)
}

/// Escape reserved characters that are not part of a tag or character reference.
///
/// ```
/// use parse_mode_escape::escape::html;
///
/// assert_eq!(html::escape_preserving_tags("<b>a < b</b> &amp;"), "<b>a &lt; b</b> &amp;");
/// ```
pub fn escape_preserving_tags(text: &str) -> String {
    scan(text, span_end, reference)
}

/// Escape the text between tags, copying the tags themselves unchanged.
///
/// Unlike [`escape_preserving_tags`], existing character references in the
/// text are escaped too.
///
/// ```
/// use parse_mode_escape::escape::html;
///
/// assert_eq!(html::escape_content_only("<i>&amp;</i>"), "<i>&amp;amp;</i>");
/// ```
pub fn escape_content_only(text: &str) -> String {
    let mut finder = Finder::new(text);
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    // End of the last tag copied.
    let mut last = 0;
    let mut i = 0;

    while i < text.len() {
        match tag_end(&mut finder, i) {
            Some(end) => {
                out.push_str(&escape(&text[last..i]));
                out.push_str(&text[i..end]);
                last = end;
                i = end;
            }
            None => i += 1,
        }
    }

    out.push_str(&escape(&text[last..]));
    out
}

fn span_end(f: &mut Finder<'_>, start: usize) -> Option<usize> {
    match *f.bytes().get(start)? {
        b'<' => tag_end(f, start),
        b'&' => reference_end(f, start),
        _ => None,
    }
}

/// `<` … `>` whose body looks like an opening or closing tag.
pub(crate) fn tag_end(f: &mut Finder<'_>, start: usize) -> Option<usize> {
    if f.bytes().get(start) != Some(&b'<') || !TAG_START.is_match(&f.text()[start + 1..]) {
        return None;
    }
    f.find(start + 1, ">").map(|close| close + 1)
}

/// `&name;`, `&#digits;` or `&#xhex;`.
///
/// The body holds no `;`, so a match always ends at the first `;` after the `&`.
pub(crate) fn reference_end(f: &Finder<'_>, start: usize) -> Option<usize> {
    if f.bytes().get(start) != Some(&b'&') {
        return None;
    }
    REFERENCE
        .find(&f.text()[start + 1..])
        .map(|m| start + 1 + m.end())
}
