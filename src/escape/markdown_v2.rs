//! MarkdownV2 escaping.
//!
//! Eighteen characters are reserved:
//! `` _ * [ ] ( ) ~ ` > # + - = | { } . ! ``.
//! On top of the legacy spans, underline (`__…__`), strikethrough (`~…~`),
//! spoiler (`||…||`) and block-quote prefixes are recognized.

use super::span::{self, Finder};
use super::{backslash_all, backslash_special, scan};
use crate::parse_mode::ParseMode;

const MODE: ParseMode = ParseMode::MarkdownV2;

/// Escape every reserved character and every backslash regardless of context.
///
/// ```
/// use parse_mode_escape::escape::markdown_v2;
///
/// assert_eq!(markdown_v2::escape("v1.0 (beta)!"), r"v1\.0 \(beta\)\!");
/// ```
pub fn escape(text: &str) -> String {
    backslash_all(text, MODE)
}

/// Escape reserved characters that are not part of recognized markup.
///
/// ```
/// use parse_mode_escape::escape::markdown_v2;
///
/// assert_eq!(markdown_v2::escape_preserving_entities("Hello_world!"), r"Hello\_world\!");
/// assert_eq!(markdown_v2::escape_preserving_entities("||secret||"), "||secret||");
/// ```
pub fn escape_preserving_entities(text: &str) -> String {
    scan(text, span_end, backslash_special(MODE))
}

fn span_end(f: &mut Finder<'_>, start: usize) -> Option<usize> {
    match *f.bytes().get(start)? {
        b'\\' => span::escaped(f, start, |b| MODE.is_special_byte(b)),
        b'*' => span::delimited(f, start, "*"),
        b'_' if f.text()[start..].starts_with("__") => span::double_delimited(f, start, "__"),
        b'_' => span::delimited(f, start, "_"),
        b'~' => span::delimited(f, start, "~"),
        b'|' => span::double_delimited(f, start, "||"),
        b'`' => span::double_delimited(f, start, "```").or_else(|| span::delimited(f, start, "`")),
        b'[' => span::link(f, start),
        b'>' => span::quote_prefix(f, start),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::scan_with;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_simple_all_specials() {
        let input = r"_*[]()~`>#+-=|{}.!\";
        let expected = r"\_\*\[\]\(\)\~\`\>\#\+\-\=\|\{\}\.\!\\";
        assert_eq!(escape(input), expected);
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(escape_preserving_entities("Hello_world!"), r"Hello\_world\!");
    }

    #[test]
    fn test_italic_and_bold_preserved() {
        assert_eq!(
            escape_preserving_entities("_italic_ and *bold*"),
            "_italic_ and *bold*"
        );
    }

    #[test]
    fn test_spans_preserved() {
        for input in [
            "*bold*",
            "_italic_",
            "__underline__",
            "~strike~",
            "||spoiler||",
            "`code`",
            "```rust\nlet x = 1;\n```",
            "[a](b)",
            ">quote",
            ">>nested",
        ] {
            assert_eq!(escape_preserving_entities(input), input);
        }
    }

    #[test]
    fn test_span_bodies_are_verbatim() {
        assert_eq!(escape_preserving_entities("*a.b!*"), "*a.b!*");
        assert_eq!(
            escape_preserving_entities("[site](https://example.com/a-b)"),
            "[site](https://example.com/a-b)"
        );
    }

    #[test]
    fn test_double_underscore_never_italic() {
        // "__" opens an underline; without a closing "__" both underscores are literal,
        // after which the second one may still open an italic span.
        assert_eq!(escape_preserving_entities("__x"), r"\_\_x");
        assert_eq!(escape_preserving_entities("__x_"), r"\__x_");
    }

    #[test]
    fn test_single_pipe_is_literal() {
        assert_eq!(escape_preserving_entities("a | b |"), r"a \| b \|");
    }

    #[test]
    fn test_trailing_quote_marker_is_literal() {
        assert_eq!(escape_preserving_entities("a>"), r"a\>");
    }

    #[test]
    fn test_sentence_punctuation() {
        assert_eq!(
            escape_preserving_entities("Price: 5.99 (incl. tax) - #1 deal!"),
            r"Price: 5\.99 \(incl\. tax\) \- \#1 deal\!"
        );
    }

    #[test]
    fn test_lone_backslash_untouched() {
        assert_eq!(escape_preserving_entities(r"C:\temp"), r"C:\temp");
    }

    #[test]
    fn test_preserving_is_noop_on_simple_output() {
        for input in ["Hello_world!", "a*b [c](d) ~e~", r"back\slash."] {
            let escaped = escape(input);
            assert_eq!(escape_preserving_entities(&escaped), escaped, "input: {input:?}");
        }
    }

    #[test]
    fn test_unclosed_openers_scan_linearly() {
        for opener in ["[", "||", "|", "__", "_", "*", "~", "`", "```", "[x](", "[x]"] {
            let text = opener.repeat(5_000);
            let mut finder = Finder::new(&text);
            let escaped = scan_with(&mut finder, span_end, backslash_special(MODE));
            assert!(
                finder.scanned() <= 8 * text.len(),
                "opener {opener:?}: scanned {} bytes of {}",
                finder.scanned(),
                text.len()
            );
            assert_eq!(escape_preserving_entities(&text), escaped);
        }
    }

    #[test]
    fn test_idempotent() {
        for input in ["Hello_world!", "_italic_ and *bold*", "1 + 1 = 2.", "||a|| | b", "{x}"] {
            let once = escape_preserving_entities(input);
            assert_eq!(escape_preserving_entities(&once), once, "input: {input:?}");
        }
    }
}
