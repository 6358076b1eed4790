// Parse modes understood by the Bot API and their reserved characters.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseModeError;

/// Characters with syntactic meaning in legacy Markdown.
pub(crate) const MARKDOWN_SPECIALS: &[char] = &['_', '*', '`', '['];

/// Characters with syntactic meaning in MarkdownV2, in escaping order.
pub(crate) const MARKDOWN_V2_SPECIALS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Characters that must be written as character references in HTML.
pub(crate) const HTML_SPECIALS: &[char] = &['<', '>', '&'];

/// Text markup dialect selected by the `parse_mode` request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Legacy Markdown. Kept for backward compatibility.
    Markdown,
    /// Markdown V2, with underline, strikethrough, spoiler and block quotes.
    MarkdownV2,
    /// The HTML tag subset.
    Html,
}

impl ParseMode {
    /// All parse modes, in declaration order.
    pub const ALL: [ParseMode; 3] = [ParseMode::Markdown, ParseMode::MarkdownV2, ParseMode::Html];

    /// The value sent in the `parse_mode` field.
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMode::Markdown => "Markdown",
            ParseMode::MarkdownV2 => "MarkdownV2",
            ParseMode::Html => "HTML",
        }
    }

    /// Characters that must never appear unescaped outside recognized markup.
    pub fn special_chars(self) -> &'static [char] {
        match self {
            ParseMode::Markdown => MARKDOWN_SPECIALS,
            ParseMode::MarkdownV2 => MARKDOWN_V2_SPECIALS,
            ParseMode::Html => HTML_SPECIALS,
        }
    }

    /// Whether `c` is reserved in this mode.
    pub fn is_special(self, c: char) -> bool {
        self.special_chars().contains(&c)
    }

    /// Byte-level variant of [`ParseMode::is_special`]. Every special is ASCII.
    pub(crate) fn is_special_byte(self, b: u8) -> bool {
        b.is_ascii() && self.is_special(char::from(b))
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParseMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseModeError::Unknown(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParseMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ParseMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
