// parse-mode-escape — parse-mode aware escaping for bot message text.
//
// Architecture:
//   text + ParseMode → dispatcher → per-mode scanner → escaped text
//
// Scanners:
//   - escape::markdown     legacy Markdown (4 reserved characters)
//   - escape::markdown_v2  MarkdownV2 (18 reserved characters)
//   - escape::html         HTML subset (`<`, `>`, `&`)
//
// Every scanner is a pure function over its input. No I/O, no shared state.

mod error;
pub mod escape;
mod parse_mode;

use std::borrow::Cow;

pub use error::ParseModeError;
pub use parse_mode::ParseMode;

/// How reserved characters are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Keep recognized markup and already-escaped characters; escape the rest (default).
    #[default]
    PreserveEntities,
    /// Escape every reserved character regardless of context.
    Simple,
}

/// Escaping options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// How reserved characters are treated.
    pub strategy: Strategy,
}

impl Options {
    /// Create a new Options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the escaping strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Escape `text` for `mode`, keeping markup the caller embedded on purpose.
///
/// Re-escaping the output returns it unchanged.
///
/// # Examples
///
/// ```
/// use parse_mode_escape::{escape, ParseMode};
///
/// assert_eq!(escape("Hello_world!", ParseMode::MarkdownV2), r"Hello\_world\!");
/// assert_eq!(escape("<b>a < b</b>", ParseMode::Html), "<b>a &lt; b</b>");
/// ```
pub fn escape(text: &str, mode: ParseMode) -> String {
    escape_with(text, mode, &Options::default())
}

/// Escape `text` for `mode` with custom options.
///
/// # Examples
///
/// ```
/// use parse_mode_escape::{escape_with, Options, ParseMode, Strategy};
///
/// let options = Options::new().with_strategy(Strategy::Simple);
/// assert_eq!(escape_with("*hi*", ParseMode::Markdown, &options), r"\*hi\*");
/// ```
pub fn escape_with(text: &str, mode: ParseMode, options: &Options) -> String {
    let escaped = if options.strategy == Strategy::PreserveEntities && !needs_escaping(text, mode) {
        text.to_string()
    } else {
        match (options.strategy, mode) {
            (Strategy::PreserveEntities, ParseMode::Markdown) => {
                escape::markdown::escape_preserving_entities(text)
            }
            (Strategy::PreserveEntities, ParseMode::MarkdownV2) => {
                escape::markdown_v2::escape_preserving_entities(text)
            }
            (Strategy::PreserveEntities, ParseMode::Html) => {
                escape::html::escape_preserving_tags(text)
            }
            (Strategy::Simple, ParseMode::Markdown) => escape::markdown::escape(text),
            (Strategy::Simple, ParseMode::MarkdownV2) => escape::markdown_v2::escape(text),
            (Strategy::Simple, ParseMode::Html) => escape::html::escape(text),
        }
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        mode = %mode,
        strategy = ?options.strategy,
        input_len = text.len(),
        output_len = escaped.len(),
        "escaped text"
    );

    escaped
}

/// Whether `text` contains any character reserved by `mode`.
///
/// When this returns `false`, [`escape`] returns the text unchanged.
pub fn needs_escaping(text: &str, mode: ParseMode) -> bool {
    text.bytes().any(|b| mode.is_special_byte(b))
}

/// [`escape`] for optional inputs.
///
/// Absent text stays absent; text without a parse mode is returned as is.
///
/// # Examples
///
/// ```
/// use parse_mode_escape::{escape_opt, ParseMode};
///
/// assert_eq!(escape_opt(None, Some(ParseMode::Html)), None);
/// assert_eq!(escape_opt(Some("a_b"), None).as_deref(), Some("a_b"));
/// assert_eq!(escape_opt(Some("a_b"), Some(ParseMode::Markdown)).as_deref(), Some(r"a\_b"));
/// ```
pub fn escape_opt(text: Option<&str>, mode: Option<ParseMode>) -> Option<Cow<'_, str>> {
    let text = text?;
    Some(match mode {
        Some(mode) => Cow::Owned(escape(text, mode)),
        None => Cow::Borrowed(text),
    })
}

/// [`needs_escaping`] for optional inputs. `false` when either is absent.
pub fn needs_escaping_opt(text: Option<&str>, mode: Option<ParseMode>) -> bool {
    match (text, mode) {
        (Some(text), Some(mode)) => needs_escaping(text, mode),
        _ => false,
    }
}
