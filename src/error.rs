/// Errors that can occur when resolving a parse mode from its wire name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseModeError {
    #[error("unknown parse mode \"{0}\", expected one of \"Markdown\", \"MarkdownV2\", \"HTML\"")]
    Unknown(String),
}
