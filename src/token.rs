//! Data model for matched markup spans.

/// The style a matched markup span carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `**text**`
    Bold,
    /// `*text*` or `_text_`
    Italic,
    /// `__text__`
    Underline,
    /// `~~text~~`
    Strikethrough,
    /// `||text||`
    Spoiler,
    /// `` `text` ``
    InlineCode,
    /// Triple-backtick fenced block, optionally with a language tag.
    CodeBlock,
    /// `[text](url)`
    Link,
    /// A line-anchored `>` blockquote.
    Quote,
    /// A line-anchored `**>` expandable blockquote.
    ExpandableQuote,
}

impl TokenKind {
    /// Whether the content of this kind is opaque to further markup.
    #[must_use]
    pub fn is_code(self) -> bool {
        matches!(self, Self::InlineCode | Self::CodeBlock)
    }
}

/// A single markup span matched by the tokenizer.
///
/// `start..end` is the half-open byte range of the full matched literal,
/// delimiters included; `content` is the substring between the delimiters and
/// may itself contain further markup unless [`TokenKind::is_code`] holds.
/// `auxiliary` carries the language tag of a [`TokenKind::CodeBlock`] or the
/// URL of a [`TokenKind::Link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    pub start: usize,
    pub end: usize,
    pub auxiliary: Option<String>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, content: &str, start: usize, end: usize) -> Self {
        Self {
            kind,
            content: content.to_string(),
            start,
            end,
            auxiliary: None,
        }
    }

    pub(crate) fn with_auxiliary(
        kind: TokenKind,
        content: &str,
        start: usize,
        end: usize,
        auxiliary: &str,
    ) -> Self {
        Self {
            auxiliary: Some(auxiliary.to_string()),
            ..Self::new(kind, content, start, end)
        }
    }
}
