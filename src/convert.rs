//! Recursive conversion of Telegram-flavoured Markdown to Bot API HTML.
//!
//! The converter drives the tokenizer once per nesting depth: each token's
//! content is converted again at `depth + 1` so that styles nest (bold
//! containing italic and so on). Code tokens are terminal and have their
//! content escaped verbatim instead of re-tokenized. Literal text between
//! tokens is escaped with the Telegram-minimal policy; code content and link
//! attributes use the full five-entity policy.

use crate::{
    escape::{escape_html, escape_telegram_html},
    fences::close_unterminated_fences,
    quotes,
    token::{Token, TokenKind},
    tokenize::tokenize,
};

/// Deepest markup nesting converted; content nested further is passed
/// through unchanged. No legitimate Telegram message nests this deep.
pub const MAX_NESTING_DEPTH: usize = 10;

/// Caller-supplied renderer turning a link's URL and display text into HTML.
pub type LinkRenderer = dyn Fn(&str, &str) -> String + Send + Sync;

/// Caller-supplied renderer turning code-block content and an optional
/// language tag into HTML.
pub type CodeBlockRenderer = dyn Fn(&str, Option<&str>) -> String + Send + Sync;

/// Configuration for a [`Converter`].
///
/// The renderer fields double as the record of whether a custom renderer was
/// supplied: the built-in wrapping runs only on the `None` paths. A custom
/// renderer's return value is used verbatim. The code-block renderer
/// receives the code escaped per `escape_html` (raw when escaping is off);
/// the link renderer receives the raw URL and the converted display text.
pub struct ConvertOptions {
    /// Escape HTML special characters in the output. Defaults to `true`.
    pub escape_html: bool,
    /// Append a closing fence when the input ends inside a code block.
    /// Defaults to `true`.
    pub auto_close_code_blocks: bool,
    /// Replacement for the built-in `<a href>` link rendering.
    pub link_renderer: Option<Box<LinkRenderer>>,
    /// Replacement for the built-in `<pre><code>` code-block rendering.
    pub code_block_renderer: Option<Box<CodeBlockRenderer>>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            escape_html: true,
            auto_close_code_blocks: true,
            link_renderer: None,
            code_block_renderer: None,
        }
    }
}

/// Reusable converter holding resolved options.
///
/// A `Converter` keeps no per-call state, so one instance may serve any
/// number of callers concurrently.
///
/// # Examples
///
/// ```
/// use tg_md2html::Converter;
///
/// let converter = Converter::new();
/// assert_eq!(converter.convert("**hi**"), "<b>hi</b>");
/// assert_eq!(converter.convert("_there_"), "<i>there</i>");
/// ```
#[derive(Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given options.
    #[must_use]
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert Markdown to Telegram-compatible HTML.
    ///
    /// Whitespace-only input is returned verbatim; anything else is trimmed.
    #[must_use]
    pub fn convert(&self, text: &str) -> String {
        let processed = if self.options.auto_close_code_blocks {
            close_unterminated_fences(text)
        } else {
            text.to_string()
        };
        let marked = quotes::mark_quote_lines(&processed);
        let converted = self.convert_recursive(&marked, 0);
        let expanded = quotes::expand_markers(&converted, |kind, content| {
            let inner = self.convert_recursive(content, 0);
            self.wrap_token(kind, &inner, None)
        });
        if expanded.trim().is_empty() {
            return text.to_string();
        }
        expanded.trim().to_string()
    }

    /// Convert one nesting level, recursing into token content.
    fn convert_recursive(&self, text: &str, depth: usize) -> String {
        if depth > MAX_NESTING_DEPTH {
            return text.to_string();
        }
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return self.escape_plain(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for token in &tokens {
            if token.start > last {
                out.push_str(&self.escape_plain(&text[last..token.start]));
            }
            out.push_str(&self.render(token, depth));
            last = token.end;
        }
        if last < text.len() {
            out.push_str(&self.escape_plain(&text[last..]));
        }
        out
    }

    /// Render one token, recursing into non-code content.
    fn render(&self, token: &Token, depth: usize) -> String {
        let auxiliary = token.auxiliary.as_deref();
        match token.kind {
            TokenKind::InlineCode => format!("<code>{}</code>", self.escape_full(&token.content)),
            TokenKind::CodeBlock => {
                // Escaped before delegation, so a custom renderer sees the
                // code the way the default path would emit it. The default
                // path escapes once more, which the entity guard makes a
                // no-op.
                let code = self.escape_full(&token.content);
                self.wrap_token(token.kind, &code, auxiliary)
            }
            _ => {
                let inner = self.convert_recursive(&token.content, depth + 1);
                self.wrap_token(token.kind, &inner, auxiliary)
            }
        }
    }

    /// Wrap already-processed content in the HTML for its kind.
    fn wrap_token(&self, kind: TokenKind, content: &str, auxiliary: Option<&str>) -> String {
        match kind {
            TokenKind::Bold => format!("<b>{content}</b>"),
            TokenKind::Italic => format!("<i>{content}</i>"),
            TokenKind::Underline => format!("<u>{content}</u>"),
            TokenKind::Strikethrough => format!("<s>{content}</s>"),
            TokenKind::Spoiler => format!("<span class=\"tg-spoiler\">{content}</span>"),
            TokenKind::InlineCode => format!("<code>{content}</code>"),
            TokenKind::CodeBlock => match &self.options.code_block_renderer {
                Some(renderer) => renderer(content, auxiliary),
                None => self.default_code_block(content, auxiliary),
            },
            TokenKind::Link => {
                let url = auxiliary.unwrap_or("");
                match &self.options.link_renderer {
                    Some(renderer) => renderer(url, content),
                    None => self.default_link(url, content),
                }
            }
            TokenKind::Quote => format!("\n<blockquote>{}</blockquote>\n", content.trim()),
            TokenKind::ExpandableQuote => {
                format!("\n<blockquote expandable>{}</blockquote>\n", content.trim())
            }
        }
    }

    fn default_link(&self, url: &str, text: &str) -> String {
        let url = self.escape_full(url);
        let text = self.escape_full(text);
        format!("<a href=\"{url}\">{text}</a>")
    }

    fn default_code_block(&self, code: &str, language: Option<&str>) -> String {
        let code = self.escape_full(code);
        match language {
            Some(lang) => format!("\n<pre><code class=\"language-{lang}\">{code}</code></pre>\n"),
            None => format!("\n<pre><code>{code}</code></pre>\n"),
        }
    }

    /// Telegram-minimal escaping for literal text between tokens.
    fn escape_plain(&self, text: &str) -> String {
        if self.options.escape_html {
            escape_telegram_html(text)
        } else {
            text.to_string()
        }
    }

    /// Full five-entity escaping for code content and link attributes.
    /// Existing entities are left alone, so content that already went
    /// through a conversion pass is not escaped twice.
    fn escape_full(&self, text: &str) -> String {
        if self.options.escape_html {
            escape_html(text)
        } else {
            text.to_string()
        }
    }
}

/// One-shot conversion with default options.
///
/// # Examples
///
/// ```
/// use tg_md2html::markdown_to_html;
///
/// assert_eq!(
///     markdown_to_html("**Bold with *italic* inside**"),
///     "<b>Bold with <i>italic</i> inside</b>"
/// );
/// ```
#[must_use]
pub fn markdown_to_html(text: &str) -> String {
    Converter::new().convert(text)
}

/// One-shot conversion with the given options.
///
/// Reuse a [`Converter`] instead when converting many messages with the same
/// configuration.
#[must_use]
pub fn markdown_to_html_with(text: &str, options: ConvertOptions) -> String {
    Converter::with_options(options).convert(text)
}
