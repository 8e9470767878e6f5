//! Convert Telegram-flavoured Markdown into Telegram Bot API HTML.
//!
//! The Bot API accepts only a narrow HTML subset (`<b>`, `<i>`, `<u>`,
//! `<s>`, `<span class="tg-spoiler">`, `<code>`, `<pre>`, `<a>` and
//! `<blockquote>`), so bot messages written in Markdown need a dedicated
//! formatting layer. This crate scans the input for markup spans, resolves
//! the grammar's ambiguities through a fixed precedence order, and recurses
//! into matched spans so styles nest.
//!
//! # Examples
//!
//! ```
//! use tg_md2html::{ConvertOptions, Converter, markdown_to_html};
//!
//! assert_eq!(markdown_to_html("**bold** and `code`"), "<b>bold</b> and <code>code</code>");
//!
//! // A reusable instance for repeated calls with one configuration.
//! let converter = Converter::with_options(ConvertOptions {
//!     escape_html: false,
//!     ..ConvertOptions::default()
//! });
//! assert_eq!(converter.convert("a < b"), "a < b");
//! ```

pub mod convert;
pub mod escape;
pub mod fences;
pub mod quotes;
pub mod token;
pub mod tokenize;

pub use convert::{
    CodeBlockRenderer, ConvertOptions, Converter, LinkRenderer, MAX_NESTING_DEPTH,
    markdown_to_html, markdown_to_html_with,
};
pub use escape::{escape_html, escape_telegram_html};
pub use fences::close_unterminated_fences;
pub use quotes::mark_quote_lines;
pub use token::{Token, TokenKind};
pub use tokenize::tokenize;
