//! Line-anchored blockquote handling.
//!
//! Blockquote markers are anchored to line starts while every other
//! construct is span-anchored, so quotes take a two-phase path around the
//! tokenizer: a prepass rewrites quote lines into sentinel-marked lines that
//! survive tokenization as opaque literal text, and a postpass expands each
//! sentinel into a `<blockquote>` element around its converted content.
//!
//! The sentinels travel inside the text stream itself, so user text that
//! happens to contain the literal marker strings is expanded as a quote.
//! The markers are chosen to be unlikely in chat messages.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::token::TokenKind;

/// Sentinel prefix marking a regular blockquote line.
pub const QUOTE_MARKER: &str = "[QUOTE]";

/// Sentinel prefix marking an expandable blockquote line.
pub const EXPANDABLE_QUOTE_MARKER: &str = "[EXPANDABLE_QUOTE]";

static EXPANDABLE_QUOTE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[EXPANDABLE_QUOTE\]([^\n]*)").unwrap());

static QUOTE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[QUOTE\]([^\n]*)").unwrap());

/// Rewrite quote-prefixed lines into sentinel-marked lines.
///
/// A line whose trimmed form starts with `**>` becomes an expandable-quote
/// line; one starting with a plain `>` becomes a regular quote line. All
/// other lines pass through unchanged.
///
/// # Examples
///
/// ```
/// use tg_md2html::mark_quote_lines;
/// assert_eq!(mark_quote_lines("> quoted"), "[QUOTE]quoted");
/// assert_eq!(mark_quote_lines("**> folded"), "[EXPANDABLE_QUOTE]folded");
/// assert_eq!(mark_quote_lines("plain"), "plain");
/// ```
#[must_use]
pub fn mark_quote_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if let Some(rest) = trimmed.strip_prefix("**>") {
                format!("{EXPANDABLE_QUOTE_MARKER}{}", rest.trim())
            } else if let Some(rest) = trimmed.strip_prefix('>') {
                format!("{QUOTE_MARKER}{}", rest.trim())
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Expand sentinel markers back into rendered blockquotes.
///
/// Each marker consumes the rest of its line; `render` receives the quote
/// kind and the captured content and returns the full replacement HTML.
/// Expandable markers are expanded first so both passes see intact markers.
pub(crate) fn expand_markers<F>(text: &str, mut render: F) -> String
where
    F: FnMut(TokenKind, &str) -> String,
{
    let pass = EXPANDABLE_QUOTE_RUN_RE.replace_all(text, |cap: &Captures<'_>| {
        render(TokenKind::ExpandableQuote, &cap[1])
    });
    QUOTE_RUN_RE
        .replace_all(&pass, |cap: &Captures<'_>| render(TokenKind::Quote, &cap[1]))
        .into_owned()
}
