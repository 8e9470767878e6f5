//! HTML escaping policies for converted output.
//!
//! Two escapers coexist rather than one flag-switched function because they
//! serve different contexts: [`escape_html`] covers the full five-entity set
//! (`&<>"'`) and is used for code content and link attributes, while
//! [`escape_telegram_html`] covers only the four characters (`&<>"`) the
//! Telegram Bot API requires for element text. Both leave existing entities
//! such as `&amp;` untouched instead of double-escaping the ampersand.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static AMP_OR_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#?\w+;)?").unwrap());

/// Escape `&` characters that do not already begin an entity.
fn escape_ampersands(text: &str) -> String {
    AMP_OR_ENTITY_RE
        .replace_all(text, |cap: &Captures| {
            if cap.get(1).is_some() {
                cap[0].to_string()
            } else {
                "&amp;".to_string()
            }
        })
        .into_owned()
}

/// Escape the five HTML special characters, including the apostrophe.
///
/// # Examples
///
/// ```
/// use tg_md2html::escape_html;
/// assert_eq!(escape_html(r#"a < b & c's "d""#), "a &lt; b &amp; c&#39;s &quot;d&quot;");
/// assert_eq!(escape_html("&amp; stays"), "&amp; stays");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    escape_ampersands(text)
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape the four characters the Telegram Bot API requires in element text.
///
/// Apostrophes pass through unchanged.
///
/// # Examples
///
/// ```
/// use tg_md2html::escape_telegram_html;
/// assert_eq!(escape_telegram_html("it's <b>"), "it's &lt;b&gt;");
/// ```
#[must_use]
pub fn escape_telegram_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    escape_ampersands(text)
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
