//! Pre-processing utilities for fenced code block delimiters.
//!
//! `close_unterminated_fences` ensures the input contains an even number of
//! triple-backtick fences by appending a closing fence when a message ends
//! mid code block. Messages cut off by length limits are the usual source of
//! such input.

/// The triple-backtick fence delimiting a code block.
pub const FENCE: &str = "```";

/// Append a closing fence when the input ends inside a code block.
///
/// Counts non-overlapping occurrences of the triple-backtick fence; an odd
/// count means the final block is unterminated, so `\n```` ``` `` is appended.
/// Inputs with balanced fences are returned unchanged.
///
/// # Examples
///
/// ```
/// use tg_md2html::close_unterminated_fences;
/// assert_eq!(
///     close_unterminated_fences("```js\nconsole.log(1)"),
///     "```js\nconsole.log(1)\n```"
/// );
/// assert_eq!(close_unterminated_fences("no fences"), "no fences");
/// ```
#[must_use]
pub fn close_unterminated_fences(text: &str) -> String {
    if text.matches(FENCE).count() % 2 == 1 {
        let mut out = String::with_capacity(text.len() + FENCE.len() + 1);
        out.push_str(text);
        out.push('\n');
        out.push_str(FENCE);
        out
    } else {
        text.to_string()
    }
}
