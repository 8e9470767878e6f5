//! Scanner turning Telegram-flavoured Markdown into markup-span tokens.
//!
//! The grammar is ambiguous (`**` is both a bold delimiter and two italic
//! delimiters), so disambiguation happens through an explicit matcher table
//! tried in a fixed precedence order at every scan position rather than
//! through one large alternation. Code regions are pre-scanned so that no
//! other matcher fires inside a fenced block or an already-open inline code
//! span.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    fences::FENCE,
    quotes::{EXPANDABLE_QUOTE_MARKER, QUOTE_MARKER},
    token::{Token, TokenKind},
};

static CODE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^```(\w+)?\n(.*?)```").unwrap());

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^`([^`\n]+)`").unwrap());

static SPOILER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|\|([^|\n]+?)\|\|").unwrap());

static STRIKETHROUGH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^~~([^~\n]+?)~~").unwrap());

// Bold bodies stop at the nearest closing `**` but may contain single
// asterisks, so `**a *b* c**` nests rather than breaking the outer span.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*([^\n]+?)\*\*").unwrap());

static UNDERLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^__([^_\n]+?)__").unwrap());

static ITALIC_ASTERISK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*([^*\n]+?)\*").unwrap());

static ITALIC_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^_([^_\n]+?)_").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+?)\]\(([^)]+?)\)").unwrap());

// Whole-buffer scans backing the code-region exclusion rules.
static CODE_REGION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

static INLINE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`\n]*`").unwrap());

/// Scan `text` and return its markup spans as non-overlapping tokens sorted
/// ascending by start position.
///
/// Text between tokens is plain literal content; the scanner leaves it alone
/// and the converter escapes it. Blockquote sentinel markers injected by the
/// line prepass are skipped so they survive as literal text.
///
/// # Examples
///
/// ```
/// use tg_md2html::{TokenKind, tokenize};
///
/// let tokens = tokenize("**bold** and `code`");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Bold);
/// assert_eq!(tokens[0].content, "bold");
/// assert_eq!(tokens[1].kind, TokenKind::InlineCode);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    Scanner::new(text).run()
}

/// Single-use scan state: the buffer plus the pre-computed code regions.
struct Scanner<'a> {
    text: &'a str,
    code_regions: Vec<(usize, usize)>,
    inline_spans: Vec<(usize, usize)>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        let spans = |re: &Regex| re.find_iter(text).map(|m| (m.start(), m.end())).collect();
        Self {
            text,
            code_regions: spans(&CODE_REGION_RE),
            inline_spans: spans(&INLINE_SPAN_RE),
        }
    }

    fn run(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < self.text.len() {
            if self.inside_code_block(pos) {
                pos = self.next_char_boundary(pos);
                continue;
            }
            if let Some(token) = self.match_token(pos) {
                pos = token.end;
                tokens.push(token);
            } else {
                pos = self.next_char_boundary(pos);
            }
        }
        tokens.sort_unstable_by_key(|t| t.start);
        tokens
    }

    /// Try every matcher at `start`, in precedence order.
    fn match_token(&self, start: usize) -> Option<Token> {
        let rest = &self.text[start..];
        if rest.starts_with(QUOTE_MARKER) || rest.starts_with(EXPANDABLE_QUOTE_MARKER) {
            return None;
        }
        // Matchers in precedence order; the first to accept the position wins.
        let matchers: &[fn(&Self, usize, &str) -> Option<Token>] = &[
            Self::match_code_block,
            Self::match_inline_code,
            Self::match_spoiler,
            Self::match_strikethrough,
            Self::match_bold,
            Self::match_underline,
            Self::match_italic_asterisk,
            Self::match_italic_underscore,
            Self::match_link,
        ];
        matchers.iter().find_map(|m| m(self, start, rest))
    }

    fn match_code_block(_scanner: &Self, start: usize, rest: &str) -> Option<Token> {
        let cap = CODE_BLOCK_RE.captures(rest)?;
        let whole = cap.get(0)?;
        let content = cap.get(2).map_or("", |m| m.as_str());
        let end = start + whole.end();
        Some(match cap.get(1) {
            Some(lang) => {
                Token::with_auxiliary(TokenKind::CodeBlock, content, start, end, lang.as_str())
            }
            None => Token::new(TokenKind::CodeBlock, content, start, end),
        })
    }

    fn match_inline_code(scanner: &Self, start: usize, rest: &str) -> Option<Token> {
        // A backtick inside an open inline span must not start a new one.
        if scanner.inside_inline_span(start) {
            return None;
        }
        Self::match_delimited(&INLINE_CODE_RE, TokenKind::InlineCode, start, rest)
    }

    fn match_spoiler(_scanner: &Self, start: usize, rest: &str) -> Option<Token> {
        Self::match_delimited(&SPOILER_RE, TokenKind::Spoiler, start, rest)
    }

    fn match_strikethrough(_scanner: &Self, start: usize, rest: &str) -> Option<Token> {
        Self::match_delimited(&STRIKETHROUGH_RE, TokenKind::Strikethrough, start, rest)
    }

    fn match_bold(_scanner: &Self, start: usize, rest: &str) -> Option<Token> {
        Self::match_delimited(&BOLD_RE, TokenKind::Bold, start, rest)
    }

    fn match_underline(_scanner: &Self, start: usize, rest: &str) -> Option<Token> {
        Self::match_delimited(&UNDERLINE_RE, TokenKind::Underline, start, rest)
    }

    fn match_italic_asterisk(scanner: &Self, start: usize, rest: &str) -> Option<Token> {
        scanner.match_italic(&ITALIC_ASTERISK_RE, '*', start, rest)
    }

    fn match_italic_underscore(scanner: &Self, start: usize, rest: &str) -> Option<Token> {
        scanner.match_italic(&ITALIC_UNDERSCORE_RE, '_', start, rest)
    }

    fn match_link(_scanner: &Self, start: usize, rest: &str) -> Option<Token> {
        let cap = LINK_RE.captures(rest)?;
        let whole = cap.get(0)?;
        Some(Token::with_auxiliary(
            TokenKind::Link,
            &cap[1],
            start,
            start + whole.end(),
            &cap[2],
        ))
    }

    /// Shared matcher for the symmetric two-sided delimiters.
    fn match_delimited(re: &Regex, kind: TokenKind, start: usize, rest: &str) -> Option<Token> {
        let cap = re.captures(rest)?;
        let whole = cap.get(0)?;
        Some(Token::new(kind, &cap[1], start, start + whole.end()))
    }

    /// Single-delimiter italic, rejected when it would sit inside the
    /// corresponding double-delimiter form or carry only whitespace.
    fn match_italic(&self, re: &Regex, delim: char, start: usize, rest: &str) -> Option<Token> {
        let cap = re.captures(rest)?;
        let whole = cap.get(0)?;
        if cap[1].trim().is_empty() {
            return None;
        }
        let end = start + whole.end();
        let before = self.text[..start].chars().next_back();
        let after = self.text[end..].chars().next();
        if before == Some(delim) && after == Some(delim) {
            return None;
        }
        Some(Token::new(TokenKind::Italic, &cap[1], start, end))
    }

    /// Whether `pos` lies strictly inside a fenced code region. The closing
    /// fence itself does not count, so a code-block match can end there.
    fn inside_code_block(&self, pos: usize) -> bool {
        self.code_regions
            .iter()
            .any(|&(start, end)| pos > start && pos < end - FENCE.len())
    }

    /// Whether `pos` lies strictly inside an inline code span, excluding the
    /// span's closing backtick.
    fn inside_inline_span(&self, pos: usize) -> bool {
        self.inline_spans
            .iter()
            .any(|&(start, end)| pos > start && pos < end - 1)
    }

    fn next_char_boundary(&self, pos: usize) -> usize {
        pos + self.text[pos..].chars().next().map_or(1, char::len_utf8)
    }
}
