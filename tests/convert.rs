//! Integration tests for Markdown-to-HTML conversion.
//!
//! Covers the basic style table, nesting, escaping, code opacity, fence
//! auto-closing, blockquotes and custom renderers.

use rstest::rstest;
use tg_md2html::{ConvertOptions, Converter, markdown_to_html, markdown_to_html_with};

#[rstest]
#[case::bold("**bold**", "<b>bold</b>")]
#[case::italic_asterisk("*italic*", "<i>italic</i>")]
#[case::italic_underscore("_italic_", "<i>italic</i>")]
#[case::underline("__underline__", "<u>underline</u>")]
#[case::strikethrough("~~strikethrough~~", "<s>strikethrough</s>")]
#[case::spoiler("||spoiler||", "<span class=\"tg-spoiler\">spoiler</span>")]
#[case::inline_code("`code`", "<code>code</code>")]
#[case::link(
    "[Google](https://google.com)",
    "<a href=\"https://google.com\">Google</a>"
)]
fn converts_basic_styles(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(markdown_to_html(input), expected);
}

#[rstest]
#[case::nested_underscore("**bold and _italic_**", "<b>bold and <i>italic</i></b>")]
#[case::nested_asterisk(
    "**Bold with *italic* inside**",
    "<b>Bold with <i>italic</i> inside</b>"
)]
#[case::nested_in_spoiler("||**secret**||", "<span class=\"tg-spoiler\"><b>secret</b></span>")]
fn converts_nested_styles(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(markdown_to_html(input), expected);
}

#[test]
fn bold_is_never_double_wrapped_as_italic() {
    assert_eq!(markdown_to_html("**bold**"), "<b>bold</b>");
}

#[test]
fn plain_text_is_just_escaped() {
    assert_eq!(markdown_to_html("no markup here"), "no markup here");
    assert_eq!(markdown_to_html("a < b & c"), "a &lt; b &amp; c");
}

#[test]
fn escapes_html_exactly() {
    assert_eq!(
        markdown_to_html("<script>alert(\"xss\")</script>"),
        "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
    );
}

#[test]
fn inline_code_content_is_opaque() {
    assert_eq!(
        markdown_to_html("`**not bold**`"),
        "<code>**not bold**</code>"
    );
}

#[test]
fn code_block_content_is_opaque_and_escaped() {
    let out = markdown_to_html("```\n**a** <b>\n```");
    assert_eq!(out, "<pre><code>**a** &lt;b&gt;\n</code></pre>");
}

#[test]
fn code_block_carries_language_class() {
    let out = markdown_to_html("```js\nconsole.log(\"hello\");\n```");
    assert!(out.contains("<pre><code class=\"language-js\">"));
    assert!(out.contains("console.log(&quot;hello&quot;);"));
}

#[test]
fn auto_closes_unterminated_code_block() {
    let out = markdown_to_html("```js\nconsole.log(\"open block");
    assert!(out.contains("</code></pre>"));
}

#[test]
fn auto_close_can_be_disabled() {
    let out = markdown_to_html_with(
        "```js\nopen",
        ConvertOptions {
            auto_close_code_blocks: false,
            ..ConvertOptions::default()
        },
    );
    assert!(!out.contains("<pre>"));
    assert!(out.contains("```"));
}

#[test]
fn converts_regular_blockquote() {
    assert_eq!(
        markdown_to_html("> quote text"),
        "<blockquote>quote text</blockquote>"
    );
}

#[test]
fn converts_expandable_blockquote() {
    assert_eq!(
        markdown_to_html("**> expandable quote"),
        "<blockquote expandable>expandable quote</blockquote>"
    );
}

#[test]
fn converts_each_quote_line_separately() {
    let out = markdown_to_html("> first\nbetween\n> second");
    assert!(out.contains("<blockquote>first</blockquote>"));
    assert!(out.contains("between"));
    assert!(out.contains("<blockquote>second</blockquote>"));
}

#[test]
fn quote_content_is_recursively_converted() {
    // With escaping off, markup inside a quote line survives both passes.
    let converter = Converter::with_options(ConvertOptions {
        escape_html: false,
        ..ConvertOptions::default()
    });
    assert_eq!(
        converter.convert("> some *styled* text"),
        "<blockquote>some <i>styled</i> text</blockquote>"
    );
}

#[test]
fn mixed_document_converts_every_line() {
    let out = markdown_to_html("Hello **world**\nplain line\n`code`");
    assert_eq!(out, "Hello <b>world</b>\nplain line\n<code>code</code>");
}

#[test]
fn preserves_whitespace_only_input() {
    assert_eq!(markdown_to_html("   "), "   ");
    assert_eq!(markdown_to_html(""), "");
}

#[test]
fn trims_surrounding_whitespace_of_real_output() {
    assert_eq!(markdown_to_html("\n  **x**\n"), "<b>x</b>");
}

#[test]
fn unmatched_delimiters_stay_literal() {
    assert_eq!(markdown_to_html("2 ** 3 is 8"), "2 ** 3 is 8");
    assert_eq!(markdown_to_html("a ~~ b"), "a ~~ b");
}

#[test]
fn pathological_nesting_terminates() {
    let soup = "**__~~||_x_||~~__**".repeat(40);
    let out = markdown_to_html(&soup);
    assert!(!out.is_empty());
}

#[test]
fn asterisk_soup_terminates() {
    let out = markdown_to_html(&"*".repeat(999));
    assert!(!out.is_empty());
}

#[test]
fn escaping_can_be_disabled() {
    let out = markdown_to_html_with(
        "a < b & **c**",
        ConvertOptions {
            escape_html: false,
            ..ConvertOptions::default()
        },
    );
    assert_eq!(out, "a < b & <b>c</b>");
}

#[test]
fn default_link_renderer_escapes_url() {
    assert_eq!(
        markdown_to_html("[q](https://e.com/?a=1&b=2)"),
        "<a href=\"https://e.com/?a=1&amp;b=2\">q</a>"
    );
}

#[test]
fn custom_link_renderer_gets_url_and_text_verbatim() {
    let converter = Converter::with_options(ConvertOptions {
        link_renderer: Some(Box::new(|url, text| {
            format!("<a href=\"{url}\" target=\"_blank\">{text}</a>")
        })),
        ..ConvertOptions::default()
    });
    assert_eq!(
        converter.convert("[Google](https://google.com)"),
        "<a href=\"https://google.com\" target=\"_blank\">Google</a>"
    );
}

#[test]
fn custom_link_renderer_output_is_not_reescaped() {
    let converter = Converter::with_options(ConvertOptions {
        link_renderer: Some(Box::new(|_, _| "<raw & unescaped>".to_string())),
        ..ConvertOptions::default()
    });
    assert_eq!(converter.convert("[t](u)"), "<raw & unescaped>");
}

#[test]
fn custom_code_block_renderer_gets_escaped_code_and_language() {
    let converter = Converter::with_options(ConvertOptions {
        code_block_renderer: Some(Box::new(|code, language| {
            format!("[{}] {}", language.unwrap_or("none"), code.trim())
        })),
        ..ConvertOptions::default()
    });
    assert_eq!(
        converter.convert("```py\nx = \"1\" & 2\n```"),
        "[py] x = &quot;1&quot; &amp; 2"
    );
    assert_eq!(converter.convert("```\nplain\n```"), "[none] plain");
}

#[test]
fn custom_code_block_renderer_gets_raw_code_when_escaping_is_off() {
    let converter = Converter::with_options(ConvertOptions {
        escape_html: false,
        code_block_renderer: Some(Box::new(|code, _| code.trim().to_string())),
        ..ConvertOptions::default()
    });
    assert_eq!(converter.convert("```py\nx = \"1\"\n```"), "x = \"1\"");
}

#[test]
fn converter_instance_is_reusable() {
    let converter = Converter::new();
    assert_eq!(converter.convert("**a**"), "<b>a</b>");
    assert_eq!(converter.convert("_b_"), "<i>b</i>");
    assert_eq!(converter.convert("plain"), "plain");
}
