//! HTML escaping for code rendered through `innerHTML`.
//!
//! Code regions are handed to the syntax highlighter as markup, so their text
//! must be escaped first. Everything else in the page is rendered as text
//! nodes and needs no escaping.

/// Escape text so it displays verbatim when assigned as markup.
///
/// Quotes are escaped too, which keeps the output safe inside attribute
/// values as well as element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escape_html("fn main() {}"), "fn main() {}");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_markup_characters_are_escaped() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_output_contains_no_raw_markup() {
        let escaped = escape_html("<div class=\"a\">b</div>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn test_existing_entities_are_double_escaped() {
        // Code that literally contains an entity must display it literally
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_multiline_and_unicode_preserved() {
        assert_eq!(escape_html("a\n\tb → ✓"), "a\n\tb → ✓");
        assert_eq!(escape_html("x\u{00A0}y"), "x&nbsp;y");
    }
}
