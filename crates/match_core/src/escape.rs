/// Escapes text the way a DOM text node serialises it: `&`, `<`, `>` and
/// no-break spaces. Quotes are left alone, so the output is only safe inside
/// element content, never inside attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<script>alert('x') && 1</script>"),
            "&lt;script&gt;alert('x') &amp;&amp; 1&lt;/script&gt;"
        );
    }

    #[test]
    fn keeps_quotes_and_plain_text() {
        assert_eq!(escape_html(r#"say "hi""#), r#"say "hi""#);
        assert_eq!(escape_html("a\u{a0}b"), "a&nbsp;b");
    }
}
