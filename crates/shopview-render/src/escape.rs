//! HTML escaping for the view-model → markup boundary.
//!
//! Every user- or server-supplied string passes through [`escape_html`]
//! exactly once, inside the render functions. View models hold raw text;
//! escaping earlier would double-escape, later would miss the boundary.

/// Escapes the five HTML-significant characters so `text` renders as text,
/// never as markup, in both element content and double- or single-quoted
/// attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(escape_html("Wireless Mouse"), "Wireless Mouse");
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_first_so_entities_stay_inert() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("Cables & Hubs"), "Cables &amp; Hubs");
    }

    #[test]
    fn escapes_single_quotes_for_attribute_contexts() {
        assert_eq!(escape_html("O'Brien's Dock"), "O&#x27;Brien&#x27;s Dock");
    }

    #[test]
    fn empty_string_is_empty() {
        assert_eq!(escape_html(""), "");
    }
}
