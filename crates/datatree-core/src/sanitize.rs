//! Rich-content sanitization seam.
//!
//! Rich HTML payloads are the one place externally authored markup reaches
//! the display layer. The renderer hands the raw string to an
//! [`HtmlSanitizer`] and trusts whatever comes back.

/// Turns raw HTML-like input into content that is safe to display.
pub trait HtmlSanitizer {
    fn sanitize(&self, raw: &str) -> String;
}

/// Default sanitizer: escapes every markup-significant character, so the
/// payload displays as literal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeHtml;

impl HtmlSanitizer for EscapeHtml {
    fn sanitize(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for ch in raw.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(ch),
            }
        }
        out
    }
}

impl<F> HtmlSanitizer for F
where
    F: Fn(&str) -> String,
{
    fn sanitize(&self, raw: &str) -> String {
        self(raw)
    }
}
