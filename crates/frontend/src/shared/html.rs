//! HTML escaping for text that ends up inside raw markup strings.
//!
//! Leptos text nodes escape on their own; this is only for the article
//! body, which is assembled as one markup string and inserted via
//! `inner_html`.

/// Replace `& <> " '` with their entity forms.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
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
