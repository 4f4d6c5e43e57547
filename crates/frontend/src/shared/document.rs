//! Tab-title handling.
//!
//! Client-side navigation keeps the document alive between views, so
//! each view sets its own title on mount instead of relying on a page
//! load.

use crate::app::SITE_NAME;

/// `"{page} • {site}"` for article pages, the plain site name elsewhere.
pub fn document_title(page: Option<&str>) -> String {
    match page {
        Some(p) => format!("{} \u{2022} {}", p, SITE_NAME),
        None => SITE_NAME.to_string(),
    }
}

pub fn set_document_title(page: Option<&str>) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(&document_title(page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_title_carries_the_site_name() {
        assert_eq!(
            document_title(Some("On Doubt")),
            format!("On Doubt \u{2022} {}", SITE_NAME)
        );
    }

    #[test]
    fn test_no_page_resets_to_site_name() {
        assert_eq!(document_title(None), SITE_NAME);
    }
}
