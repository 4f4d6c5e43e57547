//! Article body assembly.
//!
//! The body is the one place raw markup is inserted (`contentHTML`
//! comes pre-rendered from the feed), so the whole body is built as a
//! markup string and handed to `inner_html`. Text blocks and alt text
//! are escaped; `contentHTML` and image `src` attributes are trusted
//! verbatim.

use crate::shared::html::escape_html;
use contracts::domain::articles::{Article, ContentBlock};

/// Shown when an article has no hero image, no `contentHTML` and no
/// content blocks.
pub const EMPTY_BODY: &str = "<p>\u{2014}</p>";

/// Concatenates, in order: hero figure, `contentHTML`, content blocks.
pub fn article_body_html(article: &Article) -> String {
    let mut html = String::new();

    if let Some(src) = &article.hero_image {
        html.push_str(&format!(
            r#"<figure class="post-hero"><img src="{}" alt="{}"></figure>"#,
            src,
            escape_html(&article.title)
        ));
    }

    if let Some(raw) = &article.content_html {
        html.push_str(raw);
    }

    for block in &article.content {
        match block {
            ContentBlock::Text(data) => {
                html.push_str(&format!("<p>{}</p>", escape_html(data)));
            }
            ContentBlock::Image { src, alt } => {
                html.push_str(&format!(r#"<img src="{}" alt="{}" />"#, src, escape_html(alt)));
            }
        }
    }

    if html.is_empty() {
        EMPTY_BODY.to_string()
    } else {
        html
    }
}
