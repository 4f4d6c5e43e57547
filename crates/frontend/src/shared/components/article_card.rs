//! Link card for one article, used by the home list and the related
//! section of the article view. Title, summary and caption are Leptos
//! text nodes, so they are escaped by construction.

use crate::shared::date_utils::format_date;
use contracts::domain::articles::Article;
use leptos::prelude::*;

/// Link target for an article card, with the key URL-encoded.
pub fn article_href(article: &Article) -> String {
    format!("/article?slug={}", urlencoding::encode(&article.key))
}

/// `category • date` caption line; either part may be absent.
pub fn card_caption(article: &Article) -> String {
    let date = article.date.map(format_date);
    match (article.category_label.is_empty(), date) {
        (false, Some(d)) => format!("{} • {}", article.category_label, d),
        (false, None) => article.category_label.clone(),
        (true, Some(d)) => d,
        (true, None) => String::new(),
    }
}

#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let href = article_href(&article);
    let caption = card_caption(&article);

    view! {
        <a class="card" href=href>
            <h3>{article.title.clone()}</h3>
            <p>{article.summary.clone()}</p>
            <small>{caption}</small>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::articles::raw::RawArticle;

    fn from_json(json: &str) -> Article {
        let raw: RawArticle = serde_json::from_str(json).unwrap();
        Article::from_raw(raw)
    }

    #[test]
    fn test_href_url_encodes_key() {
        let a = from_json(r#"{"slug":"a b&c"}"#);
        assert_eq!(article_href(&a), "/article?slug=a%20b%26c");
    }

    #[test]
    fn test_href_falls_back_to_id() {
        let a = from_json(r#"{"id":12}"#);
        assert_eq!(article_href(&a), "/article?slug=12");
    }

    #[test]
    fn test_caption_combinations() {
        let a = from_json(r#"{"category":"Life","date":"2024-01-05"}"#);
        assert_eq!(card_caption(&a), "Life • 05.01.2024");

        let a = from_json(r#"{"category":["Life","Faith"]}"#);
        assert_eq!(card_caption(&a), "Life, Faith");

        let a = from_json(r#"{"date":"2024-01-05"}"#);
        assert_eq!(card_caption(&a), "05.01.2024");

        let a = from_json(r#"{}"#);
        assert_eq!(card_caption(&a), "");
    }
}
