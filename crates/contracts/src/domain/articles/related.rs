//! Related-article selection for the article view.

use super::article::Article;

/// How many related articles the article view shows.
pub const RELATED_LIMIT: usize = 3;

/// Articles sharing at least one normalized category with `current`,
/// excluding `current` itself, in original source order, capped at
/// [`RELATED_LIMIT`].
///
/// An article with no categories is related to nothing.
pub fn related_articles<'a>(articles: &'a [Article], current: &Article) -> Vec<&'a Article> {
    if current.categories.is_empty() {
        return Vec::new();
    }
    articles
        .iter()
        .filter(|other| {
            other.key != current.key
                && other
                    .categories
                    .iter()
                    .any(|c| current.categories.contains(c))
        })
        .take(RELATED_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::articles::raw::RawArticle;

    fn from_json(json: &str) -> Article {
        let raw: RawArticle = serde_json::from_str(json).unwrap();
        Article::from_raw(raw)
    }

    #[test]
    fn test_comma_string_and_sequence_forms_are_mutually_related() {
        let a = from_json(r#"{"id":1,"category":"life, faith"}"#);
        let b = from_json(r#"{"id":2,"category":["faith"]}"#);
        let set = vec![a.clone(), b.clone()];

        let related_to_a = related_articles(&set, &a);
        assert_eq!(related_to_a.len(), 1);
        assert_eq!(related_to_a[0].key, "2");

        let related_to_b = related_articles(&set, &b);
        assert_eq!(related_to_b.len(), 1);
        assert_eq!(related_to_b[0].key, "1");
    }

    #[test]
    fn test_never_includes_current_article() {
        let a = from_json(r#"{"id":1,"category":"life"}"#);
        let set = vec![a.clone()];
        assert!(related_articles(&set, &a).is_empty());
    }

    #[test]
    fn test_caps_at_three_in_source_order() {
        let current = from_json(r#"{"id":0,"category":"life"}"#);
        let set: Vec<Article> = (0..6)
            .map(|i| from_json(&format!(r#"{{"id":{},"category":"life"}}"#, i)))
            .collect();
        let related = related_articles(&set, &current);
        let keys: Vec<&str> = related.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_no_categories_means_no_related() {
        let current = from_json(r#"{"id":1}"#);
        let other = from_json(r#"{"id":2,"category":"life"}"#);
        assert!(related_articles(&[other], &current).is_empty());
    }

    #[test]
    fn test_requires_category_overlap() {
        let current = from_json(r#"{"id":1,"category":"life"}"#);
        let other = from_json(r#"{"id":2,"category":"travel"}"#);
        assert!(related_articles(&[other], &current).is_empty());
    }
}
