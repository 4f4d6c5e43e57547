//! Normalized article records.
//!
//! [`Article::from_raw`] resolves every duck-typed wire shape once, so
//! list filtering, related-article selection and rendering all work on
//! one fixed representation.

use anyhow::Context;
use chrono::{DateTime, NaiveDate};

use super::raw::{RawArticle, RawAuthor, RawBlock, RawCategories, RawReadTime};

/// Fallback title for records without one.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Link/lookup key: `slug`, falling back to the stringified `id`.
    /// May be empty when the record carries neither.
    pub key: String,
    pub title: String,
    pub summary: String,
    /// Lowercased, trimmed, with empty entries removed.
    pub categories: Vec<String>,
    /// Raw display form of the category field, for card captions.
    pub category_label: String,
    pub date: Option<NaiveDate>,
    pub author: Author,
    pub read_time: Option<ReadTime>,
    pub hero_image: Option<String>,
    pub content_html: Option<String>,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Author {
    pub name: String,
    pub avatar: Option<String>,
    /// Only populated for structured authors; a plain-string author
    /// has no bio.
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadTime {
    Minutes(f64),
    Label(String),
}

impl ReadTime {
    /// Display text: minutes become `"N min read"`, labels are used
    /// verbatim.
    pub fn label(&self) -> String {
        match self {
            ReadTime::Minutes(n) => format!("{} min read", n),
            ReadTime::Label(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(String),
    Image { src: String, alt: String },
}

impl Article {
    pub fn from_raw(raw: RawArticle) -> Self {
        let key = raw
            .slug
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| raw.id.as_ref().map(|id| id.as_string()))
            .unwrap_or_default();

        // `category` wins over `categories` when both are present.
        let cats = raw.category.as_ref().or(raw.categories.as_ref());
        let categories = cats.map(normalize_categories).unwrap_or_default();
        let category_label = cats.map(category_label).unwrap_or_default();

        Self {
            key,
            title: raw
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string()),
            summary: raw.summary.unwrap_or_default(),
            categories,
            category_label,
            date: raw.date.as_deref().and_then(parse_date),
            author: raw.author.map(Author::from_raw).unwrap_or_default(),
            read_time: raw.read_time.map(|rt| match rt {
                RawReadTime::Minutes(n) => ReadTime::Minutes(n),
                RawReadTime::Label(s) => ReadTime::Label(s),
            }),
            hero_image: raw.hero_image,
            content_html: raw.content_html.filter(|h| !h.is_empty()),
            content: raw
                .content
                .unwrap_or_default()
                .into_iter()
                .filter_map(ContentBlock::from_raw)
                .collect(),
        }
    }
}

impl Author {
    fn from_raw(raw: RawAuthor) -> Self {
        match raw {
            RawAuthor::Name(name) => Self {
                name,
                ..Self::default()
            },
            RawAuthor::Full { name, avatar, bio } => Self {
                name: name.unwrap_or_default(),
                avatar,
                bio,
            },
        }
    }
}

impl ContentBlock {
    /// Unknown block types and blocks missing their payload are dropped.
    fn from_raw(raw: RawBlock) -> Option<Self> {
        match raw.kind.as_str() {
            "text" => raw.data.filter(|d| !d.is_empty()).map(ContentBlock::Text),
            "image" => raw.src.filter(|s| !s.is_empty()).map(|src| ContentBlock::Image {
                src,
                alt: raw.alt.unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

/// Lowercase, trim and drop empty entries. A single string is split on
/// commas; a sequence is normalized per entry (entries are not split).
pub fn normalize_categories(raw: &RawCategories) -> Vec<String> {
    match raw {
        RawCategories::Many(items) => items
            .iter()
            .map(|c| c.to_lowercase().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
        RawCategories::One(s) => s
            .split(',')
            .map(|c| c.to_lowercase().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
    }
}

fn category_label(raw: &RawCategories) -> String {
    match raw {
        RawCategories::Many(items) => items.join(", "),
        RawCategories::One(s) => s.clone(),
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Parse the article feed.
///
/// A top-level value that is not an array is coerced to an empty set;
/// malformed JSON or malformed records are an error.
pub fn parse_articles(json: &str) -> anyhow::Result<Vec<Article>> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("article feed is not valid JSON")?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    let raw: Vec<RawArticle> =
        serde_json::from_value(value).context("malformed article record")?;
    Ok(raw.into_iter().map(Article::from_raw).collect())
}

/// Newest first; records without a date sort as the oldest. The sort is
/// stable, so undated records keep their source order.
pub fn sort_by_date_desc(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Stringwise key lookup, mirroring the link format of generated cards.
pub fn find_by_key<'a>(articles: &'a [Article], key: &str) -> Option<&'a Article> {
    articles.iter().find(|a| a.key == key)
}
