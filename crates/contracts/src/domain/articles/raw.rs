//! Wire shapes of the article feed.
//!
//! The JSON source is hand-maintained and duck-typed: several fields
//! accept more than one shape. Everything here is deserialization-only;
//! the shapes are resolved into [`super::article::Article`] exactly once
//! at load time so view code never re-inspects them.

use serde::Deserialize;

/// An article record as it appears in `articles.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub id: Option<RawKey>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// `category` wins over `categories` when both are present.
    #[serde(default)]
    pub category: Option<RawCategories>,
    #[serde(default)]
    pub categories: Option<RawCategories>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author: Option<RawAuthor>,
    #[serde(default)]
    pub read_time: Option<RawReadTime>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default, rename = "contentHTML")]
    pub content_html: Option<String>,
    #[serde(default)]
    pub content: Option<Vec<RawBlock>>,
}

/// Identifier, written as either a string or a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawKey {
    Text(String),
    Number(serde_json::Number),
}

impl RawKey {
    pub fn as_string(&self) -> String {
        match self {
            RawKey::Text(s) => s.clone(),
            RawKey::Number(n) => n.to_string(),
        }
    }
}

/// Categories, written as `["life", "faith"]`, `"life, faith"` or `"life"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCategories {
    Many(Vec<String>),
    One(String),
}

/// Author, written as a plain name or a structured object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAuthor {
    Full {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        avatar: Option<String>,
        #[serde(default)]
        bio: Option<String>,
    },
    Name(String),
}

/// Read time, written as minutes or as a preformatted label.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawReadTime {
    Minutes(f64),
    Label(String),
}

/// A content block. The `type` discriminator is an open string on the
/// wire; unknown or incomplete blocks are dropped during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBlock {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}
