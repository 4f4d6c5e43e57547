pub mod article;
pub mod raw;
pub mod related;

pub use article::{
    find_by_key, parse_articles, sort_by_date_desc, Article, Author, ContentBlock, ReadTime,
};
pub use related::related_articles;
