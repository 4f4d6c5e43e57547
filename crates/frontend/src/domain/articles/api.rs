//! Fetch layer for the static article feed.

use contracts::domain::articles::{parse_articles, Article};
use gloo_net::http::Request;

/// Fixed location of the article feed, relative to the site origin.
pub const DATA_URL: &str = "/data/articles.json";

/// One GET per view. No retry, no timeout, no partial-data fallback:
/// a non-OK status or a malformed body is surfaced as a display-ready
/// message and the view stops there.
pub async fn fetch_articles() -> Result<Vec<Article>, String> {
    let response = Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| format!("Could not load articles: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Could not read article feed: {}", e))?;
    parse_articles(&text).map_err(|e| format!("Invalid article feed: {}", e))
}
