//! Home list state.
//!
//! Pure state transitions, kept separate from the component so the
//! filter/pagination behavior is testable without a DOM. The component
//! owns one `RwSignal<ListState>` and re-renders as a projection of it.

use contracts::domain::articles::{sort_by_date_desc, Article};
use leptos::prelude::*;

/// Fixed page size of the home list.
pub const PER_PAGE: usize = 8;

/// Sentinel filter matching every article.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Debug)]
pub struct ListState {
    pub all: Vec<Article>,
    pub filtered: Vec<Article>,
    /// 1-based; reset to 1 whenever the filter criteria change.
    pub page: usize,
    pub per_page: usize,
    pub filter: String,
    pub query: String,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            page: 1,
            per_page: PER_PAGE,
            filter: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }
}

impl ListState {
    /// Store the loaded set, newest first, and apply the current filters.
    pub fn load(&mut self, mut articles: Vec<Article>) {
        sort_by_date_desc(&mut articles);
        self.all = articles;
        self.apply_filters();
    }

    /// Recompute `filtered` from `query` and `filter`.
    ///
    /// Always resets `page` to 1: a stale deep page could otherwise
    /// hide every record matching the new criteria.
    pub fn apply_filters(&mut self) {
        let q = self.query.trim().to_lowercase();
        self.filtered = self
            .all
            .iter()
            .filter(|a| {
                let in_cat = self.filter == ALL_CATEGORIES
                    || a.categories.iter().any(|c| *c == self.filter);
                let in_text = q.is_empty()
                    || a.title.to_lowercase().contains(&q)
                    || a.summary.to_lowercase().contains(&q);
                in_cat && in_text
            })
            .cloned()
            .collect();
        self.page = 1;
    }

    pub fn on_search_changed(&mut self, query: String) {
        self.query = query;
        self.apply_filters();
    }

    pub fn on_filter_changed(&mut self, category: String) {
        self.filter = category;
        self.apply_filters();
    }

    /// Widens the visible slice; does not re-filter.
    pub fn on_page_advance(&mut self) {
        self.page += 1;
    }

    /// The slice `filtered[0 .. page*per_page)`.
    pub fn visible(&self) -> &[Article] {
        let end = (self.page * self.per_page).min(self.filtered.len());
        &self.filtered[..end]
    }

    pub fn has_more(&self) -> bool {
        self.filtered.len() > self.page * self.per_page
    }

    /// Distinct normalized categories of the loaded set, sorted, for
    /// the chip row.
    pub fn categories(&self) -> Vec<String> {
        let mut cats: Vec<String> = self
            .all
            .iter()
            .flat_map(|a| a.categories.iter().cloned())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    }

    /// Chip row labels: the "all" sentinel followed by the distinct
    /// categories. A record categorized literally as "all" would
    /// collide with the sentinel, so it is not repeated.
    pub fn chip_labels(&self) -> Vec<String> {
        let mut chips = vec![ALL_CATEGORIES.to_string()];
        chips.extend(
            self.categories()
                .into_iter()
                .filter(|c| c.as_str() != ALL_CATEGORIES),
        );
        chips
    }
}

pub fn create_state() -> RwSignal<ListState> {
    RwSignal::new(ListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::articles::raw::RawArticle;

    fn article(json: &str) -> Article {
        let raw: RawArticle = serde_json::from_str(json).unwrap();
        Article::from_raw(raw)
    }

    fn loaded(jsons: &[&str]) -> ListState {
        let mut state = ListState::default();
        state.load(jsons.iter().map(|j| article(j)).collect());
        state
    }

    #[test]
    fn test_load_sorts_newest_first() {
        let state = loaded(&[
            r#"{"id":1,"title":"A","category":"life","date":"2024-01-01"}"#,
            r#"{"id":2,"title":"B","category":"faith","date":"2024-02-01"}"#,
        ]);
        let titles: Vec<&str> = state.visible().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_category_filter_narrows_the_list() {
        let mut state = loaded(&[
            r#"{"id":1,"title":"A","category":"life","date":"2024-01-01"}"#,
            r#"{"id":2,"title":"B","category":"faith","date":"2024-02-01"}"#,
        ]);
        state.on_filter_changed("life".to_string());
        let titles: Vec<&str> = state.visible().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["A"]);
    }

    #[test]
    fn test_search_matches_title_and_summary_case_insensitively() {
        let mut state = loaded(&[
            r#"{"id":1,"title":"Morning walks"}"#,
            r#"{"id":2,"title":"B","summary":"A walk to remember"}"#,
            r#"{"id":3,"title":"C","summary":"nothing here"}"#,
        ]);
        state.on_search_changed("WALK".to_string());
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let mut state = loaded(&[
            r#"{"id":1,"title":"A","category":"life"}"#,
            r#"{"id":2,"title":"B","category":"faith"}"#,
        ]);
        state.on_filter_changed("life".to_string());
        let first = state.filtered.clone();
        state.apply_filters();
        assert_eq!(state.filtered, first);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let jsons: Vec<String> = (0..20)
            .map(|i| format!(r#"{{"id":{},"title":"T{}","category":"life"}}"#, i, i))
            .collect();
        let refs: Vec<&str> = jsons.iter().map(|s| s.as_str()).collect();
        let mut state = loaded(&refs);

        state.on_page_advance();
        assert_eq!(state.page, 2);
        state.on_search_changed("T1".to_string());
        assert_eq!(state.page, 1);
        assert_eq!(
            state.visible().len(),
            state.per_page.min(state.filtered.len())
        );
    }

    #[test]
    fn test_load_more_is_monotonic_until_exhausted() {
        let jsons: Vec<String> = (0..20)
            .map(|i| format!(r#"{{"id":{},"title":"T{}"}}"#, i, i))
            .collect();
        let refs: Vec<&str> = jsons.iter().map(|s| s.as_str()).collect();
        let mut state = loaded(&refs);

        assert_eq!(state.visible().len(), 8);
        assert!(state.has_more());

        state.on_page_advance();
        assert_eq!(state.visible().len(), 16);
        assert!(state.has_more());

        state.on_page_advance();
        assert_eq!(state.visible().len(), 20);
        assert!(!state.has_more());
    }

    #[test]
    fn test_empty_result_set_is_representable() {
        let mut state = loaded(&[r#"{"id":1,"title":"A"}"#]);
        state.on_search_changed("no such text".to_string());
        assert!(state.visible().is_empty());
        assert!(!state.has_more());
    }

    #[test]
    fn test_chip_labels_do_not_duplicate_the_all_sentinel() {
        let state = loaded(&[
            r#"{"id":1,"category":"all"}"#,
            r#"{"id":2,"category":"life"}"#,
        ]);
        assert_eq!(state.chip_labels(), vec!["all", "life"]);
    }

    #[test]
    fn test_categories_are_distinct_and_sorted() {
        let state = loaded(&[
            r#"{"id":1,"category":"Life, faith"}"#,
            r#"{"id":2,"category":["faith","travel"]}"#,
        ]);
        assert_eq!(state.categories(), vec!["faith", "life", "travel"]);
    }
}
