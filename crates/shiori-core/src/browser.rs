//! Article browser state and its command reducer.
//!
//! The browser owns the master article collection, the current
//! [`FilterState`] and the derived view (filtered indices plus the current
//! page). Every user interaction is a [`BrowseCommand`] passed to
//! [`BrowserState::dispatch`]; rendering is a separate projection, see
//! [`crate::view`].

use crate::{
    article::{Article, ArticleIndex},
    error::CoreError,
    filter::{FilterState, tag_vocabulary},
};

/// A user action on the article browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// The search box contents changed.
    Search(String),
    /// A tag button was activated.
    ToggleTag(String),
    /// The "all" tag button was activated.
    ClearTag,
    /// A pagination button was activated.
    GoToPage(usize),
}

/// Article index loading status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// The index fetch has not completed yet.
    #[default]
    Pending,
    /// The index was loaded.
    Ready,
    /// The index could not be loaded.
    Failed,
}

/// State of the article browser.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    page_size: usize,
    status: LoadStatus,
    articles: Vec<Article>,
    tags: Vec<String>,
    filter: FilterState,
    filtered: Vec<usize>,
    current_page: usize,
}

impl BrowserState {
    /// Create an empty browser waiting for its article index.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            status: LoadStatus::Pending,
            articles: Vec::new(),
            tags: Vec::new(),
            filter: FilterState::default(),
            filtered: Vec::new(),
            current_page: 1,
        }
    }

    /// Create a browser that has already loaded `index`.
    pub fn with_index(page_size: usize, index: ArticleIndex) -> Self {
        let mut state = Self::new(page_size);
        state.load(index);
        state
    }

    /// Complete the initial fetch with either an index or the load error.
    pub fn finish_load(&mut self, result: Result<ArticleIndex, CoreError>) {
        match result {
            Ok(index) => self.load(index),
            Err(err) => self.fail(&err),
        }
    }

    /// Install the master collection and show page 1 of everything.
    ///
    /// The collection is set once; later calls are ignored.
    pub fn load(&mut self, index: ArticleIndex) {
        if self.status != LoadStatus::Pending {
            log::warn!("article index already settled, ignoring reload");
            return;
        }

        self.articles = index.into_articles();
        self.tags = tag_vocabulary(&self.articles);
        self.status = LoadStatus::Ready;
        self.filter = FilterState::default();
        self.apply_filters();
    }

    /// Mark the initial fetch as failed.
    pub fn fail(&mut self, err: &CoreError) {
        if self.status != LoadStatus::Pending {
            return;
        }
        log::error!("failed to load article index: {err}");
        self.status = LoadStatus::Failed;
    }

    /// Apply a user command.
    pub fn dispatch(&mut self, command: BrowseCommand) {
        match command {
            BrowseCommand::Search(query) => {
                self.filter.query = query;
                self.apply_filters();
            }
            BrowseCommand::ToggleTag(tag) => {
                self.filter.toggle_tag(tag);
                self.apply_filters();
            }
            BrowseCommand::ClearTag => {
                self.filter.active_tag = None;
                self.apply_filters();
            }
            BrowseCommand::GoToPage(page) => self.go_to_page(page),
        }
    }

    /// Recompute the filtered view from the filter state and reset to page 1.
    pub fn apply_filters(&mut self) {
        self.filtered = self.filter.apply(&self.articles);
        self.current_page = 1;
    }

    /// Show `page` of the current filtered view.
    ///
    /// Out-of-range pages are clamped into `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    /// Number of pages for the filtered view.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Filtered articles on the current page.
    pub fn page_articles(&self) -> impl Iterator<Item = (usize, &Article)> + '_ {
        let start = (self.current_page - 1) * self.page_size;
        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| (i, &self.articles[i]))
    }

    /// Every filtered article, in collection order.
    pub fn filtered_articles(&self) -> impl Iterator<Item = &Article> + '_ {
        self.filtered.iter().map(|&i| &self.articles[i])
    }

    /// Indices of the filtered articles into [`Self::articles`].
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    /// The master collection, newest first.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Tag vocabulary of the whole collection, sorted ascending.
    pub fn tag_vocabulary(&self) -> &[String] {
        &self.tags
    }

    /// Current filter state.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Cards per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Loading status of the article index.
    pub fn status(&self) -> LoadStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn articles(count: usize) -> ArticleIndex {
        ArticleIndex::from_articles(
            (0..count)
                .map(|i| {
                    let tag = if i % 2 == 0 { "even" } else { "odd" };
                    Article::new(
                        format!("Article {i}"),
                        format!("2024-01-{:02}", i + 1),
                        format!("/a/{i}"),
                    )
                    .with_tags([tag])
                })
                .collect(),
        )
    }

    #[test]
    fn test_new_state_is_pending() {
        let state = BrowserState::new(6);
        assert_eq!(state.status(), LoadStatus::Pending);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let state = BrowserState::new(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn test_load_shows_everything() {
        let state = BrowserState::with_index(6, articles(13));
        assert_eq!(state.status(), LoadStatus::Ready);
        assert_eq!(state.filtered_indices().len(), 13);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.tag_vocabulary(), ["even", "odd"]);
    }

    #[test]
    fn test_second_load_is_ignored() {
        let mut state = BrowserState::with_index(6, articles(3));
        state.load(articles(10));
        assert_eq!(state.articles().len(), 3);
    }

    #[test]
    fn test_failed_load() {
        let mut state = BrowserState::new(6);
        state.finish_load(Err(CoreError::Fetch { status: 500 }));
        assert_eq!(state.status(), LoadStatus::Failed);
        assert!(state.articles().is_empty());
    }

    #[test]
    fn test_load_resets_filter_typed_while_pending() {
        let mut state = BrowserState::new(6);
        state.dispatch(BrowseCommand::Search("article 1".to_string()));
        state.load(articles(4));
        assert!(state.filter().query.is_empty());
        assert_eq!(state.filtered_indices().len(), 4);
    }

    #[test]
    fn test_go_to_page_slices() {
        let mut state = BrowserState::with_index(6, articles(13));
        state.dispatch(BrowseCommand::GoToPage(3));
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.page_articles().count(), 1);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = BrowserState::with_index(6, articles(13));
        state.go_to_page(99);
        assert_eq!(state.current_page(), 3);
        state.go_to_page(0);
        assert_eq!(state.current_page(), 1);

        let mut empty = BrowserState::with_index(6, articles(0));
        empty.go_to_page(2);
        assert_eq!(empty.current_page(), 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = BrowserState::with_index(6, articles(13));
        state.go_to_page(2);
        state.dispatch(BrowseCommand::ToggleTag("odd".to_string()));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.filtered_indices().len(), 6);
    }

    #[test]
    fn test_clear_tag() {
        let mut state = BrowserState::with_index(6, articles(5));
        state.dispatch(BrowseCommand::ToggleTag("even".to_string()));
        assert_eq!(state.filtered_indices().len(), 3);
        state.dispatch(BrowseCommand::ClearTag);
        assert_eq!(state.filter().active_tag, None);
        assert_eq!(state.filtered_indices().len(), 5);
    }

    #[test]
    fn test_tag_vocabulary_does_not_shrink() {
        let mut state = BrowserState::with_index(6, articles(5));
        state.dispatch(BrowseCommand::ToggleTag("even".to_string()));
        state.dispatch(BrowseCommand::Search("article 2".to_string()));
        assert_eq!(state.filtered_indices().len(), 1);
        assert_eq!(state.tag_vocabulary(), ["even", "odd"]);
    }
}
