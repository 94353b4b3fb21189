//! Render projection of the browser state.
//!
//! [`BrowserState::view`] turns the state into plain data describing the
//! tag bar, the card list and the pagination buttons. The UI layer renders
//! this without looking at the state itself.

use crate::{
    browser::{BrowserState, LoadStatus},
    date::format_date,
};

/// Everything the article browser shows.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserView {
    /// Tag selector bar, absent until the index is loaded.
    pub tag_bar: Option<TagBarView>,
    /// Card list area.
    pub list: ListView,
    /// Pagination buttons.
    pub pagination: PaginationView,
}

/// Tag selector bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBarView {
    /// Whether the "all" button is active.
    pub all_active: bool,
    /// One chip per vocabulary tag, sorted ascending.
    pub tags: Vec<TagChip>,
}

/// A single tag button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    /// Tag text, also the value toggled on activation.
    pub name: String,
    /// Whether this tag is the active filter.
    pub active: bool,
}

/// Contents of the card list area.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// The index fetch is still in flight.
    Loading,
    /// The index could not be loaded.
    Failed,
    /// No article matches the current filters.
    Empty,
    /// Cards on the current page.
    Cards(Vec<CardView>),
}

/// One article card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Position in the master collection, stable across re-renders.
    pub key: usize,
    /// Article title, also the thumbnail alt text.
    pub title: String,
    /// Short summary, empty when absent.
    pub excerpt: String,
    /// Display date, `YYYY-MM-DD` or the raw string.
    pub date_label: String,
    /// Tag labels in article order.
    pub tags: Vec<String>,
    /// Thumbnail URL; `None` renders the placeholder.
    pub thumb: Option<String>,
    /// Link target of the read-more link.
    pub url: String,
}

/// Pagination buttons; empty when there is at most one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationView {
    /// One button per page, in page order.
    pub buttons: Vec<PageButton>,
}

/// A single page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// 1-based page number.
    pub number: usize,
    /// Whether this is the current page.
    pub active: bool,
}

impl PaginationView {
    /// Whether no buttons are shown.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// The active page button, if any.
    pub fn active(&self) -> Option<usize> {
        self.buttons.iter().find(|b| b.active).map(|b| b.number)
    }
}

impl BrowserState {
    /// Project the state into its rendered form.
    pub fn view(&self) -> BrowserView {
        match self.status() {
            LoadStatus::Pending => BrowserView {
                tag_bar: None,
                list: ListView::Loading,
                pagination: PaginationView::default(),
            },
            LoadStatus::Failed => BrowserView {
                tag_bar: None,
                list: ListView::Failed,
                pagination: PaginationView::default(),
            },
            LoadStatus::Ready => {
                let list = self.render_list();
                let pagination = match list {
                    ListView::Cards(_) => self.render_pagination(),
                    _ => PaginationView::default(),
                };
                BrowserView {
                    tag_bar: Some(self.render_tags()),
                    list,
                    pagination,
                }
            }
        }
    }

    fn render_tags(&self) -> TagBarView {
        let active = self.filter().active_tag.as_deref();
        TagBarView {
            all_active: active.is_none(),
            tags: self
                .tag_vocabulary()
                .iter()
                .map(|name| TagChip {
                    name: name.clone(),
                    active: active == Some(name.as_str()),
                })
                .collect(),
        }
    }

    fn render_list(&self) -> ListView {
        let cards: Vec<CardView> = self
            .page_articles()
            .map(|(key, article)| CardView {
                key,
                title: article.title.clone(),
                excerpt: article.excerpt.clone(),
                date_label: format_date(&article.date),
                tags: article.tags.clone(),
                thumb: article.thumbnail().map(str::to_string),
                url: article.url.clone(),
            })
            .collect();

        if cards.is_empty() {
            ListView::Empty
        } else {
            ListView::Cards(cards)
        }
    }

    fn render_pagination(&self) -> PaginationView {
        let total = self.total_pages();
        if total <= 1 {
            return PaginationView::default();
        }

        PaginationView {
            buttons: (1..=total)
                .map(|number| PageButton {
                    number,
                    active: number == self.current_page(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        article::{Article, ArticleIndex},
        browser::BrowseCommand,
        error::CoreError,
    };

    fn state(count: usize) -> BrowserState {
        let articles = (0..count)
            .map(|i| {
                Article::new(
                    format!("Post {i}"),
                    format!("2024-02-{:02}", i + 1),
                    format!("/p/{i}"),
                )
                .with_tags(if i % 3 == 0 { vec!["rust"] } else { vec!["misc"] })
            })
            .collect();
        BrowserState::with_index(6, ArticleIndex::from_articles(articles))
    }

    #[test]
    fn test_pending_view() {
        let view = BrowserState::new(6).view();
        assert_eq!(view.list, ListView::Loading);
        assert!(view.tag_bar.is_none());
        assert!(view.pagination.is_empty());
    }

    #[test]
    fn test_failed_view() {
        let mut state = BrowserState::new(6);
        state.finish_load(Err(CoreError::network("offline")));
        let view = state.view();
        assert_eq!(view.list, ListView::Failed);
        assert!(view.pagination.is_empty());
    }

    #[test]
    fn test_cards_carry_display_fields() {
        let index = ArticleIndex::from_articles(vec![
            Article::new("Dated", "2024/3/9", "/d")
                .with_excerpt("short")
                .with_tags(["a", "b"])
                .with_thumb("/t.png"),
            Article::new("Undated", "someday", "/u"),
        ]);
        let view = BrowserState::with_index(6, index).view();

        let ListView::Cards(cards) = view.list else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].date_label, "2024-03-09");
        assert_eq!(cards[0].thumb.as_deref(), Some("/t.png"));
        assert_eq!(cards[0].tags, ["a", "b"]);
        assert_eq!(cards[1].date_label, "someday");
        assert!(cards[1].thumb.is_none());
    }

    #[test]
    fn test_pagination_marks_current_page() {
        let mut state = state(13);
        state.dispatch(BrowseCommand::GoToPage(2));
        let view = state.view();
        assert_eq!(view.pagination.buttons.len(), 3);
        assert_eq!(view.pagination.active(), Some(2));
    }

    #[test]
    fn test_single_page_has_no_buttons() {
        let view = state(6).view();
        assert!(matches!(view.list, ListView::Cards(ref c) if c.len() == 6));
        assert!(view.pagination.is_empty());
    }

    #[test]
    fn test_tag_bar_marks_active_tag() {
        let mut state = state(7);
        let bar = state.view().tag_bar.expect("tag bar");
        assert!(bar.all_active);
        assert!(bar.tags.iter().all(|t| !t.active));

        state.dispatch(BrowseCommand::ToggleTag("rust".to_string()));
        let bar = state.view().tag_bar.expect("tag bar");
        assert!(!bar.all_active);
        let names: Vec<_> = bar.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["misc", "rust"]);
        assert!(bar.tags[1].active);
        assert!(!bar.tags[0].active);
    }

    #[test]
    fn test_no_matches_view() {
        let mut state = state(8);
        state.dispatch(BrowseCommand::Search("nothing like this".to_string()));
        let view = state.view();
        assert_eq!(view.list, ListView::Empty);
        assert!(view.pagination.is_empty());
        assert!(view.tag_bar.is_some());
    }

    #[test]
    fn test_card_keys_index_master_collection() {
        let mut state = state(7);
        state.dispatch(BrowseCommand::ToggleTag("rust".to_string()));
        let ListView::Cards(cards) = state.view().list else {
            panic!("expected cards");
        };
        for card in cards {
            assert_eq!(state.articles()[card.key].url, card.url);
        }
    }
}
