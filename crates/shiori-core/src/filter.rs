//! Search text and tag filtering.

use std::collections::BTreeSet;

use crate::article::Article;

/// Current search text and tag selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw search box contents.
    pub query: String,

    /// Selected tag, `None` for no tag filter.
    pub active_tag: Option<String>,
}

impl FilterState {
    /// Whether `article` passes both the tag and the text predicate.
    pub fn matches(&self, article: &Article) -> bool {
        self.matches_tag(article) && self.matches_text(article)
    }

    fn matches_tag(&self, article: &Article) -> bool {
        self.active_tag
            .as_deref()
            .is_none_or(|tag| article.has_tag(tag))
    }

    fn matches_text(&self, article: &Article) -> bool {
        let needle = self.needle();
        needle.is_empty() || article.haystack().contains(&needle)
    }

    /// Normalized search needle: trimmed and lower-cased.
    pub fn needle(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// Toggle `tag`: clears it when already active, otherwise replaces the
    /// current selection.
    pub fn toggle_tag(&mut self, tag: String) {
        if self.active_tag.as_deref() == Some(tag.as_str()) {
            self.active_tag = None;
        } else {
            self.active_tag = Some(tag);
        }
    }

    /// Indices of the matching articles, in collection order.
    pub fn apply(&self, articles: &[Article]) -> Vec<usize> {
        articles
            .iter()
            .enumerate()
            .filter(|(_, a)| self.matches(a))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Every distinct tag across `articles`, sorted ascending.
pub fn tag_vocabulary(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .flat_map(|a| a.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Article> {
        vec![
            Article::new("Rust ownership", "2024-03-01", "/1").with_tags(["rust", "lang"]),
            Article::new("Go channels", "2024-02-01", "/2")
                .with_excerpt("CSP style")
                .with_tags(["go", "lang"]),
            Article::new("Gardening", "2024-01-01", "/3").with_content("Tomatoes go in May"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FilterState::default();
        assert_eq!(filter.apply(&sample()), vec![0, 1, 2]);
    }

    #[test]
    fn test_text_filter_is_case_insensitive_across_fields() {
        let filter = FilterState {
            query: "GO".to_string(),
            active_tag: None,
        };
        assert_eq!(filter.apply(&sample()), vec![1, 2]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let filter = FilterState {
            query: "  csp  ".to_string(),
            active_tag: None,
        };
        assert_eq!(filter.apply(&sample()), vec![1]);

        let blank = FilterState {
            query: "   ".to_string(),
            active_tag: None,
        };
        assert_eq!(blank.apply(&sample()).len(), 3);
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let filter = FilterState {
            query: String::new(),
            active_tag: Some("lang".to_string()),
        };
        assert_eq!(filter.apply(&sample()), vec![0, 1]);

        let upper = FilterState {
            query: String::new(),
            active_tag: Some("Lang".to_string()),
        };
        assert!(upper.apply(&sample()).is_empty());
    }

    #[test]
    fn test_tag_and_text_combine_with_and() {
        let filter = FilterState {
            query: "ownership".to_string(),
            active_tag: Some("lang".to_string()),
        };
        assert_eq!(filter.apply(&sample()), vec![0]);
    }

    #[test]
    fn test_toggle_tag() {
        let mut filter = FilterState::default();
        filter.toggle_tag("rust".to_string());
        assert_eq!(filter.active_tag.as_deref(), Some("rust"));

        filter.toggle_tag("go".to_string());
        assert_eq!(filter.active_tag.as_deref(), Some("go"));

        filter.toggle_tag("go".to_string());
        assert_eq!(filter.active_tag, None);
    }

    #[test]
    fn test_tag_vocabulary_sorted_and_deduplicated() {
        assert_eq!(tag_vocabulary(&sample()), ["go", "lang", "rust"]);
        assert!(tag_vocabulary(&[]).is_empty());
    }
}
