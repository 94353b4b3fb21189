//! Article records and the article index document.

use std::cmp::Reverse;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{date::parse_instant, error::Result};

/// A single article entry from the index document.
///
/// Every field is optional on the wire; missing or `null` values fall back
/// to empty strings and lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Opaque identifier, not required to be unique.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,

    /// Display title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Short summary shown on the card.
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Full text, only used as search haystack.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    /// Free-form date string.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    /// Ordered tags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Thumbnail image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,

    /// Link target for "read more".
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Article {
    /// Create an article with a title, date and link.
    pub fn new(title: impl Into<String>, date: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Set the full content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the thumbnail URL.
    pub fn with_thumb(mut self, thumb: impl Into<String>) -> Self {
        self.thumb = Some(thumb.into());
        self
    }

    /// Thumbnail URL, treating an empty string as absent.
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumb.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether the article carries `tag` (exact, case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Lower-cased search haystack: title, excerpt and content joined by spaces.
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.excerpt, self.content).to_lowercase()
    }
}

/// The article index document: a JSON array of articles, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleIndex {
    articles: Vec<Article>,
}

impl ArticleIndex {
    /// Parse the index from JSON text and sort it newest first.
    pub fn from_json(json: &str) -> Result<Self> {
        let articles: Vec<Article> = serde_json::from_str(json)?;
        Ok(Self::from_articles(articles))
    }

    /// Build an index from already-decoded articles, sorting newest first.
    ///
    /// Dates are compared as instants, so timestamps with different UTC
    /// offsets order correctly. The sort is stable. Articles with
    /// unparseable dates keep their input order and are placed after every
    /// dated article.
    pub fn from_articles(mut articles: Vec<Article>) -> Self {
        articles.sort_by_cached_key(|a| {
            let parsed = parse_instant(&a.date);
            (parsed.is_none(), Reverse(parsed))
        });
        Self { articles }
    }

    /// Articles in display order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Number of articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the index holds no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub(crate) fn into_articles(self) -> Vec<Article> {
        self.articles
    }
}
