//! Shiori UI Components
//!
//! Leptos components for the Shiori article listing page, plus the browser
//! bindings that back the core traits.
//!
//! # Components
//!
//! ## Browser
//! - [`ArticleBrowser`] - Loads the article index and wires everything below
//! - [`SearchBox`] - Free-text search input (no debounce)
//! - [`TagBar`] - "All" button and one toggle per tag
//! - [`ArticleList`] / [`ArticleCard`] - Card list area
//! - [`Pagination`] - Page number buttons
//!
//! ## Chrome
//! - [`PublishDate`] - Publish-date stamp
//! - [`ThemeToggle`] - Light/dark switch persisted in `localStorage`
//! - [`ShareButton`] - Native share with clipboard and prompt fallbacks
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use shiori_core::Messages;
//! use shiori_ui::ArticleBrowser;
//!
//! #[component]
//! fn Listing() -> impl IntoView {
//!     view! { <ArticleBrowser data_url="data/articles.json" messages=Messages::default() /> }
//! }
//! ```

pub mod article;
pub mod browser;
pub mod chrome;
pub mod search;
pub mod web;

pub use article::{ArticleCard, ArticleList, ListLabels};
pub use browser::{ArticleBrowser, Pagination, TagBar, button_class};
pub use chrome::{PublishDate, ShareButton, ThemeToggle, restore_theme};
pub use search::SearchBox;
pub use web::{BrowserShareHost, DocumentRootTheme, LocalStoragePreferences, fetch_index};
