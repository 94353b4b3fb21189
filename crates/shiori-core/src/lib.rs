//! Shiori Core Library
//!
//! Host-independent model for the Shiori article listing page: the article
//! index, search and tag filtering, pagination, the render projection, and
//! the page chrome logic (theme preference, share fallbacks, date stamps).
//!
//! Nothing here touches the browser. Platform access is injected through
//! [`Preferences`], [`ThemeSurface`] and [`ShareHost`].

pub mod article;
pub mod browser;
pub mod config;
pub mod date;
pub mod error;
pub mod filter;
pub mod share;
pub mod theme;
pub mod view;

pub use article::{Article, ArticleIndex};
pub use browser::{BrowseCommand, BrowserState, LoadStatus};
pub use config::{ChromeConfig, Config, Messages, SiteConfig, ThemeConfig};
pub use date::{format_date, parse_date, parse_instant, publish_date_label};
pub use error::{CoreError, Result};
pub use filter::{FilterState, tag_vocabulary};
pub use share::{
    ClipboardCopy, ManualPrompt, NativeShare, ShareChain, ShareHost, ShareOutcome, SharePayload,
    ShareStep, ShareStrategy,
};
pub use theme::{LIGHT_CLASS, Preferences, Theme, ThemeController, ThemeSurface};
pub use view::{BrowserView, CardView, ListView, PageButton, PaginationView, TagBarView, TagChip};
