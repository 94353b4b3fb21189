//! Site configuration management.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Shiori.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Theme preference settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Which optional page chrome controls are rendered.
    #[serde(default)]
    pub chrome: ChromeConfig,

    /// User-visible strings.
    #[serde(default)]
    pub messages: Messages,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Location of the article index document, relative to the page.
    #[serde(default = "default_data_url")]
    pub data_url: String,

    /// Number of cards per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Console log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Theme preference configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Preference store key holding `"light"` or `"dark"`.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

/// Optional page chrome controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromeConfig {
    /// Render the publish-date stamp.
    #[serde(default = "default_true")]
    pub publish_date: bool,

    /// Render the theme toggle button.
    #[serde(default = "default_true")]
    pub theme_toggle: bool,

    /// Render the share button.
    #[serde(default = "default_true")]
    pub share: bool,
}

/// Fixed user-visible strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// List text when no article matches.
    pub no_results: String,
    /// List text when the article index cannot be loaded.
    pub load_failed: String,
    /// List text while the article index is loading.
    pub loading: String,
    /// Card link label.
    pub read_more: String,
    /// Label of the tag bar's clear button.
    pub all_tags: String,
    /// Search box placeholder.
    pub search_placeholder: String,
    /// Text before the publish-date stamp.
    pub publish_date_prefix: String,
    /// Theme toggle button label.
    pub theme_toggle: String,
    /// Share button label.
    pub share: String,
    /// Alert shown after the URL is copied.
    pub share_copied: String,
    /// Prompt message for manual copying.
    pub share_prompt: String,
}

// Default value functions
fn default_title() -> String {
    "記事一覧".to_string()
}

fn default_data_url() -> String {
    "data/articles.json".to_string()
}

fn default_page_size() -> usize {
    6
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_storage_key() -> String {
    "site-theme".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            data_url: default_data_url(),
            page_size: default_page_size(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            publish_date: true,
            theme_toggle: true,
            share: true,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_results: "該当する記事はありません。".to_string(),
            load_failed: "記事データの読み込みに失敗しました。".to_string(),
            loading: "読み込み中…".to_string(),
            read_more: "続きを読む".to_string(),
            all_tags: "すべて".to_string(),
            search_placeholder: "記事を検索".to_string(),
            publish_date_prefix: "発行日: ".to_string(),
            theme_toggle: "テーマ切替".to_string(),
            share: "共有".to_string(),
            share_copied: "ページURLをコピーしました".to_string(),
            share_prompt: "このページのURLをコピーしてください".to_string(),
        }
    }
}

impl SiteConfig {
    /// Console log level, falling back to `Info` on unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

impl Config {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)
            .map_err(|e| CoreError::config_with_source("Failed to parse site config", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.page_size == 0 {
            return Err(CoreError::config("site.page_size must be at least 1"));
        }

        if self.site.data_url.trim().is_empty() {
            return Err(CoreError::config("site.data_url cannot be empty"));
        }

        if self.theme.storage_key.is_empty() {
            return Err(CoreError::config("theme.storage_key cannot be empty"));
        }

        if self.site.log_level.parse::<log::Level>().is_err() {
            log::warn!(
                "unknown site.log_level {:?}, using info",
                self.site.log_level
            );
        }

        Ok(())
    }
}
