//! Shiori preview server
//!
//! Serves the built site root (the `index.html` page, the compiled
//! `/pkg` bundle and `data/articles.json`) over HTTP for local previews.
//! Unknown paths fall back to `index.html`.

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use axum::Router;
use color_eyre::eyre::{Result, WrapErr};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Environment variable prefix, e.g. `SHIORI__SERVER__ADDR`.
pub const ENV_PREFIX: &str = "SHIORI";

/// `[server]` table of `shiori.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: String,
    /// Directory holding the built site.
    pub site_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            site_root: PathBuf::from("target/site"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Settings {
    #[serde(default)]
    server: ServerConfig,
}

impl ServerConfig {
    /// Load the `[server]` table from an optional config file layered with
    /// `SHIORI__SERVER__*` environment variables.
    ///
    /// A missing file is not an error; the defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                tracing::info!("Config file {} not found, using defaults", path.display());
            }
            builder = builder.add_source(File::from(path).required(false));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .wrap_err("Failed to read server config")?
            .try_deserialize::<Settings>()
            .wrap_err("Invalid [server] config")?;

        Ok(settings.server)
    }

    /// Parsed listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.addr
            .parse()
            .wrap_err_with(|| format!("Invalid listen address: {}", self.addr))
    }
}

/// Create the preview router for a built site root.
pub fn create_router(site_root: &Path) -> Router {
    let index = ServeFile::new(site_root.join("index.html"));

    Router::new()
        .fallback_service(ServeDir::new(site_root).fallback(index))
        .layer(TraceLayer::new_for_http())
}

/// Initialize the tracing subscriber.
///
/// Verbosity levels:
/// - 0: WARN
/// - 1: INFO
/// - 2: DEBUG
/// - 3+: TRACE
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<html>shiori</html>").unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/articles.json"), "[]").unwrap();
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn test_load_server_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shiori.toml");
        fs::write(
            &path,
            r#"
[site]
title = "ignored here"

[server]
addr = "0.0.0.0:8080"
site_root = "dist"
"#,
        )
        .unwrap();

        let config = ServerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.site_root, PathBuf::from("dist"));
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_partial_server_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shiori.toml");
        fs::write(&path, "[server]\nsite_root = \"out\"\n").unwrap();

        let config = ServerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000");
        assert_eq!(config.site_root, PathBuf::from("out"));
    }

    #[test]
    fn test_invalid_addr() {
        let config = ServerConfig {
            addr: "not an address".to_string(),
            ..Default::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[tokio::test]
    async fn test_serves_article_index() {
        let dir = site();
        let (status, body) = get(create_router(dir.path()), "/data/articles.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = site();
        let (status, body) = get(create_router(dir.path()), "/no/such/page").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("shiori"));
    }
}
