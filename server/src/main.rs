//! Shiori preview server binary.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use server::{ServerConfig, create_router, init_tracing};
use tokio::net::TcpListener;

/// Serve the built Shiori site locally.
#[derive(Parser)]
#[command(name = "shiori-server", version, about = "Static preview server for Shiori")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "shiori.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Listen address, overrides `[server] addr`
    #[arg(long)]
    addr: Option<String>,

    /// Built site directory, overrides `[server] site_root`
    #[arg(long)]
    site_root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ServerConfig::load(Some(&cli.config))?;
    if let Some(addr) = cli.addr {
        config.addr = addr;
    }
    if let Some(site_root) = cli.site_root {
        config.site_root = site_root;
    }

    if !config.site_root.join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html; run `cargo leptos build` first",
            config.site_root.display()
        );
    }

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("serving {} at http://{addr}", config.site_root.display());
    println!("  Preview server running at http://{addr}");

    axum::serve(listener, create_router(&config.site_root))
        .await
        .wrap_err("Server error")?;

    Ok(())
}
