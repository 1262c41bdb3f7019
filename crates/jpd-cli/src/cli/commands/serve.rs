//! `jpd run` – companion mode: inject the trigger and serve activations.

use anyhow::Result;
use jpd_core::activation;
use jpd_core::browser::{js, watch, BrowserSession};
use jpd_core::config::JpdConfig;
use jpd_core::inject;
use std::path::PathBuf;

pub async fn run_serve(
    cfg: &JpdConfig,
    ws_url: Option<String>,
    session_url: Option<&str>,
    headed: bool,
    download_dir: Option<PathBuf>,
) -> Result<()> {
    let mut settings = cfg.browser.clone();
    if ws_url.is_some() {
        settings.ws_url = ws_url;
    }
    if headed {
        settings.headed = true;
    }
    let download_dir = download_dir.unwrap_or_else(|| cfg.resolve_download_dir());

    if let Some(url) = session_url {
        if !url.starts_with(&cfg.session_url_prefix) {
            tracing::warn!("{} does not look like a session page", url);
        }
    }

    let session = BrowserSession::open(&settings).await?;
    let page = match session_url {
        Some(url) => session.open_session_page(url).await?,
        None => session.find_session_page(&cfg.session_url_prefix).await?,
    };

    // One-shot readiness, then idempotent injection.
    watch::await_element(&page, js::CONTAINER_SELECTOR).await?;
    inject::inject_trigger(&page).await?;
    println!("Trigger injected; serving downloads (Ctrl-C to stop).");

    tokio::select! {
        result = activation::serve(&page, &download_dir) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted, shutting down");
        }
    }

    session.close().await;
    Ok(())
}
