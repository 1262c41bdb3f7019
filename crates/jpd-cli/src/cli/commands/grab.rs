//! `jpd grab <session-url>` – one-shot capture and download.

use anyhow::Result;
use jpd_core::activation::{self, Outcome};
use jpd_core::browser::{js, watch, BrowserSession};
use jpd_core::capture;
use jpd_core::config::JpdConfig;
use std::path::PathBuf;

pub async fn run_grab(
    cfg: &JpdConfig,
    session_url: &str,
    headed: bool,
    download_dir: Option<PathBuf>,
) -> Result<()> {
    let mut settings = cfg.browser.clone();
    if headed {
        settings.headed = true;
    }
    let download_dir = download_dir.unwrap_or_else(|| cfg.resolve_download_dir());

    if !session_url.starts_with(&cfg.session_url_prefix) {
        tracing::warn!("{} does not look like a session page", session_url);
    }

    let session = BrowserSession::open(&settings).await?;
    let page = session.open_session_page(session_url).await?;
    watch::await_element(&page, js::CONTAINER_SELECTOR).await?;

    let payload = capture::run_capture(&page).await?;
    let outcome = activation::execute(payload, None, &download_dir).await?;
    session.close().await;

    match outcome {
        Outcome::Saved(path) => {
            println!("Saved {}", path.display());
            Ok(())
        }
        Outcome::Failed(err) => Err(anyhow::Error::new(err)),
    }
}
