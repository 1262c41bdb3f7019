//! `jpd fetch <pr-url>` – browserless download for a known PR URL.

use anyhow::Result;
use jpd_core::activation::{self, Outcome};
use jpd_core::config::JpdConfig;
use std::path::PathBuf;

pub async fn run_fetch(
    cfg: &JpdConfig,
    pr_url: &str,
    name: Option<&str>,
    download_dir: Option<PathBuf>,
) -> Result<()> {
    let download_dir = download_dir.unwrap_or_else(|| cfg.resolve_download_dir());

    match activation::download_patch(pr_url, name, None, &download_dir).await? {
        Outcome::Saved(path) => {
            println!("Saved {}", path.display());
            Ok(())
        }
        Outcome::Failed(err) => Err(anyhow::Error::new(err)),
    }
}
