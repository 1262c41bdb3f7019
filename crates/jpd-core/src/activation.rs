//! One trigger activation: capture result -> normalize -> fetch -> save,
//! with a single exit transition returning the control to idle.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use futures::StreamExt;
use std::path::{Path, PathBuf};

use crate::capture::ActivationPayload;
use crate::error::ActivationError;
use crate::fetch;
use crate::inject;
use crate::storage;
use crate::url_model;

/// Terminal state of one activation.
#[derive(Debug)]
pub enum Outcome {
    /// The patch was fetched and written to this path.
    Saved(PathBuf),
    /// The activation failed; the error is what the user should see.
    Failed(ActivationError),
}

/// Runs the pipeline tail for one activation payload: resolve the captured
/// URL, then download the patch it points at.
///
/// Activation-level failures come back as `Outcome::Failed`; only
/// infrastructure faults (a panicked fetch task) surface as `Err`.
pub async fn execute(
    payload: ActivationPayload,
    explicit_name: Option<&str>,
    download_dir: &Path,
) -> Result<Outcome> {
    let url = match payload.captured_url() {
        Ok(url) => url,
        Err(e) => return Ok(Outcome::Failed(e)),
    };
    tracing::info!("captured PR URL {}", url);
    download_patch(&url, explicit_name, payload.branch.as_deref(), download_dir).await
}

/// Fetches the patch behind `resource_url` and writes it to `download_dir`.
///
/// The URL is normalized first (query stripped, `.patch` suffix ensured)
/// and the filename derived from it plus the branch label. The GET runs on
/// a blocking thread; capture has always fully resolved by this point, so
/// interception and network phases never overlap.
pub async fn download_patch(
    resource_url: &str,
    explicit_name: Option<&str>,
    branch_label: Option<&str>,
    download_dir: &Path,
) -> Result<Outcome> {
    let patch_url = url_model::normalize_patch_url(resource_url);
    let filename = url_model::derive_filename(&patch_url, explicit_name, branch_label);
    tracing::info!("fetching {} as {}", patch_url, filename);

    let fetched = tokio::task::spawn_blocking(move || fetch::fetch_artifact(&patch_url))
        .await
        .context("fetch task panicked")?;
    let artifact = match fetched {
        Ok(artifact) => artifact,
        Err(e) => return Ok(Outcome::Failed(e)),
    };

    match storage::save_artifact(download_dir, &filename, &artifact.body) {
        Ok(path) => Ok(Outcome::Saved(path)),
        Err(e) => Ok(Outcome::Failed(ActivationError::Storage(e))),
    }
}

/// Reports `outcome` in the page and unconditionally returns the trigger to
/// idle: the single exit transition shared by the success and all error
/// paths.
pub async fn report(page: &Page, outcome: &Outcome) {
    match outcome {
        Outcome::Saved(path) => {
            tracing::info!("patch saved to {}", path.display());
        }
        Outcome::Failed(err) => {
            tracing::error!("activation failed: {}", err);
            if let Err(e) = inject::alert(page, &err.to_string()).await {
                tracing::warn!("failed to raise alert: {:#}", e);
            }
        }
    }
    if let Err(e) = inject::reset_trigger(page).await {
        tracing::warn!("failed to reset trigger control: {:#}", e);
    }
}

/// Serves trigger activations until the event stream ends.
///
/// Payloads are handled serially: each activation's capture has fully
/// resolved in-page before its payload arrives, and no fetch starts while
/// a previous one is being reported.
pub async fn serve(page: &Page, download_dir: &Path) -> Result<()> {
    let mut events = inject::activation_events(page).await?;
    while let Some(payload) = events.next().await {
        tracing::debug!("trigger activated: {:?}", payload);
        let outcome = execute(payload, None, download_dir).await?;
        report(page, &outcome).await;
    }
    Ok(())
}
