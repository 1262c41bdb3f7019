//! Change-driven, one-shot readiness watcher for host page elements.

use anyhow::{Context, Result};
use chromiumoxide::Page;

use super::{evaluate_json, js};

/// Resolves once the first element matching `selector` exists in the page.
///
/// An immediate hit resolves without registering anything; otherwise the
/// in-page MutationObserver promise settles on the first matching mutation
/// batch and the observer is disconnected. Purely change-driven, no
/// timeout: if the element never appears this future never resolves.
pub async fn await_element(page: &Page, selector: &str) -> Result<()> {
    evaluate_json(page, js::await_element_script(selector))
        .await
        .with_context(|| format!("waiting for element {selector:?}"))?;
    tracing::debug!("element {:?} is present", selector);
    Ok(())
}
