//! Trigger control injection and the activation event stream.

use anyhow::{bail, Context, Result};
use chromiumoxide::cdp::js_protocol::runtime::{AddBindingParams, EventBindingCalled};
use chromiumoxide::Page;
use futures::{Stream, StreamExt};
use std::sync::Arc;

use crate::browser::{self, js};
use crate::capture::ActivationPayload;

/// Registers the activation binding and injects the trigger control.
///
/// Run the readiness watcher first; the container must exist. Injection is
/// idempotent: the marker class makes repeated calls no-ops, so repeated
/// readiness notifications cannot produce duplicate controls.
pub async fn inject_trigger(page: &Page) -> Result<()> {
    let binding = AddBindingParams::builder()
        .name(js::ACTIVATION_BINDING)
        .build()
        .map_err(|e| anyhow::anyhow!("building binding params: {e}"))?;
    page.execute(binding)
        .await
        .context("registering activation binding")?;

    let injected = browser::evaluate_json(page, js::inject_trigger_script()).await?;
    if injected != serde_json::Value::Bool(true) {
        bail!("trigger container disappeared before injection");
    }
    tracing::info!("trigger control injected");
    Ok(())
}

/// Stream of activation payloads, one per trigger press. Malformed payloads
/// are logged and dropped.
pub async fn activation_events(
    page: &Page,
) -> Result<impl Stream<Item = ActivationPayload> + Unpin> {
    let events = page
        .event_listener::<EventBindingCalled>()
        .await
        .context("subscribing to binding events")?;
    Ok(Box::pin(events.filter_map(
        |event: Arc<EventBindingCalled>| async move {
            if event.name != js::ACTIVATION_BINDING {
                return None;
            }
            match ActivationPayload::from_binding_payload(&event.payload) {
                Ok(payload) => Some(payload),
                Err(e) => {
                    tracing::warn!("dropping malformed activation payload: {:#}", e);
                    None
                }
            }
        },
    )))
}

/// Returns the trigger to idle. Safe when no trigger exists (one-shot mode).
pub async fn reset_trigger(page: &Page) -> Result<()> {
    browser::evaluate_json(page, js::reset_trigger_script()).await?;
    Ok(())
}

/// Raises a blocking alert in the page. Resolves once the user dismisses it.
pub async fn alert(page: &Page, message: &str) -> Result<()> {
    browser::evaluate_json(page, js::alert_script(message)).await?;
    Ok(())
}
