//! Interception result decoding.
//!
//! The in-page critical section reports one JSON payload per activation:
//! either the captured PR URL or a failure code, plus the branch label read
//! at click time. Payloads are read fresh every activation and never cached.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use serde::Deserialize;

use crate::browser::{self, js};
use crate::error::ActivationError;

/// Failure code emitted when no reveal-PR control matched any selector.
pub const ERROR_CONTROL_NOT_FOUND: &str = "control-not-found";

/// Failure code emitted when `window.open` never received a usable URL.
pub const ERROR_URL_NOT_CAPTURED: &str = "url-not-captured";

/// One activation's payload as produced by the injected page script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivationPayload {
    /// Captured PR URL, when interception succeeded.
    #[serde(default)]
    pub url: Option<String>,
    /// Failure code, when it did not.
    #[serde(default)]
    pub error: Option<String>,
    /// Branch label read from the page, if present.
    #[serde(default)]
    pub branch: Option<String>,
}

impl ActivationPayload {
    /// Decodes a payload from the JSON value an evaluation returned.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(value.clone()).context("malformed activation payload")
    }

    /// Decodes a payload from a binding call's string argument.
    pub fn from_binding_payload(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).context("malformed activation payload")
    }

    /// Resolves the payload into the captured URL, or the activation error
    /// the user should see.
    pub fn captured_url(&self) -> Result<String, ActivationError> {
        if let Some(url) = &self.url {
            if !url.is_empty() {
                return Ok(url.clone());
            }
        }
        match self.error.as_deref() {
            Some(ERROR_CONTROL_NOT_FOUND) => Err(ActivationError::ControlNotFound),
            _ => Err(ActivationError::UrlNotCaptured),
        }
    }
}

/// Runs one interception in the page without an injected control
/// (one-shot mode). The critical section is evaluated synchronously
/// end-to-end inside the page.
pub async fn run_capture(page: &Page) -> Result<ActivationPayload> {
    let value = browser::evaluate_json(page, js::activation_payload_script()).await?;
    ActivationPayload::from_json(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_captured_url() {
        let payload = ActivationPayload::from_binding_payload(
            r#"{"url":"https://github.com/org/repo/pull/42","branch":"dev"}"#,
        )
        .unwrap();
        assert_eq!(
            payload.captured_url().unwrap(),
            "https://github.com/org/repo/pull/42"
        );
        assert_eq!(payload.branch.as_deref(), Some("dev"));
    }

    #[test]
    fn decodes_control_not_found() {
        let payload =
            ActivationPayload::from_binding_payload(r#"{"error":"control-not-found","branch":null}"#)
                .unwrap();
        assert!(matches!(
            payload.captured_url(),
            Err(ActivationError::ControlNotFound)
        ));
    }

    #[test]
    fn decodes_url_not_captured() {
        let payload =
            ActivationPayload::from_binding_payload(r#"{"error":"url-not-captured"}"#).unwrap();
        assert!(matches!(
            payload.captured_url(),
            Err(ActivationError::UrlNotCaptured)
        ));
    }

    #[test]
    fn empty_url_counts_as_not_captured() {
        let payload = ActivationPayload::from_binding_payload(r#"{"url":""}"#).unwrap();
        assert!(matches!(
            payload.captured_url(),
            Err(ActivationError::UrlNotCaptured)
        ));
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(ActivationPayload::from_binding_payload("not json").is_err());
    }
}
