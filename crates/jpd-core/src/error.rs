//! Activation error taxonomy for user-visible failure reporting.

use std::fmt;

/// Error produced by one trigger activation (capture, fetch, or save).
///
/// Each variant maps to one distinct user-visible alert; `Display` is the
/// alert text. None of these are retried; every failure requires a fresh
/// activation.
#[derive(Debug)]
pub enum ActivationError {
    /// No reveal-PR control matched any candidate selector.
    ControlNotFound,
    /// A control was activated but `window.open` never received a usable URL.
    UrlNotCaptured,
    /// The patch request completed with a non-200 status.
    Http { status: u32, status_line: String },
    /// The patch request could not complete at all.
    Network(curl::Error),
    /// The patch was fetched but could not be written to disk.
    Storage(std::io::Error),
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::ControlNotFound => {
                write!(f, "Could not find the PR URL or the View PR button on this page.")
            }
            ActivationError::UrlNotCaptured => {
                write!(f, "Could not detect PR URL. Is the View PR button working?")
            }
            ActivationError::Http { status, status_line } => {
                if status_line.is_empty() {
                    write!(f, "Failed to download patch: HTTP {}", status)
                } else {
                    write!(f, "Failed to download patch: {}", status_line)
                }
            }
            ActivationError::Network(_) => {
                write!(f, "Network error while downloading patch.")
            }
            ActivationError::Storage(e) => {
                write!(f, "Failed to save patch: {}", e)
            }
        }
    }
}

impl std::error::Error for ActivationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActivationError::Network(e) => Some(e),
            ActivationError::Storage(e) => Some(e),
            ActivationError::ControlNotFound
            | ActivationError::UrlNotCaptured
            | ActivationError::Http { .. } => None,
        }
    }
}
