//! Cross-origin patch fetch over libcurl.
//!
//! Runs outside the page, so the destination host's CORS policy does not
//! apply. One GET per activation; no retries, no total timeout, no abort.

use std::str;
use std::time::Duration;

use crate::error::ActivationError;

/// Fetched patch content plus the response status line for diagnostics.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Opaque patch text as delivered by the server.
    pub body: Vec<u8>,
    /// Final response status line (after redirects), e.g. `HTTP/1.1 200 OK`.
    pub status_line: String,
}

/// Performs the GET for a normalized patch URL.
///
/// Follows redirects (GitHub serves patch files via codeload). Returns
/// `Http` for any non-200 status and `Network` when the transfer fails
/// outright. Runs in the current thread; call from `spawn_blocking` in
/// async code.
pub fn fetch_artifact(url: &str) -> Result<Artifact, ActivationError> {
    let mut body: Vec<u8> = Vec::new();
    let mut status_line = String::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(ActivationError::Network)?;
    easy.follow_location(true).map_err(ActivationError::Network)?;
    easy.max_redirections(10).map_err(ActivationError::Network)?;
    easy.connect_timeout(Duration::from_secs(30))
        .map_err(ActivationError::Network)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    let s = s.trim_end();
                    // Redirects produce several status lines; keep the last.
                    if s.starts_with("HTTP/") {
                        status_line = s.to_string();
                    }
                }
                true
            })
            .map_err(ActivationError::Network)?;
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(ActivationError::Network)?;
        transfer.perform().map_err(ActivationError::Network)?;
    }

    let status = easy.response_code().map_err(ActivationError::Network)?;
    tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
    if status != 200 {
        return Err(ActivationError::Http { status, status_line });
    }

    Ok(Artifact { body, status_line })
}
