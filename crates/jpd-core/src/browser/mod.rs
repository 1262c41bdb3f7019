//! Chrome DevTools Protocol session against the host browser.
//!
//! Attaches to a running browser over its DevTools websocket or launches a
//! new one, pumps CDP events on a dedicated task, and evaluates in-page
//! JavaScript.

pub mod js;
pub mod watch;

use anyhow::{bail, Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::js_protocol::runtime::EvaluateParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::config::BrowserSettings;

/// A connected browser plus its CDP event pump.
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    launched: bool,
}

impl BrowserSession {
    /// Attaches to a running browser over its DevTools websocket, or
    /// launches a new instance when no `ws_url` is configured.
    pub async fn open(settings: &BrowserSettings) -> Result<Self> {
        let launched = settings.ws_url.is_none();
        let (browser, mut handler) = match &settings.ws_url {
            Some(ws) => Browser::connect(ws.clone())
                .await
                .with_context(|| format!("connecting to browser at {ws}"))?,
            None => {
                let mut builder = BrowserConfig::builder();
                if let Some(exe) = &settings.executable {
                    builder = builder.chrome_executable(exe);
                }
                if settings.headed {
                    builder = builder.with_head();
                }
                let config = builder
                    .build()
                    .map_err(|e| anyhow::anyhow!("building browser config: {e}"))?;
                Browser::launch(config).await.context("launching browser")?
            }
        };

        // Pump CDP messages for the life of the session.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
            launched,
        })
    }

    /// Finds an already-open page whose URL starts with `prefix`.
    pub async fn find_session_page(&self, prefix: &str) -> Result<Page> {
        for page in self.browser.pages().await.context("listing pages")? {
            if let Ok(Some(url)) = page.url().await {
                if url.starts_with(prefix) {
                    tracing::info!("found session page {}", url);
                    return Ok(page);
                }
            }
        }
        bail!("no open page matches {prefix}");
    }

    /// Opens `url` in a new tab and waits for the initial navigation.
    pub async fn open_session_page(&self, url: &str) -> Result<Page> {
        url::Url::parse(url).with_context(|| format!("invalid session URL: {url}"))?;
        let page = self
            .browser
            .new_page(url)
            .await
            .with_context(|| format!("opening {url}"))?;
        page.wait_for_navigation()
            .await
            .context("waiting for session page navigation")?;
        Ok(page)
    }

    /// Closes the browser (only when launched by us) and stops the pump.
    pub async fn close(mut self) {
        if self.launched {
            if let Err(e) = self.browser.close().await {
                tracing::warn!("browser close failed: {}", e);
            }
            if let Err(e) = self.browser.wait().await {
                tracing::warn!("browser wait failed: {}", e);
            }
        }
        self.handler_task.abort();
    }
}

/// Evaluates `expression` in the page and returns its JSON value (null when
/// the result carries no value). Promises are awaited.
pub async fn evaluate_json(page: &Page, expression: impl Into<String>) -> Result<serde_json::Value> {
    let params = EvaluateParams::builder()
        .expression(expression)
        .await_promise(true)
        .return_by_value(true)
        .build()
        .map_err(|e| anyhow::anyhow!("building evaluate params: {e}"))?;
    let output = page.evaluate(params).await.context("evaluate failed")?;
    Ok(output.value().cloned().unwrap_or(serde_json::Value::Null))
}
