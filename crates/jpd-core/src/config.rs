use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Session pages are recognized by this URL prefix.
pub const SESSION_URL_PREFIX: &str = "https://jules.google.com/session/";

/// Browser connection settings (`[browser]` section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// DevTools websocket URL of an already-running browser (started with
    /// `--remote-debugging-port`). When unset, jpd launches its own.
    #[serde(default)]
    pub ws_url: Option<String>,
    /// Path to the Chromium/Chrome executable used when launching.
    /// When unset, chromiumoxide autodetects an installed browser.
    #[serde(default)]
    pub executable: Option<PathBuf>,
    /// Launch with a visible window instead of headless.
    #[serde(default)]
    pub headed: bool,
}

/// Global configuration loaded from `~/.config/jpd/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JpdConfig {
    /// Where downloaded patches are written. When unset, the user's
    /// download directory, falling back to the current directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// URL prefix identifying a work session page.
    #[serde(default = "default_session_url_prefix")]
    pub session_url_prefix: String,
    /// Browser connection settings.
    #[serde(default)]
    pub browser: BrowserSettings,
}

fn default_session_url_prefix() -> String {
    SESSION_URL_PREFIX.to_string()
}

impl Default for JpdConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            session_url_prefix: default_session_url_prefix(),
            browser: BrowserSettings::default(),
        }
    }
}

impl JpdConfig {
    /// Resolves the effective download directory.
    pub fn resolve_download_dir(&self) -> PathBuf {
        if let Some(dir) = &self.download_dir {
            return dir.clone();
        }
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jpd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JpdConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = JpdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: JpdConfig = toml::from_str(&data)?;
    Ok(cfg)
}
