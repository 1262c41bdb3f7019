//! CLI for the jpd patch downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jpd_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_grab, run_serve};

/// Top-level CLI for the jpd patch downloader.
#[derive(Debug, Parser)]
#[command(name = "jpd")]
#[command(about = "jpd: patch downloader for Jules work sessions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Attach to the session page, inject the trigger control, and serve
    /// activations until interrupted.
    Run {
        /// DevTools websocket URL of a running browser (overrides config).
        #[arg(long, value_name = "URL")]
        ws_url: Option<String>,
        /// Open this session URL instead of attaching to an existing tab.
        #[arg(long, value_name = "URL")]
        session_url: Option<String>,
        /// Launch the browser with a visible window.
        #[arg(long)]
        headed: bool,
        /// Write patches here instead of the configured download directory.
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },

    /// Open a session page, run one activation without injecting the
    /// control, and exit.
    Grab {
        /// Session page URL.
        session_url: String,
        /// Launch the browser with a visible window.
        #[arg(long)]
        headed: bool,
        /// Write the patch here instead of the configured download directory.
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },

    /// Download the patch for an already-known PR URL (no browser).
    Fetch {
        /// Pull request URL.
        pr_url: String,
        /// Save under this exact name instead of the derived one.
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
        /// Write the patch here instead of the configured download directory.
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                ws_url,
                session_url,
                headed,
                download_dir,
            } => run_serve(&cfg, ws_url, session_url.as_deref(), headed, download_dir).await?,
            CliCommand::Grab {
                session_url,
                headed,
                download_dir,
            } => run_grab(&cfg, &session_url, headed, download_dir).await?,
            CliCommand::Fetch {
                pr_url,
                name,
                download_dir,
            } => run_fetch(&cfg, &pr_url, name.as_deref(), download_dir).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
