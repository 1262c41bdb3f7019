//! Tests for the browser-driving commands: run and grab.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_run_defaults() {
    match parse(&["jpd", "run"]) {
        CliCommand::Run {
            ws_url,
            session_url,
            headed,
            download_dir,
        } => {
            assert!(ws_url.is_none());
            assert!(session_url.is_none());
            assert!(!headed);
            assert!(download_dir.is_none());
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_with_ws_url() {
    match parse(&[
        "jpd",
        "run",
        "--ws-url",
        "ws://127.0.0.1:9222/devtools/browser/abc",
    ]) {
        CliCommand::Run { ws_url, .. } => {
            assert_eq!(
                ws_url.as_deref(),
                Some("ws://127.0.0.1:9222/devtools/browser/abc")
            );
        }
        _ => panic!("expected Run with --ws-url"),
    }
}

#[test]
fn cli_parse_run_headed_with_session_url() {
    match parse(&[
        "jpd",
        "run",
        "--headed",
        "--session-url",
        "https://jules.google.com/session/abc123",
    ]) {
        CliCommand::Run {
            headed,
            session_url,
            ..
        } => {
            assert!(headed);
            assert_eq!(
                session_url.as_deref(),
                Some("https://jules.google.com/session/abc123")
            );
        }
        _ => panic!("expected Run with --headed --session-url"),
    }
}

#[test]
fn cli_parse_grab() {
    match parse(&["jpd", "grab", "https://jules.google.com/session/abc123"]) {
        CliCommand::Grab {
            session_url,
            headed,
            download_dir,
        } => {
            assert_eq!(session_url, "https://jules.google.com/session/abc123");
            assert!(!headed);
            assert!(download_dir.is_none());
        }
        _ => panic!("expected Grab"),
    }
}

#[test]
fn cli_parse_grab_download_dir() {
    match parse(&[
        "jpd",
        "grab",
        "https://jules.google.com/session/abc123",
        "--download-dir",
        "/tmp/patches",
    ]) {
        CliCommand::Grab { download_dir, .. } => {
            assert_eq!(download_dir, Some(PathBuf::from("/tmp/patches")));
        }
        _ => panic!("expected Grab with --download-dir"),
    }
}

#[test]
fn cli_parse_grab_requires_url() {
    assert!(Cli::try_parse_from(["jpd", "grab"]).is_err());
}
