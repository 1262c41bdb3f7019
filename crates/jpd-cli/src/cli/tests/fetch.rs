//! Tests for the browserless fetch command.

use super::parse;
use crate::cli::CliCommand;
use std::path::PathBuf;

#[test]
fn cli_parse_fetch() {
    match parse(&["jpd", "fetch", "https://github.com/org/repo/pull/42"]) {
        CliCommand::Fetch {
            pr_url,
            name,
            download_dir,
        } => {
            assert_eq!(pr_url, "https://github.com/org/repo/pull/42");
            assert!(name.is_none());
            assert!(download_dir.is_none());
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_with_name() {
    match parse(&[
        "jpd",
        "fetch",
        "https://github.com/org/repo/pull/42",
        "--name",
        "release.patch",
    ]) {
        CliCommand::Fetch { name, .. } => {
            assert_eq!(name.as_deref(), Some("release.patch"));
        }
        _ => panic!("expected Fetch with --name"),
    }
}

#[test]
fn cli_parse_fetch_with_download_dir() {
    match parse(&[
        "jpd",
        "fetch",
        "https://github.com/org/repo/pull/42",
        "--download-dir",
        "/tmp",
    ]) {
        CliCommand::Fetch { download_dir, .. } => {
            assert_eq!(download_dir, Some(PathBuf::from("/tmp")));
        }
        _ => panic!("expected Fetch with --download-dir"),
    }
}
