//! Patch persistence: temp-file write then rename into place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes `body` under `dir` as `filename` via `<filename>.part` and a
/// rename. Returns the final path.
///
/// The filename is deterministic per session/branch, so an existing file
/// with the same name is replaced.
pub fn save_artifact(dir: &Path, filename: &str, body: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let final_path = dir.join(filename);
    let temp_path = dir.join(format!("{filename}.part"));

    fs::write(&temp_path, body)?;
    fs::rename(&temp_path, &final_path)?;

    tracing::info!("saved {} bytes to {}", body.len(), final_path.display());
    Ok(final_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_renames() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_artifact(dir.path(), "42-dev.patch", b"diff --git a b").unwrap();
        assert_eq!(path, dir.path().join("42-dev.patch"));
        assert_eq!(fs::read(&path).unwrap(), b"diff --git a b");
        assert!(!dir.path().join("42-dev.patch.part").exists());
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        save_artifact(dir.path(), "x.patch", b"old").unwrap();
        let path = save_artifact(dir.path(), "x.patch", b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let path = save_artifact(&nested, "x.patch", b"body").unwrap();
        assert!(path.exists());
    }
}
