//! Temporary payload files.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// RAII guard for a JSON payload written to a fresh temporary directory.
///
/// The directory (and the file) is removed on Drop.
pub struct TempPayload {
    dir: TempDir,
    path: PathBuf,
}

impl TempPayload {
    /// Write `value` as pretty JSON to `<tmp>/<file_name>`.
    pub fn write(file_name: &str, value: &Value) -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp dir")?;
        let path = dir.path().join(file_name);
        let text = serde_json::to_string_pretty(value)?;
        fs::write(&path, text)
            .with_context(|| format!("Failed to write payload: {}", path.display()))?;
        debug!("Wrote test payload: {}", path.display());
        Ok(Self { dir, path })
    }

    /// Write raw text, e.g. a malformed document.
    pub fn write_raw(file_name: &str, text: &str) -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp dir")?;
        let path = dir.path().join(file_name);
        fs::write(&path, text)
            .with_context(|| format!("Failed to write payload: {}", path.display()))?;
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the payload; usable as a scratch home directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
