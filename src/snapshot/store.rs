//! JSON snapshot file holding the last submitted settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::agent::AgentConfig;

/// Errors raised while reading or writing the snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to access snapshot {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single snapshot file, overwritten on every save.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `config` and replace the snapshot contents.
    ///
    /// Missing parent directories are created. Returns the bytes written.
    pub fn save(&self, config: &AgentConfig) -> Result<Vec<u8>, SnapshotError> {
        let bytes = to_pretty_json(config)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        fs::write(&self.path, &bytes).map_err(|source| self.io_error(source))?;

        debug!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(bytes)
    }

    /// Read the snapshot back.
    pub fn load(&self) -> Result<AgentConfig, SnapshotError> {
        let contents = fs::read(&self.path).map_err(|source| self.io_error(source))?;
        Ok(serde_json::from_slice(&contents)?)
    }

    fn io_error(&self, source: io::Error) -> SnapshotError {
        SnapshotError::Io { path: self.path.clone(), source }
    }
}

/// Pretty-print with a 4-space indent.
fn to_pretty_json(config: &AgentConfig) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut ser)?;
    Ok(buf)
}
