//! Filesystem sink: one file per payload under a destination directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{Sink, WriteError};

/// Writes payloads as files under `dir`. Cheap to share across tasks.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Creates the destination directory (and parents) if needed.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create destination {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Sink for DirSink {
    /// Writes `bytes` at `dir/name`, replacing any existing file of that
    /// name (colliding names: last writer wins).
    fn write(&self, name: &str, bytes: &[u8]) -> Result<(), WriteError> {
        fs::write(self.dir.join(name), bytes).map_err(|source| WriteError {
            name: name.to_string(),
            source,
        })
    }
}
