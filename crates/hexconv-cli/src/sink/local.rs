//! Local folder sink
//!
//! Writes each payload verbatim to `<dest>/<name without extension>.<ext>`.

use super::{Sink, SinkTarget};
use crate::batch::DecodedPayload;
use crate::error::{CliError, EntryError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Sink writing decoded files into a destination folder
#[derive(Debug, Clone)]
pub struct LocalSink {
    dest_dir: PathBuf,
    extension: String,
}

impl LocalSink {
    /// Build a sink without touching the file system
    pub fn new(dest_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dest_dir: dest_dir.into(),
            extension: extension.into().trim_start_matches('.').to_string(),
        }
    }

    /// Build a sink, creating the destination folder first
    pub async fn create(dest_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Result<Self> {
        let sink = Self::new(dest_dir, extension);

        fs::create_dir_all(&sink.dest_dir)
            .await
            .map_err(|source| CliError::DestinationSetup {
                path: sink.dest_dir.clone(),
                source,
            })?;

        Ok(sink)
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Destination path for a source file name
    pub fn destination_for(&self, entry_name: &str) -> PathBuf {
        self.dest_dir
            .join(format!("{}.{}", strip_extension(entry_name), self.extension))
    }
}

/// Drop everything from the last `.` on; `.profile` becomes the empty stem.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

#[async_trait]
impl Sink for LocalSink {
    fn kind(&self) -> &'static str {
        "local"
    }

    async fn existing_output(&self, entry_name: &str) -> Option<PathBuf> {
        let path = self.destination_for(entry_name);

        // Anything but a definite "not found" counts as existing.
        match fs::try_exists(&path).await {
            Ok(false) => None,
            Ok(true) | Err(_) => Some(path),
        }
    }

    async fn write(
        &mut self,
        entry_name: &str,
        payload: DecodedPayload,
    ) -> std::result::Result<SinkTarget, EntryError> {
        let path = self.destination_for(entry_name);
        let write_error = |source: std::io::Error| EntryError::WriteDestination {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(write_error)?;
        }

        fs::write(&path, payload.as_bytes())
            .await
            .map_err(write_error)?;

        debug!(entry = entry_name, path = %path.display(), bytes = payload.len(), "Wrote output file");
        Ok(SinkTarget::File(path))
    }
}
