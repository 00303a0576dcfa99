//! File-based Snapshot Store Adapter
//!
//! Writes a whole-account snapshot to a single file. The format follows the
//! extension: `.json` is pretty-printed JSON, `.yaml`/`.yml` is YAML.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::ports::{DataSnapshot, SnapshotStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, StorageError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("yaml") | Some("yml") => Ok(SnapshotFormat::Yaml),
            _ => Err(StorageError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn encode(&self, snapshot: &DataSnapshot) -> Result<String, StorageError> {
        match self {
            SnapshotFormat::Json => serde_json::to_string_pretty(snapshot)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            SnapshotFormat::Yaml => serde_yaml::to_string(snapshot)
                .map_err(|e| StorageError::Serialization(e.to_string())),
        }
    }

    fn decode(&self, text: &str) -> Result<DataSnapshot, StorageError> {
        match self {
            SnapshotFormat::Json => {
                serde_json::from_str(text).map_err(|e| StorageError::Deserialization(e.to_string()))
            }
            SnapshotFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| StorageError::Deserialization(e.to_string()))
            }
        }
    }
}

/// Snapshot storage backed by one file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
    format: SnapshotFormat,
}

impl FileSnapshotStore {
    /// Creates a store for `path`.
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` if the extension is not json, yaml or yml.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let format = SnapshotFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> SnapshotFormat {
        self.format
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn save(&self, snapshot: &DataSnapshot) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let text = self.format.encode(snapshot)?;
        fs::write(&self.path, text)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        info!(
            path = %self.path.display(),
            records = snapshot.record_count(),
            "Snapshot written"
        );
        Ok(())
    }

    async fn load(&self) -> Result<DataSnapshot, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::NotFound(self.path.display().to_string()));
        }

        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        let snapshot = self.format.decode(&text)?;

        info!(
            path = %self.path.display(),
            version = %snapshot.version,
            records = snapshot.record_count(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    async fn exists(&self) -> Result<bool, StorageError> {
        Ok(self.path.exists())
    }
}
