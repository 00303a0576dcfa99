//! Storage configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Default snapshot file for the CLI
    pub snapshot_path: Option<String>,

    /// Skip insights that repeat an existing one for the same user
    #[serde(default)]
    pub deduplicate_insights: bool,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.snapshot_path {
            let supported = Path::new(path)
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| matches!(e.to_ascii_lowercase().as_str(), "json" | "yaml" | "yml"))
                .unwrap_or(false);
            if !supported {
                return Err(ValidationError::UnsupportedSnapshotPath(path.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert!(config.snapshot_path.is_none());
        assert!(!config.deduplicate_insights);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_snapshot_extension_checked() {
        let config = StorageConfig {
            snapshot_path: Some("data/export.csv".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StorageConfig {
            snapshot_path: Some("data/export.yml".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
