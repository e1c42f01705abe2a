//! JSON fixture files
//!
//! A fixture is a JSON array of records in the same shape the API serves.

use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};
use crate::traits::StoreSource;
use async_trait::async_trait;
use graphnode_core::{Record, Store};

/// Store source backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct FixtureFile {
    path: PathBuf,
}

impl FixtureFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StoreSource for FixtureFile {
    async fn load(&self) -> StorageResult<Store> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;

        let records: Vec<Record> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Serialization {
                path: self.path.clone(),
                source,
            })?;

        let store = Store::new(records)?;
        tracing::info!("Loaded {} nodes from {}", store.len(), self.path.display());
        Ok(store)
    }

    fn describe(&self) -> String {
        format!("fixture {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ONE_NODE: &str = r#"[{
        "node_id": "x1",
        "labels": ["Robot"],
        "properties": {"name": "R2", "active": true},
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "relationship_count": 0,
        "degree": {"incoming": 0, "outgoing": 0, "total": 0}
    }]"#;

    fn write_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_fixture() {
        let file = write_fixture(ONE_NODE);
        let store = FixtureFile::new(file.path()).load().await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].id.as_str(), "x1");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FixtureFile::new(dir.path().join("absent.json"));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_fixture() {
        let file = write_fixture("{ not json");
        let err = FixtureFile::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let twice = format!("[{0}, {0}]", ONE_NODE.trim().trim_start_matches('[').trim_end_matches(']'));
        let file = write_fixture(&twice);
        let err = FixtureFile::new(file.path()).load().await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::InvalidStore(graphnode_core::Error::DuplicateNodeId(_))
        ));
    }

    #[tokio::test]
    async fn test_source_for() {
        let file = write_fixture(ONE_NODE);
        let fixture = crate::source_for(Some(file.path()));
        assert!(fixture.describe().starts_with("fixture "));
        assert_eq!(fixture.load().await.unwrap().len(), 1);

        let seed = crate::source_for(None);
        assert_eq!(seed.load().await.unwrap().len(), 6);
    }
}
