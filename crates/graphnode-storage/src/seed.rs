//! Built-in demo dataset

use crate::error::StorageResult;
use crate::traits::StoreSource;
use async_trait::async_trait;
use graphnode_core::Store;

const SEED_NODES: &str = include_str!("fixtures/nodes.json");

/// The six demo nodes (n001..n006) compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSource;

impl SeedSource {
    pub fn new() -> Self {
        Self
    }

    /// Build the store synchronously; the seed never touches the filesystem
    pub fn build(&self) -> StorageResult<Store> {
        Ok(Store::from_json(SEED_NODES)?)
    }
}

#[async_trait]
impl StoreSource for SeedSource {
    async fn load(&self) -> StorageResult<Store> {
        let store = self.build()?;
        tracing::info!("Loaded {} seed nodes", store.len());
        Ok(store)
    }

    fn describe(&self) -> String {
        "built-in seed dataset".to_string()
    }
}
