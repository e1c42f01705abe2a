//! Store source trait definitions

use crate::error::StorageResult;
use async_trait::async_trait;
use graphnode_core::Store;

/// Something that can produce a validated, immutable [`Store`]
#[async_trait]
pub trait StoreSource: Send + Sync {
    /// Load and validate the records
    async fn load(&self) -> StorageResult<Store>;

    /// Human-readable description, used in logs
    fn describe(&self) -> String;
}
