//! Error types for Graphnode Core

use thiserror::Error;

/// Result type alias using Graphnode's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building records or a store
#[derive(Error, Debug)]
pub enum Error {
    #[error("Node id cannot be empty")]
    EmptyNodeId,

    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("Node {node_id}: updated_at precedes created_at")]
    TimestampOrder { node_id: String },

    #[error("Node {node_id}: degree total {total} != incoming {incoming} + outgoing {outgoing}")]
    DegreeMismatch {
        node_id: String,
        incoming: u64,
        outgoing: u64,
        total: u64,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
