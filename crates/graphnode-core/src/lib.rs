//! Graphnode Core - node records and the immutable store
//!
//! This crate provides the data model served by the graphnode API:
//! records (graph nodes), their heterogeneous property values, and the
//! read-only store the query engine scans.

pub mod error;
pub mod property;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use property::PropertyValue;
pub use record::{Degree, NodeId, Record};
pub use store::Store;
