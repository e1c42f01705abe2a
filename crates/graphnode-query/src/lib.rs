//! Graphnode Query - filter nodes by field name and value
//!
//! Provides the allow-list of filterable fields, the mapping from a field
//! name to its matching rule, and the stateless engine that scans a
//! [`Store`](graphnode_core::Store).

pub mod engine;
pub mod error;
pub mod field;

pub use engine::{find_by_criteria, get_all, get_by_id, NodeQuery};
pub use error::{QueryError, QueryResult};
pub use field::{AllowList, Field, DEFAULT_PROPERTY_FIELDS};
