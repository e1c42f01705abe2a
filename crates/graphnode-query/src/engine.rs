//! Stateless query engine over an immutable store
//!
//! Every function here is a pure function of `(store, query)`: no state is
//! retained between calls and the store is only ever borrowed immutably, so
//! any number of callers may share one store concurrently.

use graphnode_core::{Record, Store};
use serde::Serialize;

use crate::error::QueryResult;
use crate::field::{AllowList, Field};

/// A single `(field, value)` filter request.
///
/// Serializes as `{"by": <field>, "value": <value>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeQuery {
    #[serde(rename = "by")]
    field: Field,
    value: String,
}

impl NodeQuery {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Validate `by` against the allow-list and build the query
    pub fn parse(allow_list: &AllowList, by: &str, value: impl Into<String>) -> QueryResult<Self> {
        let field = allow_list.resolve(by)?;
        Ok(Self::new(field, value))
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.field.matches(record, &self.value)
    }
}

/// Records matching `query`, in store order.
///
/// Records that lack the queried property are skipped. The result is not
/// deduplicated.
pub fn find_by_criteria<'s>(store: &'s Store, query: &NodeQuery) -> Vec<&'s Record> {
    let results: Vec<&Record> = store.iter().filter(|record| query.matches(record)).collect();
    tracing::debug!(
        "Query {}={:?} matched {} of {} nodes",
        query.field(),
        query.value(),
        results.len(),
        store.len()
    );
    results
}

/// First record with the given id, or `None` if there is none
pub fn get_by_id<'s>(store: &'s Store, id: &str) -> Option<&'s Record> {
    store.iter().find(|record| record.id.as_str() == id)
}

/// The whole store as a read-only slice
pub fn get_all(store: &Store) -> &[Record] {
    store.records()
}
