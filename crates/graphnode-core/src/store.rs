//! The immutable record store

use crate::error::{Error, Result};
use crate::record::Record;
use serde::Serialize;
use std::collections::HashSet;

/// Ordered, read-only collection of records.
///
/// Built once through [`Store::new`], which enforces the per-record
/// invariants and id uniqueness. There is no way to mutate a store after
/// construction, so it can be shared across threads behind an `Arc`
/// without locking.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    /// Build a store, validating every record and rejecting duplicate ids
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateNodeId(record.id.to_string()));
            }
        }
        tracing::debug!("Built store with {} records", records.len());
        Ok(Self { records })
    }

    /// Parse a JSON array of records and build a store from it
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// All records in store order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Degree;
    use chrono::{TimeZone, Utc};

    fn record(id: &str) -> Record {
        let at = Utc.with_ymd_and_hms(2023, 5, 22, 12, 0, 0).unwrap();
        Record::new(id, at).with_label("Person")
    }

    #[test]
    fn test_store_preserves_order() {
        let store = Store::new(vec![record("n002"), record("n001"), record("n003")]).unwrap();
        let ids: Vec<&str> = store.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["n002", "n001", "n003"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Store::new(vec![record("n001"), record("n001")]);
        assert!(matches!(result, Err(Error::DuplicateNodeId(id)) if id == "n001"));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let mut bad = record("n001");
        bad.degree = Degree {
            incoming: 2,
            outgoing: 2,
            total: 5,
        };
        assert!(Store::new(vec![bad]).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "node_id": "n010",
                "labels": ["Person"],
                "properties": {"name": "Eve", "age": 30, "verified": true, "nickname": null},
                "created_at": "2023-01-15T10:30:00Z",
                "updated_at": "2024-10-20T14:22:00Z",
                "relationship_count": 1,
                "degree": {"incoming": 1, "outgoing": 0, "total": 1}
            }
        ]"#;
        let store = Store::from_json(json).unwrap();
        assert_eq!(store.len(), 1);
        let record = &store.records()[0];
        assert_eq!(record.id.as_str(), "n010");
        assert!(record.property("nickname").is_some_and(|v| v.is_null()));
    }

    #[test]
    fn test_from_json_bad_shape() {
        let result = Store::from_json(r#"[{"labels": []}]"#);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_empty_store() {
        let store = Store::empty();
        assert!(store.is_empty());
        assert_eq!(serde_json::to_string(&store).unwrap(), "[]");
    }
}
