//! Record (graph node) types

use crate::error::{Error, Result};
use crate::property::PropertyValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge counts for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Degree {
    pub incoming: u64,
    pub outgoing: u64,
    pub total: u64,
}

impl Degree {
    /// Counts with `total` derived from the two directions, saturating at `u64::MAX`
    pub fn new(incoming: u64, outgoing: u64) -> Self {
        Self {
            incoming,
            outgoing,
            total: incoming.saturating_add(outgoing),
        }
    }

    /// True when `incoming + outgoing == total`
    pub fn is_consistent(&self) -> bool {
        self.incoming.checked_add(self.outgoing) == Some(self.total)
    }
}

/// A node in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier
    #[serde(rename = "node_id")]
    pub id: NodeId,

    /// Semantic types of the node, in declaration order
    #[serde(default)]
    pub labels: Vec<String>,

    /// Scalar properties keyed by name
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub relationship_count: u64,

    #[serde(default)]
    pub degree: Degree,
}

impl Record {
    /// Create a record with no labels or properties, created and updated at `at`
    pub fn new(id: impl Into<NodeId>, at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            labels: Vec::new(),
            properties: BTreeMap::new(),
            created_at: at,
            updated_at: at,
            relationship_count: 0,
            degree: Degree::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    /// Set the degree and keep `relationship_count` in step with its total
    pub fn with_degree(mut self, degree: Degree) -> Self {
        self.relationship_count = degree.total;
        self.degree = degree;
        self
    }

    /// Check if the node carries a label (exact, case-sensitive)
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check the per-record invariants
    pub fn validate(&self) -> Result<()> {
        if self.id.as_str().is_empty() {
            return Err(Error::EmptyNodeId);
        }
        if self.updated_at < self.created_at {
            return Err(Error::TimestampOrder {
                node_id: self.id.to_string(),
            });
        }
        if !self.degree.is_consistent() {
            return Err(Error::DegreeMismatch {
                node_id: self.id.to_string(),
                incoming: self.degree.incoming,
                outgoing: self.degree.outgoing,
                total: self.degree.total,
            });
        }
        Ok(())
    }
}
