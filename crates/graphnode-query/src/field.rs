//! Filterable fields and the allow-list that admits them

use graphnode_core::Record;
use serde::{Serialize, Serializer};

use crate::error::{QueryError, QueryResult};

const NODE_ID: &str = "node_id";
const LABEL: &str = "label";
const TYPE: &str = "type";

/// Property names that are filterable out of the box
pub const DEFAULT_PROPERTY_FIELDS: &[&str] = &["name", "email", "age", "city", "status"];

/// Default allow-list, in the order it is reported to clients
const DEFAULT_FIELDS: &[&str] = &[NODE_ID, "name", LABEL, TYPE, "email", "age", "city", "status"];

/// A resolved filter field. Each variant carries its own matching rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// Exact, case-sensitive match on the node id
    NodeId,
    /// Label membership (exact, case-sensitive)
    Label,
    /// Alias of [`Field::Label`]
    Type,
    /// Property equality; strings ignore case, other values compare as text
    Property(String),
}

impl Field {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NodeId => NODE_ID,
            Self::Label => LABEL,
            Self::Type => TYPE,
            Self::Property(name) => name,
        }
    }

    /// Apply this field's matching rule to a record.
    ///
    /// A record lacking the property is not a match.
    pub fn matches(&self, record: &Record, value: &str) -> bool {
        match self {
            Self::NodeId => record.id.as_str() == value,
            Self::Label | Self::Type => record.has_label(value),
            Self::Property(name) => record
                .property(name)
                .is_some_and(|prop| prop.matches(value)),
        }
    }

    fn from_allowed(name: &str) -> Self {
        match name {
            NODE_ID => Self::NodeId,
            LABEL => Self::Label,
            TYPE => Self::Type,
            other => Self::Property(other.to_string()),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The set of field names accepted in a filter query.
///
/// Always contains the identifier field (`node_id`) and the label fields
/// (`label`, `type`); the property names are configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    names: Vec<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self {
            names: DEFAULT_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AllowList {
    /// Build an allow-list from a set of whitelisted property names.
    ///
    /// Names that repeat a built-in field or an earlier entry are dropped.
    pub fn with_properties<I, S>(properties: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = vec![NODE_ID.to_string(), LABEL.to_string(), TYPE.to_string()];
        for property in properties {
            let property: String = property.into();
            let property = property.trim();
            if property.is_empty() {
                return Err(QueryError::EmptyPropertyField);
            }
            if names.iter().any(|n| n == property) {
                tracing::debug!("Skipping duplicate allow-list entry: {}", property);
                continue;
            }
            names.push(property.to_string());
        }
        Ok(Self { names })
    }

    /// Resolve a requested field name to its matcher
    pub fn resolve(&self, by: &str) -> QueryResult<Field> {
        if by.is_empty() {
            return Err(QueryError::EmptyField);
        }
        if self.contains(by) {
            Ok(Field::from_allowed(by))
        } else {
            Err(QueryError::InvalidField {
                field: by.to_string(),
                allowed: self.names.clone(),
            })
        }
    }

    pub fn contains(&self, by: &str) -> bool {
        self.names.iter().any(|n| n == by)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Only the whitelisted property names
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|n| !matches!(*n, NODE_ID | LABEL | TYPE))
    }
}
