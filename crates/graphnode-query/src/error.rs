//! Query error types

use thiserror::Error;

/// Result type alias for query operations
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Query-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid field '{field}'. Allowed fields are: {}", .allowed.join(", "))]
    InvalidField { field: String, allowed: Vec<String> },

    #[error("Field name cannot be empty")]
    EmptyField,

    #[error("Property field names cannot be empty")]
    EmptyPropertyField,
}

impl QueryError {
    /// Allowed field names, when the error is about the field itself
    pub fn allowed_fields(&self) -> Option<&[String]> {
        match self {
            Self::InvalidField { allowed, .. } => Some(allowed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_message() {
        let err = QueryError::InvalidField {
            field: "foo".to_string(),
            allowed: vec!["node_id".to_string(), "name".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid field 'foo'. Allowed fields are: node_id, name"
        );
        assert_eq!(err.allowed_fields().map(|a| a.len()), Some(2));
        assert!(QueryError::EmptyField.allowed_fields().is_none());
    }
}
