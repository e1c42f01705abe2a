//! Response envelopes

use graphnode_core::Record;
use graphnode_query::NodeQuery;
use serde::Serialize;

/// Message attached to an empty filtered result
pub const NO_MATCH_MESSAGE: &str = "No nodes found matching the specified criteria";

/// `{count, query_params?, nodes, message?}`
#[derive(Debug, Serialize)]
pub struct NodeListResponse<'a> {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_params: Option<&'a NodeQuery>,
    pub nodes: Vec<&'a Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl<'a> NodeListResponse<'a> {
    /// Envelope for an unfiltered listing
    pub fn all(nodes: &'a [Record]) -> Self {
        Self {
            count: nodes.len(),
            query_params: None,
            nodes: nodes.iter().collect(),
            message: None,
        }
    }

    /// Envelope for a filtered query; empty results carry [`NO_MATCH_MESSAGE`]
    pub fn filtered(query: &'a NodeQuery, nodes: Vec<&'a Record>) -> Self {
        let message = nodes.is_empty().then_some(NO_MATCH_MESSAGE);
        Self {
            count: nodes.len(),
            query_params: Some(query),
            nodes,
            message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Health check body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub server: &'static str,
    pub version: &'static str,
    pub nodes: usize,
}
