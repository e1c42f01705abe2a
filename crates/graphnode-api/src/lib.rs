//! Graphnode API - HTTP front end for the node query engine
//!
//! Validates request parameters against the allow-list, calls into
//! `graphnode-query`, and renders results in the response envelopes
//! clients expect.

pub mod error;
pub mod response;
pub mod routes;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::{run_server, ApiSettings, AppState};
