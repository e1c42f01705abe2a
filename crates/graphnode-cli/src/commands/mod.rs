//! CLI command implementations

pub mod completions;
pub mod config;
pub mod nodes;
pub mod serve;
