//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the mock endpoints.

pub mod query;
pub mod response;

// Re-export commonly used types
pub use query::parse_query;
pub use response::{build_json_response, build_options_response};
