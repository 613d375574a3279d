//! Request handler module
//!
//! Responsible for request routing dispatch to the mock endpoints.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
