//! Logger module
//!
//! Provides logging utilities for the mock server including:
//! - Server lifecycle logging
//! - Request detail and body dumps
//! - Access logging with multiple formats
//! - Error and warning logging

mod details;
mod format;
pub mod writer;

pub use details::{render_body, RequestDetails};
pub use format::AccessLogEntry;

use crate::analysis::Verdict;
use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(&format!(
        "Starting mock API server on {}:{}",
        config.server.host, config.server.port
    ));
    write_info(&format!("Listening on: http://{addr}"));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info(&format!(
        "Simulated analysis latency: {} ms",
        config.mock.analysis_delay_ms
    ));
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
}

pub fn log_server_stopped(requests_served: u64) {
    write_info(&format!("Handled {requests_served} request(s)"));
    write_info("Server stopped.");
}

pub fn log_signal(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received, shutting down"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Dump request line, client and (optionally) headers
pub fn log_request_details(details: &RequestDetails, show_headers: bool) {
    // one write keeps the block contiguous across connections
    write_info(&details.render(show_headers));
}

/// Dump a POST body
pub fn log_request_body(body: &[u8]) {
    write_info(&render_body(body));
}

/// One line per analysis, tagged with the id shown in the details block
pub fn log_verdict(request_id: u64, verdict: Verdict) {
    write_info(&format!("[Analysis] #{request_id} -> {verdict}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
