//! Request details rendering
//!
//! Human-readable request dump printed for every incoming request, plus
//! the body dump printed for POST requests.

use chrono::{DateTime, Local};
use std::fmt::Write;
use std::net::IpAddr;

use crate::http::parse_query;

/// Snapshot of the request line and headers taken before routing
#[derive(Debug, Clone)]
pub struct RequestDetails {
    /// Sequence number, repeated on the analysis log line
    pub request_id: u64,
    pub time: DateTime<Local>,
    pub client_ip: IpAddr,
    pub method: String,
    /// Request target as sent by the client (path plus query)
    pub target: String,
    pub headers: Vec<(String, String)>,
}

impl RequestDetails {
    /// Render the details block
    ///
    /// Headers are listed only when `show_headers` is set; query parameters
    /// are listed for GET requests that carry a query string.
    pub fn render(&self, show_headers: bool) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\n==== REQUEST DETAILS ====");
        let _ = writeln!(out, "Request: #{}", self.request_id);
        let _ = writeln!(out, "Time: {}", self.time.format("%Y-%m-%d %H:%M:%S"));
        let _ = writeln!(out, "Client IP: {}", self.client_ip);
        let _ = writeln!(out, "Method: {}", self.method);
        let _ = writeln!(out, "Path: {}", self.target);

        if show_headers {
            let _ = write!(out, "\n  Headers:");
            for (name, value) in &self.headers {
                let _ = write!(out, "\n    {name}: {value}");
            }
            out.push('\n');
        }

        if self.method == "GET" {
            if let Some((_, query)) = self.target.split_once('?') {
                let _ = writeln!(out, "  Query Parameters:");
                for param in parse_query(query) {
                    let _ = writeln!(out, "    {}: {}", param.name, param.values.join(", "));
                }
            }
        }

        out.push_str("=======================\n");
        out
    }
}

/// Render a request body: pretty JSON when it parses, raw text otherwise
pub fn render_body(body: &[u8]) -> String {
    let text = match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(json) => serde_json::to_string_pretty(&json)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned()),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    };

    format!("==== REQUEST BODY ====\n{text}\n=====================\n")
}
