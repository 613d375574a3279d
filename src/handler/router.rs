//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: logs the request, reads POST
//! bodies, and dispatches on method and path to the mock endpoints.

use crate::analysis::{self, HealthReport, StatusMessage, GREETING};
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry, RequestDetails};
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response, StatusCode, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

pub const ROOT_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/actuator/health";
pub const ANALYZE_PATH: &str = "/api/analyze";
pub const ANALYZE_TEXT_PATH: &str = "/api/analyze/text";

/// Main entry point for HTTP request handling
///
/// Generic over the body type so the router can be driven directly with
/// in-memory bodies as well as hyper's `Incoming`.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: std::fmt::Display,
{
    let started = Instant::now();
    let request_id = state.next_request_id();

    let (parts, body) = req.into_parts();
    let target = request_target(&parts);

    // 1. Dump request details
    logger::log_request_details(
        &request_details(&parts, &target, peer_addr, request_id),
        state.config.logging.show_headers,
    );

    // 2. Read and dump POST body
    let body = if parts.method == Method::POST {
        let bytes = read_body(body).await;
        logger::log_request_body(&bytes);
        Some(bytes)
    } else {
        None
    };

    // 3. Dispatch
    let response = route_request(&parts.method, &target, body.as_ref(), request_id, &state).await;

    if state.config.logging.access_log {
        let entry = access_log_entry(&parts, peer_addr, &response, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method and request target
///
/// The target is compared whole, query string included, so `/?x=1` is not `/`.
async fn route_request(
    method: &Method,
    target: &str,
    body: Option<&Bytes>,
    request_id: u64,
    state: &AppState,
) -> Response<Full<Bytes>> {
    match (method.clone(), target) {
        // CORS preflight, any path
        (Method::OPTIONS, _) => http::build_options_response(),
        (Method::GET, ROOT_PATH) => {
            http::build_json_response(StatusCode::OK, &StatusMessage::success(GREETING))
        }
        (Method::GET, HEALTH_PATH) => http::build_json_response(StatusCode::OK, &HealthReport::up()),
        (Method::POST, ANALYZE_PATH | ANALYZE_TEXT_PATH) => {
            let subject = body.map(|b| String::from_utf8_lossy(b)).unwrap_or_default();
            serve_analysis(&subject, request_id, state).await
        }
        (Method::POST, _) => http::build_json_response(
            StatusCode::NOT_FOUND,
            &StatusMessage::error("Endpoint not found"),
        ),
        _ => http::build_json_response(StatusCode::NOT_FOUND, &StatusMessage::error("Not found")),
    }
}

/// Simulate processing latency, then answer with a canned verdict
async fn serve_analysis(
    subject: &str,
    request_id: u64,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let delay = state.analysis_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let result = analysis::analyze(subject);
    logger::log_verdict(request_id, result.analysis.verdict);
    http::build_json_response(StatusCode::OK, &result)
}

/// Collect the whole body; a failed read is logged and treated as empty
async fn read_body<B>(body: B) -> Bytes
where
    B: Body<Data = Bytes>,
    B::Error: std::fmt::Display,
{
    match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Bytes::new()
        }
    }
}

/// Request target as the client sent it: path plus query, if any
fn request_target(parts: &Parts) -> String {
    parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path().to_string(), ToString::to_string)
}

fn request_details(
    parts: &Parts,
    target: &str,
    peer_addr: SocketAddr,
    request_id: u64,
) -> RequestDetails {
    RequestDetails {
        request_id,
        time: chrono::Local::now(),
        client_ip: peer_addr.ip(),
        method: parts.method.to_string(),
        target: target.to_string(),
        headers: parts
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
    }
}

fn access_log_entry(
    parts: &Parts,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        parts.method.to_string(),
        parts.uri.path().to_string(),
    );
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = version_label(parts.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .map_or(0, |n| usize::try_from(n).unwrap_or(usize::MAX));
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
