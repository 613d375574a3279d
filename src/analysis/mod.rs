//! Mock analysis module
//!
//! Canned payloads returned by the mock backend:
//! - greeting and health-check bodies
//! - keyword-driven analysis results
//! - error bodies

mod verdict;

pub use verdict::Verdict;

use serde::Serialize;

/// Fixed confidence reported for every analysis
pub const CONFIDENCE: f64 = 0.85;
/// Fixed processing time reported for every analysis
pub const PROCESSING_TIME: u64 = 1024;
/// Source label reported for every analysis
pub const SOURCE: &str = "mock-api";

pub const GREETING: &str = "SatyaCheck API Mock Server is running!";

/// `{"status": ..., "message": ...}` body, used for the greeting and for errors
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: &'static str,
}

impl StatusMessage {
    pub const fn success(message: &'static str) -> Self {
        Self {
            status: "success",
            message,
        }
    }

    pub const fn error(message: &'static str) -> Self {
        Self {
            status: "error",
            message,
        }
    }
}

/// Status of a single health component
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthComponents {
    pub db: ComponentStatus,
    pub disk_space: ComponentStatus,
    pub ping: ComponentStatus,
}

/// Actuator-style health document
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub components: HealthComponents,
}

impl HealthReport {
    pub const fn up() -> Self {
        Self {
            status: "UP",
            components: HealthComponents {
                db: ComponentStatus { status: "UP" },
                disk_space: ComponentStatus { status: "UP" },
                ping: ComponentStatus { status: "UP" },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub verdict: Verdict,
    pub explanation: &'static str,
    pub confidence: f64,
    pub source: &'static str,
    pub processing_time: u64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub status: &'static str,
    pub analysis: Analysis,
}

/// Analyze submitted content and build the response body
///
/// The subject is the raw request text; JSON bodies are matched as text too.
pub fn analyze(subject: &str) -> AnalysisResponse {
    let verdict = Verdict::classify(subject);
    AnalysisResponse {
        status: "success",
        analysis: Analysis {
            verdict,
            explanation: verdict.explanation(),
            confidence: CONFIDENCE,
            source: SOURCE,
            processing_time: PROCESSING_TIME,
        },
    }
}
