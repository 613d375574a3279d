// Application state module
// Shared, read-mostly state handed to every connection

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,

    // Monotonic request counter; ids tie the details block to the verdict line
    request_count: AtomicU64,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            request_count: AtomicU64::new(0),
        }
    }

    /// Simulated latency applied before answering an analysis request
    pub const fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.config.mock.analysis_delay_ms)
    }

    /// Record a new request and return its sequence number (starting at 1)
    pub fn next_request_id(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn requests_served(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }
}
