// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::Arc;
use tokio::sync::Notify;

use crate::logger;

/// Signal handler state
pub struct SignalHandler {
    /// Shutdown signal (SIGTERM, SIGINT)
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Wake the accept loop
    ///
    /// `notify_one` stores a permit, so a request made while the loop is
    /// busy is not lost.
    pub fn request_shutdown(&self) {
        self.shutdown.notify_one();
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start signal handlers (Unix)
///
/// | Signal  | Action        |
/// |---------|---------------|
/// | SIGTERM | Graceful stop |
/// | SIGINT  | Graceful stop |
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let (mut sigterm, mut sigint) =
            match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                (Ok(term), Ok(int)) => (term, int),
                (Err(e), _) | (_, Err(e)) => {
                    logger::log_warning(&format!(
                        "Failed to register Unix signal handlers ({e}), falling back to Ctrl+C"
                    ));
                    wait_for_ctrl_c(&handler).await;
                    return;
                }
            };

        tokio::select! {
            _ = sigterm.recv() => logger::log_signal("SIGTERM"),
            _ = sigint.recv() => logger::log_signal("SIGINT"),
        }
        handler.request_shutdown();
    });
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        wait_for_ctrl_c(&handler).await;
    });
}

async fn wait_for_ctrl_c(handler: &SignalHandler) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            logger::log_signal("Ctrl+C");
            handler.request_shutdown();
        }
        Err(e) => logger::log_error(&format!("Failed to listen for Ctrl+C: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_request_is_not_lost() {
        let handler = SignalHandler::new();

        // request before anyone waits
        handler.request_shutdown();

        tokio::time::timeout(Duration::from_secs(1), handler.shutdown.notified())
            .await
            .expect("stored permit should wake the waiter");
    }
}
