use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Logger adapter backed by the `tracing` ecosystem.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shop_backend", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shop_backend", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shop_backend", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shop_backend", "{}", message);
    }
}
