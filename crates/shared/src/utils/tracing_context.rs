use crate::utils::{Method, Metrics, Status};
use tokio::time::Instant;
use tracing::{error, info};

pub struct TracingContext {
    pub operation: &'static str,
    pub method: Method,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(operation: &'static str, method: Method) -> Self {
        info!(operation, "Starting operation: {operation}");

        Self {
            operation,
            method,
            start_time: Instant::now(),
        }
    }

    pub fn complete(self, metrics: &Metrics, is_success: bool, message: &str) {
        let operation = self.operation;
        let elapsed = self.start_time.elapsed().as_secs_f64();

        let status = if is_success {
            info!(operation, elapsed, "✅ Operation completed successfully: {message}");
            Status::Success
        } else {
            error!(operation, elapsed, "❌ Operation failed: {message}");
            Status::Error
        };

        metrics.record(self.method, status, elapsed);
    }
}
