mod gracefullshutdown;
mod logs;
mod metrics;
mod tracing_context;
mod validation;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::tracing_context::TracingContext;
pub use self::validation::validation_messages;
