//! Tracing and logging setup shared by the billdesk binaries.

/// Subscriber configuration (filters, output format).
pub mod subscriber;

pub use subscriber::LogFormat;

/// Initialize process-wide tracing/logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(LogFormat::from_env());
}
