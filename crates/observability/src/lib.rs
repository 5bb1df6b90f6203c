//! Process-wide logging setup shared by the site binary and its tests.

/// Initialize tracing with the format chosen by `GREENWAVE_LOG_FORMAT`.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Subscriber configuration (filters, output format).
pub mod tracing;
