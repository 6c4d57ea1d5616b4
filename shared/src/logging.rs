//! Shared logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the filter directive for the given base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("canvass={base_level},shared={base_level}")
}

/// Initialize the stdout tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when it is set. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for dataset-aware info logging
#[macro_export]
macro_rules! dataset_info {
    ($dataset_id:expr, $($arg:tt)*) => {
        tracing::info!(
            dataset = %$dataset_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for dataset-aware warning logging
#[macro_export]
macro_rules! dataset_warn {
    ($dataset_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            dataset = %$dataset_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for dataset-aware error logging
#[macro_export]
macro_rules! dataset_error {
    ($dataset_id:expr, $($arg:tt)*) => {
        tracing::error!(
            dataset = %$dataset_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for dataset-aware debug logging
#[macro_export]
macro_rules! dataset_debug {
    ($dataset_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            dataset = %$dataset_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!(timestamp = format_timestamp(), "✅ {}", message);
}
