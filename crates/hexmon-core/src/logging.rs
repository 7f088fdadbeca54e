//! Logging facilities for hexmon.
//!
//! hexmon uses the `tracing` crate for instrumentation. Library crates never
//! install a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::from_default_env())
//!         .init();
//! }
//! ```
//!
//! Every event emitted by the workspace uses one of the [`targets`], so a
//! directive such as `RUST_LOG=hexmon_style::theme=debug` isolates the theme
//! switching logs.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "hexmon_core::signal";
    /// Theme resolution and application target.
    pub const THEME: &str = "hexmon_style::theme";
    /// Durable settings storage target.
    pub const STORAGE: &str = "hexmon::storage";
    /// Configuration loading target.
    pub const CONFIG: &str = "hexmon::config";
    /// Performance spans target.
    pub const PERF: &str = "hexmon::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for tracking the duration of an operation.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
