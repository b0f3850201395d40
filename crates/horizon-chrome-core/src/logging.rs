//! Logging facilities for Horizon Chrome.
//!
//! Horizon Chrome uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! tracing_subscriber::fmt()
//!     .with_env_filter(EnvFilter::new("horizon_chrome=debug"))
//!     .init();
//! ```
//!
//! Hit tests run on every mouse move, so they only log at `trace` level.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_chrome_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_chrome_core::signal";
    /// Chrome configuration and state target.
    pub const CHROME: &str = "horizon_chrome";
    /// Geometry classification target.
    pub const HIT_TEST: &str = "horizon_chrome::hit_test";
    /// Native message adapter target.
    pub const MESSAGE: &str = "horizon_chrome::message";
    /// Button wiring target.
    pub const BUTTONS: &str = "horizon_chrome::buttons";
    /// Platform strategy target.
    pub const PLATFORM: &str = "horizon_chrome::platform";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for measuring how long a native message handler takes.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "horizon_chrome::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[macro_export]
macro_rules! chrome_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "horizon_chrome", $($arg)*)
    };
}

#[macro_export]
macro_rules! chrome_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "horizon_chrome", $($arg)*)
    };
}

#[macro_export]
macro_rules! chrome_warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "horizon_chrome", $($arg)*)
    };
}
