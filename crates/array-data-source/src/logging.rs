//! Logging facilities for the data source.
//!
//! The crate uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("array_data_source=trace")
//!     .init();
//! ```
//!
//! Per-cell dispatch is logged at `trace`, store replacement at `debug`, and
//! the fatal configuration errors at `error` right before the panic.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Crate-wide target.
    pub const CRATE: &str = "array_data_source";
    /// Section store target.
    pub const STORE: &str = "array_data_source::store";
    /// Data source query and dispatch target.
    pub const DATA_SOURCE: &str = "array_data_source::data_source";
}
