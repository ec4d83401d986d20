//! Observability subsystem.
//!
//! Structured logging via `tracing`; every subsystem emits events with
//! structured fields rather than formatted strings.

pub mod logging;

pub use logging::init_logging;
