//! Observability infrastructure.
//!
//! Structured logging only; this tool has no metrics surface.

pub mod tracing;
