//! Observability infrastructure for block content rendering.
//!
//! This crate provides:
//! - `RenderId` - Unique identifier correlating one render pass
//! - `StructuredLogger` - Structured logging with render context
//! - `MetricsCollector` - Serializer call timing and sizes
//! - `InstrumentedSerializer` - Logs and measures any `BlockSerializer`
//! - `ObservabilityConfig` - File-based logging and metrics settings

mod config;
mod id;
mod instrument;
mod logging;
mod metrics;

pub use config::*;
pub use id::*;
pub use instrument::*;
pub use logging::*;
pub use metrics::*;
