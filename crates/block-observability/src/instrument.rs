//! Serializer instrumentation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

use block_core::{Block, BlockSerializer, SerializeError, SerializeOptions};

use crate::logging::StructuredLogger;
use crate::metrics::{MetricsCollector, SerializeMetrics};

/// Shared handle to a [`MetricsCollector`].
#[derive(Debug, Clone)]
pub struct MetricsHandle(Rc<RefCell<MetricsCollector>>);

impl MetricsHandle {
    /// Wrap a collector.
    pub fn new(collector: MetricsCollector) -> Self {
        Self(Rc::new(RefCell::new(collector)))
    }

    /// Snapshot the collected metrics.
    pub fn snapshot(&self) -> SerializeMetrics {
        self.0.borrow().snapshot()
    }

    fn with<R>(&self, f: impl FnOnce(&mut MetricsCollector) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

/// Wraps a serializer, logging and measuring every call.
///
/// The inner result is returned unchanged, errors included.
pub struct InstrumentedSerializer<S> {
    inner: S,
    logger: StructuredLogger,
    metrics: Option<MetricsHandle>,
}

impl<S> InstrumentedSerializer<S> {
    /// Wrap `inner`, logging through `logger`.
    pub fn new(inner: S, logger: StructuredLogger) -> Self {
        Self {
            inner,
            logger,
            metrics: None,
        }
    }

    /// Record call metrics into `metrics`.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

impl<S: BlockSerializer> BlockSerializer for InstrumentedSerializer<S> {
    fn serialize(
        &self,
        blocks: &[Block],
        options: &SerializeOptions,
    ) -> Result<String, SerializeError> {
        let start = Instant::now();
        let result = self.inner.serialize(blocks, options);
        let elapsed = start.elapsed();

        match &result {
            Ok(html) => {
                tracing::trace!(blocks = blocks.len(), bytes = html.len(), "serialized blocks");
                if let Some(metrics) = &self.metrics {
                    metrics.with(|m| m.record_success(blocks.len(), html.len(), elapsed));
                }
                self.logger
                    .debug_builder("serialized blocks")
                    .field_u64("blocks", blocks.len() as u64)
                    .field_u64("bytes", html.len() as u64)
                    .field_bool("inner_blocks", options.is_inner_blocks)
                    .duration_us("duration_us", elapsed)
                    .emit();
            }
            Err(e) => {
                tracing::debug!(error = %e, "serializer failed");
                if let Some(metrics) = &self.metrics {
                    metrics.with(|m| m.record_failure(blocks.len(), elapsed, e.to_string()));
                }
                let count = blocks.len();
                self.logger.error_with(
                    "serializer failed",
                    &[("error", e as &dyn fmt::Debug), ("blocks", &count as &dyn fmt::Debug)],
                );
            }
        }

        result
    }
}
