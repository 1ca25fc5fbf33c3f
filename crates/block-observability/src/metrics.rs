//! Serializer call metrics.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::id::RenderId;

/// Metrics for a single serializer call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializeCall {
    /// Number of top-level blocks passed in.
    pub blocks: usize,
    /// Bytes of markup produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Call duration (microseconds).
    pub duration_us: u64,
    /// Whether the call succeeded.
    pub success: bool,
    /// Error message if failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregated serializer metrics for a render pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializeMetrics {
    /// Render ID for correlation.
    pub render_id: String,
    /// Total serializer calls.
    pub calls: usize,
    /// Failed serializer calls.
    pub failures: usize,
    /// Total bytes produced by successful calls.
    pub total_bytes: usize,
    /// Total time spent in the serializer (microseconds).
    pub total_duration_us: u64,
    /// Time since the collector was created (microseconds).
    pub elapsed_us: u64,
    /// Individual calls, in order.
    pub history: Vec<SerializeCall>,
}

/// Collector for serializer metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    render_id: RenderId,
    start: Instant,
    calls: Vec<SerializeCall>,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(render_id: RenderId) -> Self {
        Self {
            render_id,
            start: Instant::now(),
            calls: Vec::new(),
        }
    }

    /// Record a successful call.
    pub fn record_success(&mut self, blocks: usize, bytes: usize, duration: Duration) {
        self.calls.push(SerializeCall {
            blocks,
            bytes: Some(bytes),
            duration_us: duration.as_micros() as u64,
            success: true,
            error: None,
        });
    }

    /// Record a failed call.
    pub fn record_failure(&mut self, blocks: usize, duration: Duration, error: impl Into<String>) {
        self.calls.push(SerializeCall {
            blocks,
            bytes: None,
            duration_us: duration.as_micros() as u64,
            success: false,
            error: Some(error.into()),
        });
    }

    /// Snapshot the metrics.
    pub fn snapshot(&self) -> SerializeMetrics {
        SerializeMetrics {
            render_id: self.render_id.to_string(),
            calls: self.calls.len(),
            failures: self.calls.iter().filter(|c| !c.success).count(),
            total_bytes: self.calls.iter().filter_map(|c| c.bytes).sum(),
            total_duration_us: self.calls.iter().map(|c| c.duration_us).sum(),
            elapsed_us: self.start.elapsed().as_micros() as u64,
            history: self.calls.clone(),
        }
    }
}

impl SerializeMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Render: {}", self.render_id));
        lines.push(format!(
            "  Serializer calls: {} ({} failed)",
            self.calls, self.failures
        ));
        lines.push(format!(
            "  Serializer time: {}us ({:.2}ms)",
            self.total_duration_us,
            self.total_duration_us as f64 / 1000.0
        ));
        lines.push(format!("  Markup produced: {} bytes", self.total_bytes));

        for (i, call) in self.history.iter().enumerate() {
            let status = match &call.error {
                Some(err) => format!("FAILED: {}", err),
                None => format!("{} bytes", call.bytes.unwrap_or(0)),
            };
            lines.push(format!(
                "    #{} {} blocks, {}us - {}",
                i + 1,
                call.blocks,
                call.duration_us,
                status
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_totals() {
        let mut collector = MetricsCollector::new(RenderId::from_string("r"));
        collector.record_success(2, 100, Duration::from_micros(30));
        collector.record_failure(1, Duration::from_micros(5), "bad name");
        collector.record_success(1, 20, Duration::from_micros(10));

        let metrics = collector.snapshot();
        assert_eq!(metrics.calls, 3);
        assert_eq!(metrics.failures, 1);
        assert_eq!(metrics.total_bytes, 120);
        assert_eq!(metrics.total_duration_us, 45);
        assert_eq!(metrics.history[1].error.as_deref(), Some("bad name"));
    }

    #[test]
    fn test_summary() {
        let mut collector = MetricsCollector::new(RenderId::from_string("r"));
        collector.record_failure(1, Duration::from_micros(5), "boom");

        let summary = collector.snapshot().to_summary();
        assert!(summary.contains("Serializer calls: 1 (1 failed)"));
        assert!(summary.contains("#1 1 blocks, 5us - FAILED: boom"));
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let mut collector = MetricsCollector::new(RenderId::from_string("r"));
        collector.record_success(1, 4, Duration::from_micros(1));

        let json = collector.snapshot().to_json();
        assert!(json.contains(r#""bytes":4"#));
        assert!(!json.contains("error"));
    }
}
