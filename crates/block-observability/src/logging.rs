//! Structured logging with render context.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::RenderId;

/// Log level for structured logs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Render ID for correlation.
    pub render_id: String,
    /// Block being rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
    /// Microseconds since the logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if let Some(block) = &self.block {
            s.push_str(&format!(" <{}>", block));
        }

        if let Some(elapsed) = self.elapsed_us {
            s.push_str(&format!(" ({}us)", elapsed));
        }

        if !self.fields.is_empty() {
            let mut fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            fields.sort();
            s.push_str(" | ");
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Structured logger with render context.
///
/// Every entry carries the render ID and, when set, the block name.
/// Entries are written to stderr.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    render_id: RenderId,
    block: Option<String>,
    start_time: std::time::Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    /// Create a new logger for a render pass.
    pub fn new(render_id: RenderId) -> Self {
        Self {
            render_id,
            block: None,
            start_time: std::time::Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Set the block name.
    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.block = Some(block.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Log at error level with fields.
    pub fn error_with(&self, message: &str, fields: &[(&str, &dyn fmt::Debug)]) {
        let fields = fields
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::json!(format!("{:?}", v))))
            .collect();
        self.log(LogLevel::Error, message, fields);
    }

    /// Format an entry, or `None` if `level` is below the minimum.
    pub fn format_entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: HashMap<String, serde_json::Value>,
    ) -> Option<String> {
        if level < self.min_level {
            return None;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            render_id: self.render_id.to_string(),
            block: self.block.clone(),
            fields,
            elapsed_us: Some(self.elapsed_us()),
        };

        Some(match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        })
    }

    fn log(&self, level: LogLevel, message: &str, fields: HashMap<String, serde_json::Value>) {
        if let Some(output) = self.format_entry(level, message, fields) {
            eprintln!("{}", output);
        }
    }

    /// Get the render ID.
    pub fn render_id(&self) -> &RenderId {
        &self.render_id
    }

    /// Whether entries at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: HashMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an unsigned integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a duration field (in microseconds).
    pub fn duration_us(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(duration.as_micros() as u64));
        self
    }

    /// Format without emitting.
    pub fn format(self) -> Option<String> {
        self.logger
            .format_entry(self.level, &self.message, self.fields)
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RenderId::from_string("r1")).with_block("core/group")
    }

    #[test]
    fn test_below_min_level_is_dropped() {
        let logger = logger().with_min_level(LogLevel::Warn);
        assert!(logger.format_entry(LogLevel::Info, "hidden", HashMap::new()).is_none());
        assert!(logger.format_entry(LogLevel::Error, "shown", HashMap::new()).is_some());
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_json_entry() {
        let line = logger()
            .info_builder("serialized")
            .field_u64("blocks", 3)
            .format()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["level"], "info");
        assert_eq!(value["render_id"], "r1");
        assert_eq!(value["block"], "core/group");
        assert_eq!(value["blocks"], 3);
    }

    #[test]
    fn test_string_field() {
        let line = logger()
            .info_builder("rendered document")
            .field("title", "Home & Away")
            .format()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["title"], "Home & Away");
    }

    #[test]
    fn test_human_entry() {
        let line = logger()
            .with_format(LogFormat::Human)
            .info_builder("serialized")
            .field_bool("ok", true)
            .format()
            .unwrap();

        assert!(line.starts_with("[INFO] serialized <core/group> ("));
        assert!(line.ends_with("| ok=true"));
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
