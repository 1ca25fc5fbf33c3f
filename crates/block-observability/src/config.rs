//! Logging and metrics configuration.

use std::path::Path;

use anyhow::{Context, Result};
use block_core::BlockSerializer;
use serde::{Deserialize, Serialize};

use crate::id::RenderId;
use crate::instrument::{InstrumentedSerializer, MetricsHandle};
use crate::logging::{LogFormat, LogLevel, StructuredLogger};
use crate::metrics::MetricsCollector;

/// Observability configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Metrics configuration.
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Logging section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written.
    #[serde(default)]
    pub min_level: LogLevel,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

/// Metrics section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Record serializer call metrics.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ObservabilityConfig {
    /// Load config from a TOML or JSON file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a TOML or JSON file, chosen by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Build a logger for a render pass.
    pub fn logger(&self, render_id: RenderId) -> StructuredLogger {
        StructuredLogger::new(render_id)
            .with_min_level(self.logging.min_level)
            .with_format(self.logging.format)
    }

    /// Wrap a serializer with logging, and with metrics when enabled.
    ///
    /// Returns the metrics handle when metrics are enabled.
    pub fn instrument<S: BlockSerializer>(
        &self,
        serializer: S,
        logger: StructuredLogger,
    ) -> (InstrumentedSerializer<S>, Option<MetricsHandle>) {
        if !self.metrics.enabled {
            return (InstrumentedSerializer::new(serializer, logger), None);
        }

        let metrics = MetricsHandle::new(MetricsCollector::new(logger.render_id().clone()));
        let instrumented =
            InstrumentedSerializer::new(serializer, logger).with_metrics(metrics.clone());
        (instrumented, Some(metrics))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_core::{Block, SerializeError, SerializeOptions};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("block-observability-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: ObservabilityConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.min_level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_parse_toml() {
        let config: ObservabilityConfig = toml::from_str(
            r#"
[logging]
min_level = "debug"
format = "human"

[metrics]
enabled = false
"#,
        )
        .unwrap();

        assert_eq!(config.logging.min_level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert!(!config.metrics.enabled);
    }

    #[test]
    fn test_save_and_load_json() {
        let path = temp_path("config.json");
        let mut config = ObservabilityConfig::default();
        config.logging.min_level = LogLevel::Warn;

        config.save(&path).unwrap();
        let loaded = ObservabilityConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ObservabilityConfig::load(temp_path("missing.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn test_instrument_respects_metrics_flag() {
        fn empty(_: &[Block], _: &SerializeOptions) -> Result<String, SerializeError> {
            Ok(String::new())
        }

        let mut config = ObservabilityConfig::default();
        config.logging.min_level = LogLevel::Error;
        let (serializer, metrics) = config.instrument(empty, config.logger(RenderId::generate()));
        serializer.serialize(&[], &SerializeOptions::default()).unwrap();
        assert_eq!(metrics.map(|m| m.snapshot().calls), Some(1));

        config.metrics.enabled = false;
        let (_, metrics) = config.instrument(empty, config.logger(RenderId::generate()));
        assert!(metrics.is_none());
    }
}
