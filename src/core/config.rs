//! Resolved logger configuration
//!
//! `LoggerConfig` is the value handed over by whatever loads and validates
//! configuration on disk; that collaborator is out of scope here. Every
//! field has a documented default, and invalid values degrade rather than
//! fail construction — the only fatal condition is an empty destination set
//! after all destinations were tried (see [`Logger::from_config`]).
//!
//! [`Logger::from_config`]: super::logger::Logger::from_config

use super::pattern::DEFAULT_PATTERN;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default strftime pattern for `timestamp_format`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render mode: pattern text or single-line JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Text,
    Json,
}

/// An output target for rendered lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Console,
    File { path: PathBuf },
}

/// Resolved configuration, immutable for the lifetime of the logger built
/// from it. Changing logging behavior means building a new logger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum severity: `debug`, `info`, `warn`, or `error`. Unrecognized
    /// values degrade to `info`.
    pub minimum_level: String,

    /// Pattern template for text mode. Empty degrades to message-only.
    pub output_pattern: String,

    /// Timestamp format for pattern mode: a named format (`iso8601`,
    /// `rfc3339`, `unix`, `unix_millis`) or a strftime string.
    pub timestamp_format: String,

    /// Text (pattern) or JSON rendering.
    pub format: RenderMode,

    /// Ordered destination set. Empty degrades to console.
    pub destinations: Vec<Destination>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            minimum_level: "info".to_string(),
            output_pattern: DEFAULT_PATTERN.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            format: RenderMode::Text,
            destinations: vec![Destination::Console],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = LoggerConfig::default();
        assert_eq!(cfg.minimum_level, "info");
        assert_eq!(cfg.output_pattern, DEFAULT_PATTERN);
        assert_eq!(cfg.format, RenderMode::Text);
        assert_eq!(cfg.destinations, vec![Destination::Console]);
    }

    #[test]
    fn test_deserialize_partial() {
        let cfg: LoggerConfig = serde_json::from_str(
            r#"{"minimum_level": "debug", "format": "json"}"#,
        )
        .unwrap();
        assert_eq!(cfg.minimum_level, "debug");
        assert_eq!(cfg.format, RenderMode::Json);
        // Unspecified fields fall back to defaults.
        assert_eq!(cfg.destinations, vec![Destination::Console]);
    }

    #[test]
    fn test_deserialize_file_destination() {
        let cfg: LoggerConfig = serde_json::from_str(
            r#"{"destinations": ["console", {"file": {"path": "/tmp/app.log"}}]}"#,
        )
        .unwrap();
        assert_eq!(cfg.destinations.len(), 2);
        assert!(matches!(cfg.destinations[1], Destination::File { .. }));
    }
}
