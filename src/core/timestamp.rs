//! Timestamp formatting
//!
//! Configurable timestamp formats for pattern-mode output. JSON mode always
//! uses RFC 3339 and does not consult this type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options for rendered output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, e.g. `%Y-%m-%d %H:%M:%S`
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Resolve a configured timestamp-format string. Named formats map to
    /// their variants; anything else is treated as a strftime pattern; an
    /// empty string falls back to the default. Never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "" | "iso8601" => TimestampFormat::Iso8601,
            "rfc3339" => TimestampFormat::Rfc3339,
            "unix" => TimestampFormat::Unix,
            "unix_millis" => TimestampFormat::UnixMillis,
            _ => TimestampFormat::Custom(s.to_string()),
        }
    }
}
