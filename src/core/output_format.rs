//! Output format selection for log records
//!
//! Two render modes, chosen once at logger construction:
//! - Pattern: template expansion via [`PatternLayout`]
//! - Json: one self-contained JSON object per call

use super::log_record::LogRecord;
use super::pattern::PatternLayout;
use chrono::SecondsFormat;

/// How a [`LogRecord`] becomes output bytes. Every rendered line ends with a
/// single newline.
#[derive(Debug, Clone)]
pub enum OutputFormat {
    /// Template-driven text line (default)
    ///
    /// Example: `2025-01-08T10:30:45.123Z | INFO | req-42 | accept.rs:17 | run | hello`
    Pattern(PatternLayout),

    /// Single-line JSON object
    ///
    /// Example: `{"level":"info","message":"hello","requestID":"req-42",...}`
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Pattern(PatternLayout::default())
    }
}

impl OutputFormat {
    /// Render a record into its final newline-terminated line.
    pub fn render(&self, record: &LogRecord) -> String {
        match self {
            OutputFormat::Pattern(layout) => layout.render(record),
            OutputFormat::Json => Self::render_json(record),
        }
    }

    /// JSON mode: fixed base field set, RFC 3339 timestamp, caller-supplied
    /// fields merged last so they take precedence over the defaults.
    fn render_json(record: &LogRecord) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.as_lower_str().to_string()),
        );
        json_obj.insert(
            "time".to_string(),
            serde_json::Value::String(
                record.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );
        json_obj.insert(
            "file".to_string(),
            serde_json::Value::String(record.site.file_basename().to_string()),
        );
        json_obj.insert(
            "function".to_string(),
            serde_json::Value::String(record.site.function.to_string()),
        );
        json_obj.insert(
            "line".to_string(),
            serde_json::Value::Number(record.site.line.into()),
        );
        json_obj.insert(
            "requestID".to_string(),
            serde_json::Value::String(record.request_id.clone()),
        );

        for (key, value) in record.fields.fields() {
            json_obj.insert(key.clone(), value.to_json_value());
        }

        // A map of plain values cannot fail to serialize; if it somehow does,
        // the message alone still goes out.
        let mut out = serde_json::to_string(&serde_json::Value::Object(json_obj))
            .unwrap_or_else(|_| record.message.clone());
        out.push('\n');
        out
    }
}

impl From<PatternLayout> for OutputFormat {
    fn from(layout: PatternLayout) -> Self {
        OutputFormat::Pattern(layout)
    }
}
