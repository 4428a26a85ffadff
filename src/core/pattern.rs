//! Pattern-based layout
//!
//! Renders a [`LogRecord`] by substituting `%token%` placeholders in a
//! configured template. Recognized tokens: `%timestamp%`, `%level%`,
//! `%logger%`, `%file%`, `%line%`, `%function%`, `%requestId%`, `%message%`.
//! Unrecognized tokens are left verbatim. A trailing newline is always
//! appended.

use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;
use std::fmt;
use std::sync::Arc;

/// Pattern used when the configuration supplies none.
pub const DEFAULT_PATTERN: &str =
    "%timestamp% | %level% | %requestId% | %file%:%line% | %function% | %message%";

/// Transformation applied to the message text before substitution.
pub trait MessageFormat: Send + Sync {
    fn format_message(&self, message: &str) -> String;
}

/// Transformation applied to the function name before substitution.
pub trait FunctionNameFormat: Send + Sync {
    fn format_function(&self, function: &str) -> String;
}

impl<F> MessageFormat for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format_message(&self, message: &str) -> String {
        self(message)
    }
}

impl<F> FunctionNameFormat for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format_function(&self, function: &str) -> String {
        self(function)
    }
}

/// Default message transform: identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMessageFormat;

impl MessageFormat for IdentityMessageFormat {
    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Default function-name transform: reduce a fully qualified name to its
/// short form, taking the last `::`- or `.`-delimited segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortFunctionNameFormat;

impl FunctionNameFormat for ShortFunctionNameFormat {
    fn format_function(&self, function: &str) -> String {
        let tail = function.rsplit("::").next().unwrap_or(function);
        tail.rsplit('.').next().unwrap_or(tail).to_string()
    }
}

/// Template-driven text layout.
pub struct PatternLayout {
    pattern: String,
    timestamp_format: TimestampFormat,
    message_format: Arc<dyn MessageFormat>,
    function_format: Arc<dyn FunctionNameFormat>,
}

impl PatternLayout {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            timestamp_format: TimestampFormat::default(),
            message_format: Arc::new(IdentityMessageFormat),
            function_format: Arc::new(ShortFunctionNameFormat),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Install a message transform hook.
    #[must_use]
    pub fn with_message_format<M: MessageFormat + 'static>(mut self, format: M) -> Self {
        self.message_format = Arc::new(format);
        self
    }

    /// Install a function-name transform hook.
    #[must_use]
    pub fn with_function_format<N: FunctionNameFormat + 'static>(mut self, format: N) -> Self {
        self.function_format = Arc::new(format);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Expand the template against a record. An empty pattern degrades to
    /// the message alone; the message is never dropped.
    ///
    /// Substitution is sequential literal replacement in a fixed order
    /// (timestamp, level, logger, file, line, function, requestId, message).
    /// Known limitation: a substituted value that itself contains a
    /// later-replaced placeholder token is substituted again. A message
    /// containing `%level%` survives only because `%message%` is replaced
    /// last.
    pub fn render(&self, record: &LogRecord) -> String {
        let message = self.message_format.format_message(&record.message);

        if self.pattern.is_empty() {
            let mut out = message;
            out.push('\n');
            return out;
        }

        let timestamp = self.timestamp_format.format(&record.timestamp);
        let function = self.function_format.format_function(record.site.function);

        let mut out = self.pattern.clone();
        out = out.replace("%timestamp%", &timestamp);
        out = out.replace("%level%", record.level.to_str());
        out = out.replace("%logger%", &record.logger);
        out = out.replace("%file%", record.site.file_basename());
        out = out.replace("%line%", &record.site.line.to_string());
        out = out.replace("%function%", &function);
        out = out.replace("%requestId%", &record.request_id);
        out = out.replace("%message%", &message);

        if !record.fields.is_empty() {
            out.push(' ');
            out.push_str(&record.fields.format_fields());
        }

        out.push('\n');
        out
    }
}

impl Default for PatternLayout {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl Clone for PatternLayout {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            timestamp_format: self.timestamp_format.clone(),
            message_format: Arc::clone(&self.message_format),
            function_format: Arc::clone(&self.function_format),
        }
    }
}

impl fmt::Debug for PatternLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternLayout")
            .field("pattern", &self.pattern)
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_context::LogContext;
    use crate::core::log_level::LogLevel;
    use crate::core::log_record::{CallSite, LogRecord};

    fn sample_record() -> LogRecord {
        LogRecord::new(LogLevel::Info, "hello world".to_string())
            .with_site(CallSite::new("src/server/accept.rs", 17, "server::accept::run"))
            .with_request_id("req-42")
    }

    #[test]
    fn test_render_substitutes_all_tokens() {
        let layout = PatternLayout::new("%level% %file%:%line% %function% %requestId% %message%");
        let line = layout.render(&sample_record());
        assert_eq!(line, "INFO accept.rs:17 run req-42 hello world\n");
    }

    #[test]
    fn test_unrecognized_token_left_verbatim() {
        let layout = PatternLayout::new("%unknown% %message%");
        let line = layout.render(&sample_record());
        assert_eq!(line, "%unknown% hello world\n");
    }

    #[test]
    fn test_empty_pattern_degrades_to_message() {
        let layout = PatternLayout::new("");
        assert_eq!(layout.render(&sample_record()), "hello world\n");
    }

    #[test]
    fn test_repeated_token_replaced_everywhere() {
        let layout = PatternLayout::new("%level%/%level%");
        assert_eq!(layout.render(&sample_record()), "INFO/INFO\n");
    }

    #[test]
    fn test_message_containing_token_not_resubstituted() {
        let record = LogRecord::new(LogLevel::Info, "raw %level% text".to_string())
            .with_site(CallSite::UNKNOWN);
        let layout = PatternLayout::new("%message%");
        assert_eq!(layout.render(&record), "raw %level% text\n");
    }

    #[test]
    fn test_short_function_name_format() {
        let format = ShortFunctionNameFormat;
        assert_eq!(format.format_function("pkg.sub.Handler.Process"), "Process");
        assert_eq!(format.format_function("ctxlog::demo::handle"), "handle");
        assert_eq!(format.format_function("plain"), "plain");
    }

    #[test]
    fn test_message_hook_applies() {
        let layout = PatternLayout::new("%message%")
            .with_message_format(|message: &str| message.to_uppercase());
        assert_eq!(layout.render(&sample_record()), "HELLO WORLD\n");
    }

    #[test]
    fn test_function_hook_applies() {
        struct Full;
        impl FunctionNameFormat for Full {
            fn format_function(&self, function: &str) -> String {
                function.to_string()
            }
        }
        let layout = PatternLayout::new("%function%").with_function_format(Full);
        assert_eq!(layout.render(&sample_record()), "server::accept::run\n");
    }

    #[test]
    fn test_fields_appended_sorted() {
        let record = sample_record()
            .with_fields(LogContext::new().with_field("b", 2).with_field("a", 1));
        let layout = PatternLayout::new("%message%");
        assert_eq!(layout.render(&record), "hello world a=1 b=2\n");
    }

    #[test]
    fn test_sentinel_call_site() {
        let record = LogRecord::new(LogLevel::Error, "boom".to_string());
        let layout = PatternLayout::new("%file%:%line% %function%");
        assert_eq!(layout.render(&record), "???:0 ???\n");
    }
}
