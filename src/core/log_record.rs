//! Log record structure and call-site capture

use super::log_context::LogContext;
use super::log_level::LogLevel;
use super::request_context::UNKNOWN_REQUEST_ID;
use chrono::{DateTime, Utc};
use std::panic::Location;
use std::path::Path;

/// Where a log call was made.
///
/// Captured at the application call site, not inside the library: every
/// public log method is `#[track_caller]`, so `CallSite::caller()` reports
/// the frame that invoked the facade regardless of how many internal
/// delegations sit in between. The macros capture `file!()`/`line!()` and the
/// enclosing function path directly instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl CallSite {
    /// Sentinel used when no call-site information is available.
    pub const UNKNOWN: CallSite = CallSite {
        file: "???",
        line: 0,
        function: "???",
    };

    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file, line, function }
    }

    /// Capture the caller's file and line. The function name cannot be
    /// recovered from a `Location`, so it stays at the sentinel; the logging
    /// macros supply it.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            function: Self::UNKNOWN.function,
        }
    }

    /// Basename of the source file, as rendered by `%file%`.
    pub fn file_basename(&self) -> &str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

/// Immutable snapshot of one log call, the input to rendering.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub timestamp: DateTime<Utc>,
    pub logger: String,
    pub message: String,
    pub fields: LogContext,
    pub site: CallSite,
    pub request_id: String,
}

impl LogRecord {
    /// Sanitize the message so one call renders as exactly one output line,
    /// and injected newlines cannot forge additional entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            logger: "main".to_string(),
            message: Self::sanitize_message(&message),
            fields: LogContext::new(),
            site: CallSite::UNKNOWN,
            request_id: UNKNOWN_REQUEST_ID.to_string(),
        }
    }

    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = logger.into();
        self
    }

    pub fn with_site(mut self, site: CallSite) -> Self {
        self.site = site;
        self
    }

    pub fn with_fields(mut self, fields: LogContext) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }
}
