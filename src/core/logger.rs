//! Logger facade

use super::appender::Appender;
use super::config::{Destination, LoggerConfig, RenderMode};
use super::error::{LoggerError, Result};
use super::log_context::LogContext;
use super::log_level::LogLevel;
use super::log_record::{CallSite, LogRecord};
use super::output_format::OutputFormat;
use super::pattern::PatternLayout;
use super::request_context::{RequestContext, UNKNOWN_REQUEST_ID};
use super::timestamp::TimestampFormat;
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

/// Shared state behind every clone of a [`Logger`].
///
/// Level and format are immutable after construction and read without
/// locking; the appender set is the only mutable shared resource. Its write
/// guard is held for the duration of one line's broadcast, which is what
/// keeps concurrently written lines whole.
struct LoggerCore {
    name: String,
    min_level: LogLevel,
    format: OutputFormat,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
}

/// The object applications log through.
///
/// Cloning is cheap and shares the underlying level gate, formatter, and
/// destinations. [`Logger::with_context`] returns such a clone with a
/// request context bound to it, so every call made through it resolves its
/// correlation ID from that context.
///
/// A log call never returns an error to the caller: destination failures are
/// reported to stderr and do not stop the broadcast to the remaining
/// destinations.
#[derive(Clone)]
pub struct Logger {
    core: Arc<LoggerCore>,
    context: Option<RequestContext>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.core.name)
            .field("min_level", &self.core.min_level)
            .field("format", &self.core.format)
            .field("has_context", &self.context.is_some())
            .finish()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use ctxlog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .appender(ConsoleAppender::new())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a logger from a resolved configuration value.
    ///
    /// Invalid values degrade to defaults: an unrecognized level becomes
    /// `Info`, an empty destination set becomes the console. A file
    /// destination that cannot be opened is reported to stderr and skipped.
    /// The only failure is [`LoggerError::NoDestination`], returned when not
    /// a single destination could be established.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let format = match config.format {
            RenderMode::Text => OutputFormat::Pattern(
                PatternLayout::new(config.output_pattern.clone())
                    .with_timestamp_format(TimestampFormat::parse(&config.timestamp_format)),
            ),
            RenderMode::Json => OutputFormat::Json,
        };

        let mut builder = Logger::builder()
            .min_level(LogLevel::parse_lenient(&config.minimum_level))
            .format(format);

        let default_destinations = [Destination::Console];
        let destinations: &[Destination] = if config.destinations.is_empty() {
            &default_destinations
        } else {
            &config.destinations
        };

        let mut established = 0;
        for destination in destinations {
            match destination {
                Destination::Console => {
                    builder = builder.appender(ConsoleAppender::new());
                    established += 1;
                }
                Destination::File { path } => match FileAppender::new(path) {
                    Ok(appender) => {
                        builder = builder.appender(appender);
                        established += 1;
                    }
                    Err(e) => {
                        eprintln!(
                            "[ctxlog] skipping file destination '{}': {}",
                            path.display(),
                            e
                        );
                    }
                },
            }
        }

        if established == 0 {
            return Err(LoggerError::NoDestination);
        }
        Ok(builder.build())
    }

    /// Whether a call at `level` passes the level gate.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.core.min_level
    }

    /// Bind a request context to a clone of this logger. The clone shares
    /// the gate, formatter, and destinations; only context resolution
    /// changes. Calls that pass an explicit context still take precedence
    /// over the bound one.
    #[must_use]
    pub fn with_context(&self, context: RequestContext) -> Logger {
        Logger {
            core: Arc::clone(&self.core),
            context: Some(context),
        }
    }

    /// The bound request context, if any.
    pub fn context(&self) -> Option<&RequestContext> {
        self.context.as_ref()
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(level, message.into(), LogContext::new(), CallSite::caller(), None);
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[track_caller]
    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Log with free-form structured fields.
    #[track_caller]
    pub fn log_with_fields(&self, level: LogLevel, message: impl Into<String>, fields: LogContext) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(level, message.into(), fields, CallSite::caller(), None);
    }

    /// Helper for structured info logging
    #[track_caller]
    pub fn info_with_fields(&self, message: impl Into<String>, fields: LogContext) {
        self.log_with_fields(LogLevel::Info, message, fields);
    }

    /// Log resolving the correlation ID from an explicit context, overriding
    /// any context bound via [`Logger::with_context`].
    #[track_caller]
    pub fn log_in_context(
        &self,
        context: &RequestContext,
        level: LogLevel,
        message: impl Into<String>,
    ) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(level, message.into(), LogContext::new(), CallSite::caller(), Some(context));
    }

    /// Entry point used by the logging macros, which capture the call site
    /// themselves.
    pub fn log_with_site(&self, level: LogLevel, message: String, site: CallSite) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(level, message, LogContext::new(), site, None);
    }

    /// Assemble the record, render it once, and broadcast the line to every
    /// destination. A failing destination is reported and skipped; it never
    /// fails the call or starves the other destinations.
    fn dispatch(
        &self,
        level: LogLevel,
        message: String,
        fields: LogContext,
        site: CallSite,
        context_override: Option<&RequestContext>,
    ) {
        let request_id = context_override
            .or(self.context.as_ref())
            .map(|ctx| ctx.request_id().to_string())
            .unwrap_or_else(|| UNKNOWN_REQUEST_ID.to_string());

        let record = LogRecord::new(level, message)
            .with_logger(self.core.name.clone())
            .with_site(site)
            .with_fields(fields)
            .with_request_id(request_id);

        let line = self.core.format.render(&record);

        let mut appenders = self.core.appenders.write();
        for appender in appenders.iter_mut() {
            if let Err(e) = appender.append(&record, &line) {
                eprintln!("[ctxlog] appender '{}' failed: {}", appender.name(), e);
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.core.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use ctxlog::prelude::*;
///
/// let logger = Logger::builder()
///     .name("gateway")
///     .min_level(LogLevel::Debug)
///     .appender(ConsoleAppender::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    name: String,
    min_level: LogLevel,
    format: OutputFormat,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "main".to_string(),
            min_level: LogLevel::Info,
            format: OutputFormat::default(),
            appenders: Vec::new(),
        }
    }

    /// Set the logger name rendered by `%logger%`
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the render mode
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<OutputFormat>) -> Self {
        self.format = format.into();
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Build the Logger. Construction is atomic: no call can observe a
    /// half-configured logger.
    pub fn build(self) -> Logger {
        Logger {
            core: Arc::new(LoggerCore {
                name: self.name,
                min_level: self.min_level,
                format: self.format,
                appenders: RwLock::new(self.appenders),
            }),
            context: None,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide default logger. Call once at process start;
/// fails if a logger was already installed (including the lazily created
/// default, if [`global`] was called first).
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// The process-wide default logger, for call sites that cannot have one
/// threaded through. If [`init`] was never called, the first access installs
/// a console logger with default configuration.
pub fn global() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| {
        Logger::builder()
            .appender(ConsoleAppender::new())
            .build()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Test double collecting every line it receives.
    #[derive(Clone, Default)]
    struct CollectingAppender {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl CollectingAppender {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().clone()
        }
    }

    impl Appender for CollectingAppender {
        fn append(&mut self, _record: &LogRecord, line: &str) -> Result<()> {
            self.lines.lock().push(line.to_string());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "collecting"
        }
    }

    fn message_only_logger(min_level: LogLevel) -> (Logger, CollectingAppender) {
        let sink = CollectingAppender::default();
        let logger = Logger::builder()
            .min_level(min_level)
            .format(PatternLayout::new("%requestId% %message%"))
            .appender(sink.clone())
            .build();
        (logger, sink)
    }

    #[test]
    fn test_level_gate_suppresses_below_minimum() {
        let (logger, sink) = message_only_logger(LogLevel::Warn);

        logger.debug("dropped");
        logger.info("dropped");
        logger.warn("kept");
        logger.error("kept");

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("kept\n"));
    }

    #[test]
    fn test_unbound_logger_renders_unknown_request_id() {
        let (logger, sink) = message_only_logger(LogLevel::Info);
        logger.info("x");
        assert_eq!(sink.lines(), vec!["unknown x\n".to_string()]);
    }

    #[test]
    fn test_with_context_binds_request_id() {
        let (logger, sink) = message_only_logger(LogLevel::Info);
        let ctx = RequestContext::new().with_request_id("req-9");

        logger.with_context(ctx).info("x");
        assert_eq!(sink.lines(), vec!["req-9 x\n".to_string()]);
    }

    #[test]
    fn test_explicit_context_overrides_bound() {
        let (logger, sink) = message_only_logger(LogLevel::Info);
        let bound = RequestContext::new().with_request_id("bound");
        let explicit = RequestContext::new().with_request_id("explicit");

        logger
            .with_context(bound)
            .log_in_context(&explicit, LogLevel::Info, "x");
        assert_eq!(sink.lines(), vec!["explicit x\n".to_string()]);
    }

    #[test]
    fn test_with_context_shares_destinations() {
        let (logger, sink) = message_only_logger(LogLevel::Info);
        let scoped = logger.with_context(RequestContext::new().with_request_id("req-1"));

        logger.info("parent");
        scoped.info("child");

        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn test_failing_appender_does_not_starve_others() {
        struct FailingAppender;
        impl Appender for FailingAppender {
            fn append(&mut self, _record: &LogRecord, _line: &str) -> Result<()> {
                Err(LoggerError::writer("simulated failure"))
            }
            fn flush(&mut self) -> Result<()> {
                Ok(())
            }
            fn name(&self) -> &str {
                "failing"
            }
        }

        let sink = CollectingAppender::default();
        let logger = Logger::builder()
            .format(PatternLayout::new("%message%"))
            .appender(FailingAppender)
            .appender(sink.clone())
            .build();

        logger.info("still delivered");
        assert_eq!(sink.lines(), vec!["still delivered\n".to_string()]);
    }

    #[test]
    fn test_fields_precede_defaults_in_json() {
        let sink = CollectingAppender::default();
        let logger = Logger::builder()
            .format(OutputFormat::Json)
            .appender(sink.clone())
            .build();

        logger.info_with_fields("hello", LogContext::new().with_field("user_id", 7));

        let lines = sink.lines();
        let parsed: serde_json::Value = serde_json::from_str(lines[0].trim_end()).unwrap();
        assert_eq!(parsed["message"], "hello");
        assert_eq!(parsed["user_id"], 7);
        assert_eq!(parsed["requestID"], UNKNOWN_REQUEST_ID);
    }

    #[test]
    fn test_from_config_defaults() {
        let logger = Logger::from_config(&LoggerConfig::default()).unwrap();
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_from_config_invalid_level_degrades_to_info() {
        let config = LoggerConfig {
            minimum_level: "chatty".to_string(),
            ..LoggerConfig::default()
        };
        let logger = Logger::from_config(&config).unwrap();
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_from_config_empty_destinations_degrade_to_console() {
        let config = LoggerConfig {
            destinations: Vec::new(),
            ..LoggerConfig::default()
        };
        assert!(Logger::from_config(&config).is_ok());
    }

    #[test]
    fn test_from_config_unwritable_file_only_is_fatal() {
        let config = LoggerConfig {
            destinations: vec![Destination::File {
                path: "/nonexistent-dir/deeper/app.log".into(),
            }],
            ..LoggerConfig::default()
        };
        let err = Logger::from_config(&config).unwrap_err();
        assert!(matches!(err, LoggerError::NoDestination));
    }

    #[test]
    fn test_logger_name_rendered() {
        let sink = CollectingAppender::default();
        let logger = Logger::builder()
            .name("gateway")
            .format(PatternLayout::new("%logger% %message%"))
            .appender(sink.clone())
            .build();

        logger.info("up");
        assert_eq!(sink.lines(), vec!["gateway up\n".to_string()]);
    }

    #[test]
    fn test_builder_default() {
        let logger = LoggerBuilder::default().build();
        assert!(logger.enabled(LogLevel::Info));
        assert!(logger.context().is_none());
    }
}
