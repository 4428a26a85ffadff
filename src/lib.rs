//! # ctxlog
//!
//! A context-aware logging library with pattern-based formatting, request
//! correlation, and multiple output targets.
//!
//! ## Features
//!
//! - **Pattern Formatting**: `%token%` templates rendered per call, with
//!   pluggable message and function-name transforms
//! - **Request Correlation**: an immutable request context carries the
//!   correlation ID to every log call in a unit of work
//! - **Call-Site Metadata**: file, line, and function captured at the
//!   application call site
//! - **Multiple Destinations**: console and file, written best-effort
//! - **Thread Safe**: designed for concurrent environments
//!
//! ## Quick start
//!
//! ```
//! use ctxlog::prelude::*;
//!
//! let logger = Logger::builder()
//!     .min_level(LogLevel::Debug)
//!     .appender(ConsoleAppender::new())
//!     .build();
//!
//! let ctx = RequestContext::new().with_request_id("req-42");
//! let scoped = logger.with_context(ctx);
//! scoped.info("request accepted");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, CallSite, Destination, FieldValue, FunctionNameFormat, IdentityMessageFormat,
        LogContext, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        MessageFormat, OutputFormat, PatternLayout, RenderMode, RequestContext, Result,
        ShortFunctionNameFormat, TimestampFormat, DEFAULT_PATTERN, UNKNOWN_REQUEST_ID,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    global, init, Appender, CallSite, Destination, FieldValue, FunctionNameFormat,
    IdentityMessageFormat, LogContext, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, MessageFormat, OutputFormat, PatternLayout, RenderMode, RequestContext, Result,
    ShortFunctionNameFormat, TimestampFormat, DEFAULT_PATTERN, DEFAULT_TIMESTAMP_FORMAT,
    REQUEST_ID_KEY, UNKNOWN_REQUEST_ID,
};
