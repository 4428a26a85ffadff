//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod output_format;
pub mod pattern;
pub mod request_context;
pub mod timestamp;

pub use appender::Appender;
pub use config::{Destination, LoggerConfig, RenderMode, DEFAULT_TIMESTAMP_FORMAT};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use log_record::{CallSite, LogRecord};
pub use logger::{global, init, Logger, LoggerBuilder};
pub use output_format::OutputFormat;
pub use pattern::{
    FunctionNameFormat, IdentityMessageFormat, MessageFormat, PatternLayout,
    ShortFunctionNameFormat, DEFAULT_PATTERN,
};
pub use request_context::{RequestContext, REQUEST_ID_KEY, UNKNOWN_REQUEST_ID};
pub use timestamp::TimestampFormat;
