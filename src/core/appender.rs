//! Appender trait for log output destinations

use super::error::Result;
use super::log_record::LogRecord;

/// A destination for rendered log lines.
///
/// `line` is the fully rendered, newline-terminated output; `record` is the
/// source record, available for per-destination decisions such as stream
/// routing or coloring. Implementations must write each line as a single
/// unit so concurrent callers never interleave partial lines.
pub trait Appender: Send + Sync {
    fn append(&mut self, record: &LogRecord, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
