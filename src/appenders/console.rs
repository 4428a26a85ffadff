//! Console appender implementation

use crate::core::{Appender, LogLevel, LogRecord, Result};
use colored::Colorize;
use std::io::Write;

/// Writes rendered lines to the terminal. `Error`-level lines go to stderr,
/// everything else to stdout. Each line is written with a single locked
/// write so concurrent callers cannot tear it.
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord, line: &str) -> Result<()> {
        let output = if self.use_colors {
            let body = line.strip_suffix('\n').unwrap_or(line);
            format!("{}\n", body.color(record.level.color_code()))
        } else {
            line.to_string()
        };

        match record.level {
            LogLevel::Error => {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                handle.write_all(output.as_bytes())?;
            }
            _ => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(output.as_bytes())?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both streams since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
