//! File appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Appends rendered lines to a file. The file is opened in append mode at
/// construction and never rotated; the parent directory must already exist.
#[derive(Debug)]
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_appender(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, _record: &LogRecord, line: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data reaches disk
        let _ = self.flush();
    }
}
