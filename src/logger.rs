use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{self, Path, PathBuf};

use chrono::NaiveDateTime;

use crate::model::error::{LoggerError, Result};

const DEFAULT_EXTENSION: &str = ".log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Writes to `<directory_path><file_name>`.
///
/// The file is opened and closed inside each call; nothing is held open
/// between calls. `append` and `write_all_lines` never return an error:
/// any failure, including use after `close`, comes back as `false`.
#[derive(Debug, Default)]
pub struct FileLogger {
    directory_path: Option<String>,
    file_name: Option<String>,
    closed: bool,
}

impl FileLogger {
    pub fn new() -> Self {
        FileLogger::default()
    }

    pub fn with_location(directory_path: &str, file_name: &str) -> Result<Self> {
        let mut logger = FileLogger::new();
        logger.set_directory_path(directory_path)?;
        logger.set_file_name(file_name)?;
        Ok(logger)
    }

    pub fn directory_path(&self) -> Option<&str> {
        self.directory_path.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Full path of the log file, once both parts are configured.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        match (&self.directory_path, &self.file_name) {
            (Some(dir), Some(name)) => Some(PathBuf::from(format!("{dir}{name}"))),
            _ => None,
        }
    }

    /// Stores `path` with a trailing separator. The directory must exist now.
    pub fn set_directory_path(&mut self, path: &str) -> Result<()> {
        if path.is_empty() || !Path::new(path).is_dir() {
            return Err(LoggerError::InvalidArgument(format!(
                "directory does not exist: {path:?}"
            )));
        }

        let mut normalized = path.to_string();
        if !normalized.ends_with(path::is_separator) {
            normalized.push(path::MAIN_SEPARATOR);
        }

        self.directory_path = Some(normalized);
        Ok(())
    }

    /// Stores `name`, adding `.log` if it has no extension.
    pub fn set_file_name(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(LoggerError::InvalidArgument(
                "file name must not be empty".to_string(),
            ));
        }

        let name = if name.contains('.') {
            name.to_string()
        } else {
            format!("{name}{DEFAULT_EXTENSION}")
        };

        self.file_name = Some(name);
        Ok(())
    }

    /// Returns true if `message` was written as a new line at the end of the file.
    pub fn append(&self, message: &str, append_timestamp: bool) -> bool {
        match self.try_append(message, append_timestamp) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(error = %err, "append to log file failed");
                false
            }
        }
    }

    /// Returns true if the file was truncated and every line written.
    pub fn write_all_lines<I>(&self, lines: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        match self.try_write_all_lines(lines) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(error = %err, "rewrite of log file failed");
                false
            }
        }
    }

    /// Safe to call more than once.
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            tracing::trace!(file = ?self.log_file_path(), "file logger closed");
        }
    }

    fn try_append(&self, message: &str, append_timestamp: bool) -> Result<()> {
        let path = self.writable_path()?;
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = BufWriter::new(file);

        if append_timestamp {
            let now = chrono::Local::now().naive_local();
            write!(writer, "{}; ", format_timestamp(&now))?;
        }
        writer.write_all(message.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn try_write_all_lines<I>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let path = self.writable_path()?;
        let mut writer = BufWriter::new(File::create(&path)?);

        for line in lines {
            writer.write_all(line.as_ref().as_bytes())?;
            writer.write_all(LINE_ENDING.as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }

    fn writable_path(&self) -> Result<PathBuf> {
        if self.closed {
            return Err(LoggerError::Closed);
        }

        let dir = self
            .directory_path
            .as_deref()
            .ok_or(LoggerError::DirectoryUnset)?;
        // Checked again here since the directory can be removed after it was set.
        if !Path::new(dir).is_dir() {
            return Err(LoggerError::DirectoryMissing(dir.to_string()));
        }

        let name = self.file_name.as_deref().ok_or(LoggerError::FileNameUnset)?;
        Ok(PathBuf::from(format!("{dir}{name}")))
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        self.close();
    }
}

pub(crate) fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
