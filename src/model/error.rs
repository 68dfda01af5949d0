use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    /// Rejected directory path or file name. Returned by the setters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("logger is closed")]
    Closed,
    #[error("log directory is not set")]
    DirectoryUnset,
    #[error("log directory does not exist: {0}")]
    DirectoryMissing(String),
    #[error("log file name is not set")]
    FileNameUnset,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// True for errors a caller can fix by reconfiguring the logger.
    pub fn is_configuration(&self) -> bool {
        matches!(self, LoggerError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, LoggerError>;
