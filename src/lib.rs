//! Appends lines, optionally timestamped, to a log file in a configured
//! directory, or rewrites the whole file at once.

pub mod logger;
pub mod model;

pub use logger::FileLogger;
pub use model::error::{LoggerError, Result};
