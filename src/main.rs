use std::env;
use std::process;

use file_logger::{FileLogger, LoggerError};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: file_logger <directory> <file-name> append <message> [--timestamp]\n       \
                     file_logger <directory> <file-name> write-lines <line>...";

fn main() {
    // Diagnostics about the logger go to stderr, never into the log file.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Error: write failed");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<bool, LoggerError> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        return Err(LoggerError::InvalidArgument(USAGE.to_string()));
    }

    let mut logger = FileLogger::with_location(&args[1], &args[2])?;

    let written = match args[3].as_str() {
        "append" => {
            let (message, timestamp) = match &args[4..] {
                [message] => (message, false),
                [message, flag] if flag == "--timestamp" => (message, true),
                _ => return Err(LoggerError::InvalidArgument(USAGE.to_string())),
            };
            logger.append(message, timestamp)
        }
        "write-lines" => logger.write_all_lines(&args[4..]),
        _ => return Err(LoggerError::InvalidArgument(USAGE.to_string())),
    };

    logger.close();
    Ok(written)
}
