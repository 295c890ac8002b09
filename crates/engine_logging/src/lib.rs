#![deny(missing_docs)]
//! Shared logging utilities for the assistant workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase,
//! the logger initializer used by the terminal front end, and a minimal test
//! initializer for the global logger.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to the given file, truncating it on startup.
    File(PathBuf),
    /// Write to the terminal (stderr/stdout mixed).
    Terminal,
    /// Write to both the file and the terminal.
    Both(PathBuf),
}

/// Initializes the global logger for the given destination.
///
/// Returns `false` when no logger could be installed, either because the log
/// file could not be created or because a logger was already set.
pub fn initialize(destination: LogDestination, level: LevelFilter) -> bool {
    match build_loggers(destination, level) {
        Some(loggers) => CombinedLogger::init(loggers).is_ok(),
        None => false,
    }
}

/// Builds the loggers for a destination without installing them.
///
/// `File` yields `None` when the file cannot be created; `Both` falls back to
/// the terminal logger alone.
fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
) -> Option<Vec<Box<dyn SharedLogger>>> {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File(path) => vec![create_file_logger(&path, level, config)?],
        LogDestination::Terminal => vec![TermLogger::new(
            level,
            config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )],
        LogDestination::Both(path) => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(&path, level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };
    Some(loggers)
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_destination_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state").join("app.log");

        let loggers = build_loggers(LogDestination::File(path.clone()), LevelFilter::Info);
        assert_eq!(loggers.map(|l| l.len()), Some(1));
        assert!(path.is_file());
    }

    #[test]
    fn unwritable_file_destination_installs_nothing() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let loggers = build_loggers(
            LogDestination::File(blocker.join("app.log")),
            LevelFilter::Info,
        );
        assert!(loggers.is_none());
    }

    #[test]
    fn terminal_destination_has_one_logger() {
        let loggers = build_loggers(LogDestination::Terminal, LevelFilter::Warn);
        assert_eq!(loggers.map(|l| l.len()), Some(1));
    }

    #[test]
    fn both_destination_keeps_terminal_when_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.log");
        let loggers = build_loggers(LogDestination::Both(path.clone()), LevelFilter::Info);
        assert_eq!(loggers.map(|l| l.len()), Some(2));
        assert!(path.is_file());

        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let loggers = build_loggers(
            LogDestination::Both(blocker.join("app.log")),
            LevelFilter::Info,
        );
        assert_eq!(loggers.map(|l| l.len()), Some(1));
    }
}
