//! Log level handling and logger setup.

pub use crate::error_classifier::LogLevel;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::env;
use std::fs::File;
use std::path::Path;

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Where diagnostic logs go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// stderr, for headless mode and one-shot commands.
    Terminal,
    /// A file; the TUI owns the terminal while it runs.
    File(&'a Path),
    /// Nothing is installed.
    Off,
}

/// Installs the global logger. A second call is a no-op.
pub fn init_logger(target: LogTarget<'_>) -> std::io::Result<()> {
    let level: LevelFilter = get_rust_log_level().into();
    let config = ConfigBuilder::new()
        .add_filter_allow_str("mailq_dash")
        .build();

    // `init` only fails when a logger is already installed.
    match target {
        LogTarget::Terminal => {
            let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
        }
        LogTarget::File(path) => {
            let _ = WriteLogger::init(level, config, File::create(path)?);
        }
        LogTarget::Off => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(parse_rust_log_level("mailq_dash=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("mailq_dash=debug,hyper=info"),
            LogLevel::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }

    #[test]
    fn file_logger_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mailq.log");
        init_logger(LogTarget::File(&path)).unwrap();
        assert!(path.exists());
    }
}
