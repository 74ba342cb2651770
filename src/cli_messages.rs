//! CLI command messaging system
//!
//! Consistent console output for the one-shot commands (`upload`, `status`,
//! `set-backend`, `reset-config`) and for session start and shutdown.

use std::time::Duration;

const YELLOW: &str = "\x1b[1;33m";
const BRIGHT_RED: &str = "\x1b[1;91m";
const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

fn print_tagged(color: &str, tag: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{}[{}]{} {}", color, tag, RESET, title);
    } else {
        println!("{}[{}]{} {}\t {}", color, tag, RESET, title, details);
    }
}

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    print_tagged(YELLOW, "INFO", title, details);
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    print_tagged(BRIGHT_RED, "WARN", title, details);
}

/// Print CLI command error. Goes to stderr so scripts can tell it apart.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}[ERROR]{} {}", RED, RESET, title);
    if let Some(details) = details {
        eprintln!("{}[ERROR]{} Details: {}", RED, RESET, details);
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    print_tagged(GREEN, "SUCCESS", title, details);
}

/// Summary of a dashboard session about to start.
pub fn session_start_line(mode: &str, backend_url: &str, poll_interval: Duration) -> String {
    format!(
        "{} mode, polling {} every {}ms",
        mode,
        backend_url,
        poll_interval.as_millis()
    )
}

pub fn print_session_starting(mode: &str, backend_url: &str, poll_interval: Duration) {
    print_info(
        "Starting dashboard...",
        &session_start_line(mode, backend_url, poll_interval),
    );
}

pub fn print_session_shutdown() {
    print_info("Shutting down...", "");
}

pub fn print_session_exit_success() {
    print_success("mailq-dash exited successfully", "");
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
