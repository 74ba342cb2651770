use crate::backend::error::BackendError;
use crate::controller::ControllerError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Log level for a failed status poll.
    pub fn classify_fetch_error(&self, error: &BackendError) -> LogLevel {
        match (error.status(), error) {
            // Non-critical: Temporary server issues
            (Some(429), _) => LogLevel::Debug,
            (Some(500..=599), _) => LogLevel::Warn,

            // Wrong URL or an incompatible backend
            (Some(400..=499), _) => LogLevel::Error,
            (_, BackendError::Decode(_)) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }

    /// Log level for a failed upload. The user asked for it, so it is never quiet.
    pub fn classify_upload_error(&self, error: &ControllerError) -> LogLevel {
        match error {
            ControllerError::Backend(BackendError::Http { status, .. })
                if (500..=599).contains(status) =>
            {
                LogLevel::Warn
            }
            ControllerError::Backend(BackendError::Reqwest(_)) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> BackendError {
        BackendError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn fetch_errors_by_status() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Debug);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Error);

        let decode: BackendError = serde_json::from_str::<u64>("{").unwrap_err().into();
        assert_eq!(classifier.classify_fetch_error(&decode), LogLevel::Error);
    }

    #[test]
    fn upload_errors_are_at_least_warnings() {
        let classifier = ErrorClassifier::new();
        let bad_csv = ControllerError::Backend(http(400));
        let down = ControllerError::Backend(http(502));
        let missing = ControllerError::ReadFile {
            path: "missing.csv".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(classifier.classify_upload_error(&bad_csv), LogLevel::Error);
        assert_eq!(classifier.classify_upload_error(&down), LogLevel::Warn);
        assert_eq!(classifier.classify_upload_error(&missing), LogLevel::Error);
    }

    #[test]
    fn log_level_converts_to_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    }
}
