pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Configuration constants for the dashboard, organized by functional area.

    // =============================================================================
    // BACKEND CONFIGURATION
    // =============================================================================

    /// Backend address used when nothing else is configured.
    pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

    /// Environment variable overriding the configured backend address.
    pub const BACKEND_URL_ENV: &str = "MAILQ_BACKEND_URL";

    /// Multipart field name the backend reads the CSV from.
    pub const UPLOAD_FIELD_NAME: &str = "emails";

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between workers and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Rows of the pending queue shown in the dashboard.
    pub const MAX_PENDING_ROWS: usize = 8;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    pub mod polling {
        use std::time::Duration;

        /// Interval between status polls (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 2_000;

        /// Lower bound for a user-supplied interval, to avoid a busy loop
        pub const MIN_POLL_INTERVAL_MS: u64 = 100;

        /// Clamp a requested interval to the supported minimum
        pub fn clamp_interval(ms: u64) -> Duration {
            Duration::from_millis(ms.max(MIN_POLL_INTERVAL_MS))
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        /// TCP connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds). Large batches take a while to post.
        pub const REQUEST_TIMEOUT_SECS: u64 = 60;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen stays up (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 1_500;
}
