//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Total time budget for one request, body included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How long the UI loop waits for a terminal event before redrawing
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Response panel text before the first request is sent
pub const IDLE_PLACEHOLDER: &str = "Press Enter to send a request";

/// Response panel text while a request is in flight
pub const SENDING_PLACEHOLDER: &str = "⏳ Sending request...";

/// Application name
pub const APP_NAME: &str = "thunder-tui";

/// Log file written inside the configured log directory
pub const LOG_FILE_NAME: &str = "thunder-tui.log";

/// Environment variable holding the tracing filter directive
pub const LOG_FILTER_ENV: &str = "THUNDER_TUI_LOG";

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV: &str = "THUNDER_TUI_LOG_DIR";
