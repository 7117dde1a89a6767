//! Logging config: optional log file and the debug toggle.

use std::env;

/// Passed to `init_tracing`; replaces process-wide debug flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// LOG_FILE; when set, log lines are teed to this file.
    pub log_file: Option<String>,
    /// BOT_DEBUG; raises the default level to `debug`.
    pub debug: bool,
}

impl LogConfig {
    /// Loads LOG_FILE and BOT_DEBUG. Neither is required.
    pub fn from_env() -> Self {
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());
        let debug = env::var("BOT_DEBUG")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self { log_file, debug }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
