// RUNTIME PREFERENCES (User Experience)
//
// Runtime preferences only shape logging output. Nothing here feeds the
// operator, validation or projection decisions.

use super::error::{ConfigError, ConfigResult};
use crate::{log_error, log_success, logging::codes};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Minimum level emitted by the configured service
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a runtime configuration document.
    ///
    /// Missing tables and keys fall back to the environment-derived defaults.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Load a runtime configuration file
    ///
    /// Loading does not touch the logger; pass the result to
    /// `logging::init_global_logging_from` to apply it.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();

        let result = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(path, e))
            .and_then(|content| Self::from_toml_str(&content));

        match &result {
            Ok(config) => {
                log_success!(codes::success::CONFIGURATION_LOADED, "Runtime configuration loaded",
                    "path" => path.display(),
                    "min_log_level" => config.logging.min_log_level.as_str());
            }
            Err(error) => {
                log_error!(error.error_code(), "Runtime configuration failed to load",
                    "path" => path.display(),
                    "error_type" => error.error_type(),
                    "error" => error);
            }
        }

        result
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const LOGGING_USE_STRUCTURED: &str = "EXC_LOGGING_USE_STRUCTURED";
    pub const LOGGING_MIN_LEVEL: &str = "EXC_LOGGING_MIN_LEVEL";
}
