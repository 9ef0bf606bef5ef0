//! Runtime configuration errors

use crate::logging::codes;
use std::path::PathBuf;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn error_code(&self) -> codes::Code {
        codes::system::CONFIGURATION_ERROR
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Io { .. } => "Io",
            Self::Parse(_) => "Parse",
        }
    }
}
