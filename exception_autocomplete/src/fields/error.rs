//! Field descriptor loading errors

use crate::{log_error, logging::codes};

/// Result type for field descriptor loading
pub type FieldResult<T> = Result<T, FieldError>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    #[error("Invalid field descriptor JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Field descriptor at index {index} has an empty name")]
    EmptyName { index: usize },
}

impl FieldError {
    pub fn empty_name(index: usize) -> Self {
        Self::EmptyName { index }
    }

    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::InvalidJson { .. } => codes::fields::INVALID_FIELD_JSON,
            Self::EmptyName { .. } => codes::fields::EMPTY_FIELD_NAME,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidJson { .. } => "InvalidJson",
            Self::EmptyName { .. } => "EmptyName",
        }
    }

    /// Log this error using global logging macros
    pub fn log_error(&self) {
        log_error!(self.error_code(), &self.to_string(),
            "error_type" => self.error_type());
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidJson {
            message: error.to_string(),
            line: error.line(),
            column: error.column(),
        }
    }
}
