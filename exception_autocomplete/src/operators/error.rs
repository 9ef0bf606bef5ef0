//! Operator lookup and applicability errors

use crate::{fields::FieldType, log_error, logging::codes};

/// Result type for operator operations
pub type OperatorResult<T> = Result<T, OperatorError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperatorError {
    #[error("Unknown operator '{value}'")]
    UnknownOperator { value: String },

    #[error("Operator '{operator}' cannot be used with field '{field_name}' of type '{field_type}'")]
    NotApplicable {
        operator: &'static str,
        field_name: String,
        field_type: FieldType,
    },
}

impl OperatorError {
    pub fn unknown_operator(value: &str) -> Self {
        Self::UnknownOperator {
            value: value.to_string(),
        }
    }

    pub fn not_applicable(operator: &'static str, field_name: &str, field_type: FieldType) -> Self {
        Self::NotApplicable {
            operator,
            field_name: field_name.to_string(),
            field_type,
        }
    }

    pub fn error_code(&self) -> codes::Code {
        match self {
            Self::UnknownOperator { .. } => codes::operators::UNKNOWN_OPERATOR,
            Self::NotApplicable { .. } => codes::operators::OPERATOR_NOT_APPLICABLE,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            Self::UnknownOperator { .. } => "UnknownOperator",
            Self::NotApplicable { .. } => "NotApplicable",
        }
    }

    /// Log this error using global logging macros
    pub fn log_error(&self) {
        log_error!(self.error_code(), &self.to_string(),
            "error_type" => self.error_type());
    }
}
