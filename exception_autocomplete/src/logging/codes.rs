//! Consolidated log codes and classification system
//!
//! Single source of truth for every code the crate logs, together with its
//! behavioral metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl CodeMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const CONFIGURATION_ERROR: Code = Code::new("ERR003");
}

/// Field descriptor error codes
pub mod fields {
    use super::Code;

    pub const INVALID_FIELD_JSON: Code = Code::new("E010");
    pub const EMPTY_FIELD_NAME: Code = Code::new("E011");
}

/// Operator catalog error codes
pub mod operators {
    use super::Code;

    pub const UNKNOWN_OPERATOR: Code = Code::new("E020");
    pub const OPERATOR_NOT_APPLICABLE: Code = Code::new("E021");
}

/// Parameter validation codes
pub mod validation {
    use super::Code;

    pub const MISSING_REQUIRED_VALUE: Code = Code::new("E030");
    pub const INVALID_DATE: Code = Code::new("E031");
    pub const INVALID_DATE_MATH: Code = Code::new("E032");
    pub const DATE_OUT_OF_RANGE: Code = Code::new("E033");
}

/// Combo box projection codes
pub mod combo_box {
    use super::Code;

    pub const SELECTION_DROPPED: Code = Code::new("W040");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const FIELD_LIST_LOADED: Code = Code::new("I010");
    pub const CONFIGURATION_LOADED: Code = Code::new("I011");
}

// ============================================================================
// CODE METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        let entries = [
            // System
            CodeMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal error",
                "File a bug report with the logged context",
            ),
            CodeMetadata::new(
                "ERR003",
                "System",
                Severity::High,
                true,
                "Runtime configuration could not be loaded",
                "Check the configuration file path and TOML syntax",
            ),
            // Fields
            CodeMetadata::new(
                "E010",
                "Fields",
                Severity::Medium,
                true,
                "Field descriptor JSON is malformed",
                "Check the field list returned by the metadata source",
            ),
            CodeMetadata::new(
                "E011",
                "Fields",
                Severity::Medium,
                true,
                "Field descriptor has an empty name",
                "Supply a field name for every descriptor",
            ),
            // Operators
            CodeMetadata::new(
                "E020",
                "Operators",
                Severity::Medium,
                true,
                "Operator identifier is not part of the catalog",
                "Use one of the catalog operator values",
            ),
            CodeMetadata::new(
                "E021",
                "Operators",
                Severity::Low,
                true,
                "Operator cannot be used with the field type",
                "Pick an operator returned by select_operators",
            ),
            // Validation
            CodeMetadata::new(
                "E030",
                "Validation",
                Severity::Low,
                true,
                "Required parameter is empty",
                "Enter a value for the field",
            ),
            CodeMetadata::new(
                "E031",
                "Validation",
                Severity::Low,
                true,
                "Parameter is not a valid date",
                "Enter an ISO-8601 date or a date math expression",
            ),
            CodeMetadata::new(
                "E032",
                "Validation",
                Severity::Low,
                true,
                "Date math expression is malformed",
                "Use now or <date>|| followed by +N<unit>, -N<unit> or /<unit>",
            ),
            CodeMetadata::new(
                "E033",
                "Validation",
                Severity::Low,
                true,
                "Date math expression resolves outside the representable range",
                "Use smaller offsets",
            ),
            // Combo box
            CodeMetadata::new(
                "W040",
                "ComboBox",
                Severity::Low,
                true,
                "Selected value is not among the available options",
                "None, stale selections are dropped",
            ),
            // Success
            CodeMetadata::new(
                "I001",
                "System",
                Severity::Low,
                true,
                "Logging system initialized",
                "None",
            ),
            CodeMetadata::new(
                "I010",
                "Fields",
                Severity::Low,
                true,
                "Field list loaded",
                "None",
            ),
            CodeMetadata::new(
                "I011",
                "System",
                Severity::Low,
                true,
                "Runtime configuration loaded",
                "None",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_code_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_constant_has_metadata() {
        let all = [
            system::INTERNAL_ERROR,
            system::CONFIGURATION_ERROR,
            fields::INVALID_FIELD_JSON,
            fields::EMPTY_FIELD_NAME,
            operators::UNKNOWN_OPERATOR,
            operators::OPERATOR_NOT_APPLICABLE,
            validation::MISSING_REQUIRED_VALUE,
            validation::INVALID_DATE,
            validation::INVALID_DATE_MATH,
            validation::DATE_OUT_OF_RANGE,
            combo_box::SELECTION_DROPPED,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::FIELD_LIST_LOADED,
            success::CONFIGURATION_LOADED,
        ];

        for code in all {
            assert!(
                get_code_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(!is_recoverable("ERR001"));
        assert_eq!(get_category("E020"), "Operators");
        assert_eq!(get_category("W040"), "ComboBox");
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("X999"), "Unknown error");
        assert_eq!(get_action("X999"), "No specific action available");
        assert_eq!(get_category("X999"), "Unknown");
        assert_eq!(get_severity("X999"), Severity::Medium);
    }
}
