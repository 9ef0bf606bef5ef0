//! Parameter validation for exception entries
//!
//! Rules, in order:
//! 1. an empty value (absent or blank) is rejected only when the field is
//!    required and has been touched
//! 2. a non-empty value for a date field must be a date or a date math
//!    expression, whatever the flags say
//! 3. everything else is accepted

pub mod date;
pub mod date_math;

pub use date_math::{Anchor, DateMathError, DateMathExpr, DateMathOp, DateMathResult, TimeUnit};

use crate::fields::FieldDescriptor;
use crate::log_debug;
use crate::logging::codes;

/// Form state for a single parameter input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationFlags {
    pub is_required: bool,
    pub touched: bool,
}

impl ValidationFlags {
    pub fn new(is_required: bool, touched: bool) -> Self {
        Self {
            is_required,
            touched,
        }
    }

    /// Required-ness is only enforced after the user has interacted with the input
    pub fn enforces_required(&self) -> bool {
        self.is_required && self.touched
    }
}

/// Outcome of checking a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamVerdict {
    Accepted,
    MissingRequired,
    InvalidDate,
}

impl ParamVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn error_code(&self) -> Option<codes::Code> {
        match self {
            Self::Accepted => None,
            Self::MissingRequired => Some(codes::validation::MISSING_REQUIRED_VALUE),
            Self::InvalidDate => Some(codes::validation::INVALID_DATE),
        }
    }
}

/// Check a parameter value against a field and the form flags
pub fn check_param(
    value: Option<&str>,
    field: &FieldDescriptor,
    flags: ValidationFlags,
) -> ParamVerdict {
    // Blank counts as empty, but format checks see the value as typed
    let value = value.filter(|v| !v.trim().is_empty());

    let verdict = match value {
        None if flags.enforces_required() => ParamVerdict::MissingRequired,
        None => ParamVerdict::Accepted,
        Some(v) if field.is_date() && !is_valid_date_param(v) => ParamVerdict::InvalidDate,
        Some(_) => ParamVerdict::Accepted,
    };

    log_debug!("Checked parameter",
        "field" => field.name.as_str(),
        "verdict" => format!("{:?}", verdict),
        "required" => flags.is_required,
        "touched" => flags.touched);

    verdict
}

/// Whether `value` is acceptable for `field` given the form flags
pub fn is_param_valid(
    value: Option<&str>,
    field: &FieldDescriptor,
    is_required: bool,
    touched: bool,
) -> bool {
    check_param(value, field, ValidationFlags::new(is_required, touched)).is_valid()
}

fn is_valid_date_param(value: &str) -> bool {
    date::is_valid_date(value) || date_math::is_valid_date_math(value)
}
