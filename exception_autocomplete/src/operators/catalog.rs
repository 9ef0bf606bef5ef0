//! Fixed operator catalog
//!
//! Operators are process-wide constants. Selection only ever returns copies of
//! these values, never new ones.

use super::error::{OperatorError, OperatorResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an operator compares the field against its parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorType {
    Match,
    MatchAny,
    Exists,
    List,
}

/// Whether matching documents are kept or excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorPolarity {
    Included,
    Excluded,
}

/// A named comparison usable in an exception entry
///
/// Serializes as its `value` identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Operator {
    pub message: &'static str,
    pub value: &'static str,
    pub kind: OperatorType,
    pub polarity: OperatorPolarity,
}

pub const IS_OPERATOR: Operator = Operator {
    message: "is",
    value: "is",
    kind: OperatorType::Match,
    polarity: OperatorPolarity::Included,
};

pub const IS_NOT_OPERATOR: Operator = Operator {
    message: "is not",
    value: "is_not",
    kind: OperatorType::Match,
    polarity: OperatorPolarity::Excluded,
};

pub const IS_ONE_OF_OPERATOR: Operator = Operator {
    message: "is one of",
    value: "is_one_of",
    kind: OperatorType::MatchAny,
    polarity: OperatorPolarity::Included,
};

pub const IS_NOT_ONE_OF_OPERATOR: Operator = Operator {
    message: "is not one of",
    value: "is_not_one_of",
    kind: OperatorType::MatchAny,
    polarity: OperatorPolarity::Excluded,
};

pub const EXISTS_OPERATOR: Operator = Operator {
    message: "exists",
    value: "exists",
    kind: OperatorType::Exists,
    polarity: OperatorPolarity::Included,
};

pub const DOES_NOT_EXIST_OPERATOR: Operator = Operator {
    message: "does not exist",
    value: "does_not_exist",
    kind: OperatorType::Exists,
    polarity: OperatorPolarity::Excluded,
};

pub const IS_IN_LIST_OPERATOR: Operator = Operator {
    message: "is in list",
    value: "is_in_list",
    kind: OperatorType::List,
    polarity: OperatorPolarity::Included,
};

pub const IS_NOT_IN_LIST_OPERATOR: Operator = Operator {
    message: "is not in list",
    value: "is_not_in_list",
    kind: OperatorType::List,
    polarity: OperatorPolarity::Excluded,
};

/// The generic catalog, in declared order
pub const EXCEPTION_OPERATORS: [Operator; 8] = [
    IS_OPERATOR,
    IS_NOT_OPERATOR,
    IS_ONE_OF_OPERATOR,
    IS_NOT_ONE_OF_OPERATOR,
    EXISTS_OPERATOR,
    DOES_NOT_EXIST_OPERATOR,
    IS_IN_LIST_OPERATOR,
    IS_NOT_IN_LIST_OPERATOR,
];

/// Operators applicable to boolean fields, in display order
pub const BOOLEAN_OPERATORS: [Operator; 4] = [
    IS_OPERATOR,
    IS_NOT_OPERATOR,
    EXISTS_OPERATOR,
    DOES_NOT_EXIST_OPERATOR,
];

pub fn exception_operators() -> &'static [Operator] {
    &EXCEPTION_OPERATORS
}

impl Operator {
    /// Look up a catalog operator by its `value` identifier
    pub fn from_value(value: &str) -> OperatorResult<Self> {
        EXCEPTION_OPERATORS
            .iter()
            .find(|operator| operator.value == value)
            .copied()
            .ok_or_else(|| OperatorError::unknown_operator(value))
    }

    pub fn is_negated(&self) -> bool {
        self.polarity == OperatorPolarity::Excluded
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl From<Operator> for String {
    fn from(operator: Operator) -> Self {
        operator.value.to_string()
    }
}

impl TryFrom<String> for Operator {
    type Error = OperatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}
