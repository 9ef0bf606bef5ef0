//! Comparison operators and their applicability to fields

pub mod catalog;
pub mod error;
pub mod selector;

pub use catalog::{
    exception_operators, Operator, OperatorPolarity, OperatorType, BOOLEAN_OPERATORS,
    DOES_NOT_EXIST_OPERATOR, EXCEPTION_OPERATORS, EXISTS_OPERATOR, IS_IN_LIST_OPERATOR,
    IS_NOT_IN_LIST_OPERATOR, IS_NOT_ONE_OF_OPERATOR, IS_NOT_OPERATOR, IS_ONE_OF_OPERATOR,
    IS_OPERATOR,
};
pub use error::{OperatorError, OperatorResult};
pub use selector::{ensure_operator_for_field, is_operator_valid_for_field, select_operators};
