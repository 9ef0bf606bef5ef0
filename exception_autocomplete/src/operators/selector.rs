//! Operator selection by field type
//!
//! First matching rule wins:
//! 1. no field              -> `[is]`
//! 2. nested field          -> `[is]`
//! 3. boolean field         -> `[is, is not, exists, does not exist]`
//!    (declared boolean, or `boolean` among the storage types)
//! 4. anything else         -> the full generic catalog

use super::catalog::{Operator, BOOLEAN_OPERATORS, EXCEPTION_OPERATORS, IS_OPERATOR};
use super::error::{OperatorError, OperatorResult};
use crate::{fields::FieldDescriptor, log_debug};

const IS_ONLY: [Operator; 1] = [IS_OPERATOR];

/// Select the operators applicable to a field, in display order
pub fn select_operators(field: Option<&FieldDescriptor>) -> Vec<Operator> {
    let Some(field) = field else {
        log_debug!("No field selected, offering only 'is'");
        return vec![IS_OPERATOR];
    };

    let operators = applicable_operators(field);

    log_debug!("Selected operators for field",
        "field" => field.name.as_str(),
        "type" => field.field_type.as_str(),
        "operators" => operators.len());

    operators.to_vec()
}

fn applicable_operators(field: &FieldDescriptor) -> &'static [Operator] {
    if field.is_nested() {
        &IS_ONLY
    } else if field.is_boolean() {
        &BOOLEAN_OPERATORS
    } else {
        &EXCEPTION_OPERATORS
    }
}

/// Check whether an operator is offered for the field
pub fn is_operator_valid_for_field(field: Option<&FieldDescriptor>, operator: &Operator) -> bool {
    match field {
        Some(field) => applicable_operators(field).contains(operator),
        None => *operator == IS_OPERATOR,
    }
}

/// Like `is_operator_valid_for_field`, but reports the mismatch as an error
pub fn ensure_operator_for_field(field: &FieldDescriptor, operator: &Operator) -> OperatorResult<()> {
    if is_operator_valid_for_field(Some(field), operator) {
        return Ok(());
    }

    let error = OperatorError::not_applicable(operator.value, &field.name, field.field_type.clone());
    error.log_error();
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{mocks::get_field, FieldDescriptor, FieldSubType, FieldType, NestedSubType};
    use crate::operators::catalog::*;
    use assert_matches::assert_matches;

    fn nested_field() -> FieldDescriptor {
        FieldDescriptor::new("nestedField", FieldType::Nested)
            .with_es_types(["text"])
            .with_sub_type(FieldSubType {
                nested: Some(NestedSubType {
                    path: "nestedField".to_string(),
                }),
                multi: None,
            })
    }

    #[test]
    fn test_absent_field_returns_is() {
        assert_eq!(select_operators(None), vec![IS_OPERATOR]);
    }

    #[test]
    fn test_boolean_field() {
        assert_eq!(
            select_operators(Some(&get_field("ssl"))),
            vec![
                IS_OPERATOR,
                IS_NOT_OPERATOR,
                EXISTS_OPERATOR,
                DOES_NOT_EXIST_OPERATOR
            ]
        );
    }

    #[test]
    fn test_boolean_storage_type() {
        let field = FieldDescriptor::new("flag", FieldType::Conflict).with_es_types(["boolean"]);
        assert_eq!(select_operators(Some(&field)), BOOLEAN_OPERATORS.to_vec());
    }

    #[test]
    fn test_nested_field_returns_is() {
        assert_eq!(select_operators(Some(&nested_field())), vec![IS_OPERATOR]);
    }

    #[test]
    fn test_nested_wins_over_boolean_storage() {
        let field = FieldDescriptor::new("nestedFlag", FieldType::Nested).with_es_types(["boolean"]);
        assert_eq!(select_operators(Some(&field)), vec![IS_OPERATOR]);
    }

    #[test]
    fn test_other_types_return_full_catalog() {
        for name in ["machine.os.raw", "bytes", "@timestamp", "ip"] {
            assert_eq!(
                select_operators(Some(&get_field(name))),
                EXCEPTION_OPERATORS.to_vec(),
                "field {}",
                name
            );
        }

        let unknown = FieldDescriptor::new("shape", FieldType::parse("shape"));
        assert_eq!(select_operators(Some(&unknown)), EXCEPTION_OPERATORS.to_vec());
    }

    #[test]
    fn test_selection_is_deterministic() {
        let field = get_field("ssl");
        assert_eq!(select_operators(Some(&field)), select_operators(Some(&field)));
        assert_eq!(field, get_field("ssl"));
    }

    #[test]
    fn test_operator_validity() {
        let ssl = get_field("ssl");
        assert!(is_operator_valid_for_field(Some(&ssl), &EXISTS_OPERATOR));
        assert!(!is_operator_valid_for_field(Some(&ssl), &IS_ONE_OF_OPERATOR));
        assert!(is_operator_valid_for_field(None, &IS_OPERATOR));
        assert!(!is_operator_valid_for_field(None, &IS_NOT_OPERATOR));
    }

    #[test]
    fn test_ensure_operator_for_field() {
        let nested = nested_field();
        assert!(ensure_operator_for_field(&nested, &IS_OPERATOR).is_ok());
        assert_matches!(
            ensure_operator_for_field(&nested, &IS_IN_LIST_OPERATOR),
            Err(OperatorError::NotApplicable { operator: "is_in_list", .. })
        );
    }
}
