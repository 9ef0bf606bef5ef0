//! Field descriptors supplied by the field-metadata collaborator

pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod mocks;

pub use error::{FieldError, FieldResult};
pub use types::{FieldDescriptor, FieldSubType, FieldType, MultiSubType, NestedSubType};

use crate::{log_success, logging::codes};

impl FieldDescriptor {
    /// Parse a single field descriptor from JSON
    pub fn from_json(json: &str) -> FieldResult<Self> {
        let field: FieldDescriptor = serde_json::from_str(json).map_err(|e| {
            let error = FieldError::from(e);
            error.log_error();
            error
        })?;

        ensure_named(&field, 0)?;
        Ok(field)
    }
}

/// Parse a JSON array of field descriptors, preserving order
pub fn parse_field_list(json: &str) -> FieldResult<Vec<FieldDescriptor>> {
    let fields: Vec<FieldDescriptor> = serde_json::from_str(json).map_err(|e| {
        let error = FieldError::from(e);
        error.log_error();
        error
    })?;

    for (index, field) in fields.iter().enumerate() {
        ensure_named(field, index)?;
    }

    log_success!(codes::success::FIELD_LIST_LOADED, "Field list loaded",
        "fields" => fields.len());

    Ok(fields)
}

fn ensure_named(field: &FieldDescriptor, index: usize) -> FieldResult<()> {
    if field.name.trim().is_empty() {
        let error = FieldError::empty_name(index);
        error.log_error();
        return Err(error);
    }
    Ok(())
}
