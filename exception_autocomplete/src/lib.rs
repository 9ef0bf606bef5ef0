// Internal modules
#[macro_use]
pub mod logging;
pub mod combo_box;
pub mod config;
pub mod fields;
pub mod operators;
pub mod validation;

// Re-export key types for library consumers
pub use combo_box::{project_combo_box, selected_values, ComboBoxOption, ComboBoxProjection};
pub use fields::{parse_field_list, FieldDescriptor, FieldError, FieldType};
pub use operators::{select_operators, Operator, OperatorError};
pub use validation::{check_param, is_param_valid, ParamVerdict, ValidationFlags};
