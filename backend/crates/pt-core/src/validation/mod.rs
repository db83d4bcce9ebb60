pub mod form_errors;
pub mod form_field;
pub mod project_validator;
pub mod validation_message;
