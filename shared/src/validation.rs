//! Input validation functions
//!
//! Custom validators used by the `validator` derive on request types, plus
//! helpers for turning `ValidationErrors` into a single reportable failure.

use validator::{ValidationError, ValidationErrors};

/// Reject empty or whitespace-only strings
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Pick the first failing field (by name) and its message
///
/// Field order from `ValidationErrors` is a hash map order, so sorting keeps
/// the reported field stable between runs.
pub fn first_field_error(errors: &ValidationErrors) -> Option<(String, String)> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    let field = fields.into_iter().next()?;
    let message = field_errors
        .get(field)
        .and_then(|errs| errs.first())
        .map(|err| match &err.message {
            Some(msg) => msg.to_string(),
            None => format!("Invalid value for {}", field),
        })
        .unwrap_or_else(|| format!("Invalid value for {}", field));

    Some((field.to_string(), message))
}
