//! Form definitions backing the owner routes.

use std::collections::BTreeMap;

use thiserror::Error;
use validator::ValidationErrors;

pub mod owner;

/// Messages per form field, ready to be shown next to the inputs.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid page number")]
    InvalidPage,
}

/// Flattens validator output into per-field messages, falling back to the
/// error code when no message was attached.
pub fn field_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => err.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
