//! Schema validation of parsed trace documents.

use std::sync::OnceLock;

use jsonschema::Draft;
use log::trace;
use serde_json::Value;

use prooflens_core::schema::trace_schema;

use crate::error::{ValidationError, Violation};

static VALIDATOR: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

fn compiled_validator() -> Result<&'static jsonschema::Validator, ValidationError> {
    VALIDATOR
        .get_or_init(|| {
            jsonschema::options()
                .with_draft(Draft::Draft202012)
                .build(&trace_schema())
                .map_err(|e| format!("failed to compile trace schema: {e}"))
        })
        .as_ref()
        .map_err(|e| ValidationError::from(Violation::new(e.clone())))
}

/// Validates `instance` against the trace schema.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every violation found.
pub fn validate(instance: &Value) -> Result<(), ValidationError> {
    let validator = compiled_validator()?;

    if validator.is_valid(instance) {
        return Ok(());
    }

    let violations: Vec<Violation> = validator
        .iter_errors(instance)
        .map(|e| Violation::new(e.to_string()))
        .collect();
    trace!(violations:? = violations; "Schema violations");

    Err(ValidationError::new(violations))
}
