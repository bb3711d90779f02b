//! Trace file loading for Prooflens.
//!
//! Turns the raw bytes of a trace file into a validated [`Trace`]:
//!
//! ```text
//! bytes
//!   ↓ decompress   (only when the bytes start with a zstd frame marker)
//! UTF-8 JSON
//!   ↓ parse
//! serde_json::Value
//!   ↓ validate     (JSON Schema derived from the data model)
//!   ↓ deserialize
//! Trace
//! ```
//!
//! # Example
//!
//! ```
//! let bytes = br#"{"sub_filenames": [], "declarations": []}"#;
//! let trace = prooflens_loader::load(bytes).expect("valid trace");
//! assert!(trace.declarations.is_empty());
//! ```

pub mod decompress;
pub mod error;
mod validate;

pub use error::{FailureKind, LoadError, ValidationError, Violation};
pub use validate::validate;

use std::str;

use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use prooflens_core::trace::Trace;

/// Load a trace from the bytes of a (possibly zstd-compressed) trace file.
///
/// # Errors
///
/// Returns a [`LoadError`] whose [`kind`](LoadError::kind) is
/// [`FailureKind::Parse`] when the bytes cannot be decompressed or parsed as
/// JSON, and [`FailureKind::Validation`] when the JSON does not match the
/// trace schema.
pub fn load(bytes: &[u8]) -> Result<Trace, LoadError> {
    debug!(input_len = bytes.len(); "Decoding trace bytes");

    let decompressed = decompress::decompress(bytes)?;
    let text = str::from_utf8(&decompressed)?;

    // Event trees nest without bound; every recursive stage below runs on a
    // stack that grows on demand instead of the caller's.
    let trace = stacker::grow(LOAD_STACK_SIZE, || decode(text))?;

    info!(declarations = trace.declarations.len(); "Trace loaded");
    Ok(trace)
}

/// Stack reserved for parsing, validating and converting one document.
const LOAD_STACK_SIZE: usize = 64 * 1024 * 1024;

fn decode(text: &str) -> Result<Trace, LoadError> {
    let value = parse_json(text)?;
    debug!("Trace parsed as JSON");

    validate(&value)?;
    debug!("Trace validated against schema");

    // The schema is derived from the same types, so this only fails if the
    // two disagree.
    let trace: Trace = serde_json::from_value(value)
        .map_err(|err| ValidationError::from(Violation::new(err.to_string())))?;

    Ok(trace)
}

/// Parses `text` without serde_json's nesting limit.
fn parse_json(text: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();

    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;

    Ok(value)
}
