//! Errors raised while loading a trace file.
//!
//! Loading fails in one of two user-visible ways, described by
//! [`FailureKind`]: the bytes could not be turned into JSON at all, or the
//! JSON does not match the trace schema. [`LoadError`] carries the
//! underlying cause for either case.

use std::{fmt, io, str::Utf8Error};

use thiserror::Error;

/// The two kinds of load failure reported to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The bytes could not be decompressed or parsed as JSON.
    Parse,
    /// The JSON does not conform to the trace schema.
    Validation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Parse => write!(f, "Trace parsing failed"),
            FailureKind::Validation => write!(f, "Trace validation failed"),
        }
    }
}

/// Error type for [`load`](crate::load).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to decompress zstd frame: {0}")]
    Decompress(#[source] io::Error),

    #[error("trace is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("trace is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl LoadError {
    /// Returns which user-facing failure this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            LoadError::Decompress(_) | LoadError::Utf8(_) | LoadError::Json(_) => {
                FailureKind::Parse
            }
            LoadError::Validation(_) => FailureKind::Validation,
        }
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Violation {
    message: String,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Every violation found while validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema validation failed{}", summary(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

/// The first violation, and how many follow it.
fn summary(violations: &[Violation]) -> String {
    match violations {
        [] => String::new(),
        [first] => format!(": {first}"),
        [first, rest @ ..] => format!(": {first} (+{} more)", rest.len()),
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}
