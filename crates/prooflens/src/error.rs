//! Error types for Prooflens operations.
//!
//! This module provides the main error type [`ProoflensError`] which wraps
//! the error conditions that can occur while loading and viewing traces.

use std::io;

use thiserror::Error;

use prooflens_loader::LoadError;

/// The main error type for Prooflens operations.
///
/// # Load Variant
///
/// The `Load` variant keeps the structured [`LoadError`], including every
/// schema violation of a rejected trace, for rich error reporting.
#[derive(Debug, Error)]
pub enum ProoflensError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No tactic or step at `{0}` in the current trace")]
    UnknownNode(String),
}
