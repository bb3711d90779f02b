//! Error adapter for converting ProoflensError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a trace is rejected by schema validation, each
//! [`Violation`] is rendered as its own report.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use prooflens::{FailureKind, LoadError, ProoflensError};
use prooflens_loader::Violation;

/// Adapter for a single schema violation.
pub struct ViolationAdapter<'a> {
    violation: &'a Violation,
}

impl<'a> ViolationAdapter<'a> {
    /// Create a new violation adapter.
    pub fn new(violation: &'a Violation) -> Self {
        Self { violation }
    }
}

impl fmt::Debug for ViolationAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViolationAdapter")
            .field("violation", &self.violation)
            .finish()
    }
}

impl fmt::Display for ViolationAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.violation.message())
    }
}

impl Error for ViolationAdapter<'_> {}

impl MietteDiagnostic for ViolationAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("prooflens::validation"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "the trace does not match the expected schema; see `--print-schema`",
        ))
    }
}

/// Adapter for [`ProoflensError`] variants reported as a single error.
///
/// This adapter handles I/O errors, configuration errors, parse failures and
/// unknown tactic positions.
pub struct ErrorAdapter<'a>(pub &'a ProoflensError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ProoflensError::Load(err) => write!(f, "{}: {err}", err.kind()),
            err => fmt::Display::fmt(err, f),
        }
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ProoflensError::Io(_) => "prooflens::io",
            ProoflensError::Load(err) => match err.kind() {
                FailureKind::Parse => "prooflens::parse",
                FailureKind::Validation => "prooflens::validation",
            },
            ProoflensError::Config(_) => "prooflens::config",
            ProoflensError::UnknownNode(_) => "prooflens::node",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ProoflensError::Load(err) if err.kind() == FailureKind::Parse => Some(Box::new(
                "trace files are UTF-8 JSON, optionally compressed as a zstd frame",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// One violation of a rejected trace.
    Violation(ViolationAdapter<'a>),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Violation(v) => fmt::Display::fmt(v, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Reportable::Violation(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Violation(v) => v.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Violation(v) => v.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`ProoflensError`] into a list of reportable errors.
///
/// A validation failure yields one [`Reportable`] per violation. Every
/// other error yields a single [`Reportable`].
pub fn to_reportables(err: &ProoflensError) -> Vec<Reportable<'_>> {
    match err {
        ProoflensError::Load(LoadError::Validation(validation))
            if !validation.violations().is_empty() =>
        {
            validation
                .violations()
                .iter()
                .map(|v| Reportable::Violation(ViolationAdapter::new(v)))
                .collect()
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use prooflens_loader::ValidationError;

    use super::*;

    fn validation_error(messages: &[&str]) -> ProoflensError {
        let violations = messages.iter().map(|m| Violation::new(*m)).collect();
        ProoflensError::Load(LoadError::Validation(ValidationError::new(violations)))
    }

    fn code(reportable: &Reportable<'_>) -> String {
        reportable.code().map(|c| c.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_one_reportable_per_violation() {
        let err = validation_error(&[
            "\"declarations\" is a required property",
            "42 is not of type \"array\"",
        ]);

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "\"declarations\" is a required property");
        assert_eq!(reportables[1].to_string(), "42 is not of type \"array\"");
        assert!(reportables.iter().all(|r| code(r) == "prooflens::validation"));
    }

    #[test]
    fn test_parse_failure() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ProoflensError::Load(LoadError::Json(json_err));

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert!(e.to_string().starts_with("Trace parsing failed: "));
                assert!(e.help().is_some());
            }
            Reportable::Violation(_) => panic!("Expected Error"),
        }
        assert_eq!(code(&reportables[0]), "prooflens::parse");
    }

    #[test]
    fn test_validation_without_violations() {
        let err = validation_error(&[]);

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        assert_eq!(code(&reportables[0]), "prooflens::validation");
    }

    #[test]
    fn test_non_load_errors() {
        let cases = [
            (
                ProoflensError::Io(io::Error::new(io::ErrorKind::NotFound, "missing")),
                "prooflens::io",
            ),
            (ProoflensError::Config("bad".to_string()), "prooflens::config"),
            (ProoflensError::UnknownNode("t#0/3".to_string()), "prooflens::node"),
        ];

        for (err, expected) in &cases {
            let reportables = to_reportables(err);
            assert_eq!(reportables.len(), 1);
            assert_eq!(code(&reportables[0]), *expected);
        }
    }

    #[test]
    fn test_config_error_message() {
        let err = ProoflensError::Config("Missing configuration file: a.toml".to_string());
        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].to_string(),
            "Configuration error: Missing configuration file: a.toml"
        );
    }
}
