//! Printing variant modes.
//!
//! A [`PrintingVariant`] is the global viewing option deciding which of the
//! five strings of a [`PrintingVariants`](crate::trace::PrintingVariants)
//! bundle is displayed.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five alternate renderings of a term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintingVariant {
    Default,
    FullPath,
    NoNotations,
    LowLevel,
    #[default]
    DefaultPretty,
}

impl PrintingVariant {
    /// Every mode, in the order they are offered to users.
    pub const ALL: [PrintingVariant; 5] = [
        PrintingVariant::Default,
        PrintingVariant::FullPath,
        PrintingVariant::NoNotations,
        PrintingVariant::LowLevel,
        PrintingVariant::DefaultPretty,
    ];

    /// The name used in trace files, configuration and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            PrintingVariant::Default => "default",
            PrintingVariant::FullPath => "full_path",
            PrintingVariant::NoNotations => "no_notations",
            PrintingVariant::LowLevel => "low_level",
            PrintingVariant::DefaultPretty => "default_pretty",
        }
    }

    /// Returns `true` for the mode that switches the document to pretty layout.
    pub fn is_pretty(self) -> bool {
        matches!(self, PrintingVariant::DefaultPretty)
    }
}

impl fmt::Display for PrintingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no printing variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown printing variant `{0}` (expected one of: default, full_path, no_notations, low_level, default_pretty)")]
pub struct UnknownPrintingVariant(pub String);

impl FromStr for PrintingVariant {
    type Err = UnknownPrintingVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrintingVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| UnknownPrintingVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::trace::PrintingVariants;

    fn variants(
        default: String,
        full_path: String,
        no_notations: String,
        low_level: String,
        default_pretty: String,
    ) -> PrintingVariants {
        PrintingVariants {
            default,
            full_path,
            no_notations,
            low_level,
            default_pretty,
            references: Vec::new(),
        }
    }

    #[test]
    fn test_default_mode_is_pretty() {
        assert_eq!(PrintingVariant::default(), PrintingVariant::DefaultPretty);
        assert!(PrintingVariant::default().is_pretty());
        assert!(!PrintingVariant::LowLevel.is_pretty());
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for variant in PrintingVariant::ALL {
            assert_eq!(variant.as_str().parse::<PrintingVariant>(), Ok(variant));
            assert_eq!(variant.to_string(), variant.as_str());
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "pretty".parse::<PrintingVariant>().unwrap_err();
        assert_eq!(err, UnknownPrintingVariant("pretty".to_string()));
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for variant in PrintingVariant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
    }

    proptest! {
        #[test]
        fn prop_select_projects_stored_field(
            default in ".*",
            full_path in ".*",
            no_notations in ".*",
            low_level in ".*",
            default_pretty in ".*",
        ) {
            let pv = variants(
                default.clone(),
                full_path.clone(),
                no_notations.clone(),
                low_level.clone(),
                default_pretty.clone(),
            );

            prop_assert_eq!(pv.select(PrintingVariant::Default), default.as_str());
            prop_assert_eq!(pv.select(PrintingVariant::FullPath), full_path.as_str());
            prop_assert_eq!(pv.select(PrintingVariant::NoNotations), no_notations.as_str());
            prop_assert_eq!(pv.select(PrintingVariant::LowLevel), low_level.as_str());
            prop_assert_eq!(pv.select(PrintingVariant::DefaultPretty), default_pretty.as_str());
        }
    }
}
