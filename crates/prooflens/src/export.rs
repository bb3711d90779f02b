//! Serialization of view trees.
//!
//! - [`html`] - standalone HTML documents and fragments
//! - [`text`] - indented plain text, one line per block

pub mod html;
pub mod text;

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Output format of an exported rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Text,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Html => write!(f, "html"),
            Format::Text => write!(f, "text"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Format::Html),
            "text" => Ok(Format::Text),
            other => Err(format!("unknown output format `{other}` (expected html or text)")),
        }
    }
}
