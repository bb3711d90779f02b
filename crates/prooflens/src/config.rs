//! Configuration types for trace rendering.
//!
//! This module provides configuration structures that control how traces
//! are displayed and exported. All types implement [`serde::Deserialize`]
//! for loading from external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining viewing and export settings.
//! - [`ViewingConfig`] - Initial global viewing options.
//! - [`ExportConfig`] - Options of the exported document.
//!
//! # Example
//!
//! ```
//! # use prooflens::config::AppConfig;
//! # use prooflens_core::printing::PrintingVariant;
//! let config = AppConfig::default();
//! assert_eq!(config.viewing().printing_variant(), PrintingVariant::DefaultPretty);
//! assert!(!config.viewing().expand_all());
//! ```

use serde::Deserialize;

use prooflens_core::printing::PrintingVariant;

use crate::{export::Format, options::ViewingOptions};

/// Top-level configuration combining viewing and export settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Viewing configuration section.
    #[serde(default)]
    viewing: ViewingConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(viewing: ViewingConfig, export: ExportConfig) -> Self {
        Self { viewing, export }
    }

    /// Returns the viewing configuration.
    pub fn viewing(&self) -> &ViewingConfig {
        &self.viewing
    }

    /// Returns a mutable reference to the viewing configuration.
    pub fn viewing_mut(&mut self) -> &mut ViewingConfig {
        &mut self.viewing
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns a mutable reference to the export configuration.
    pub fn export_mut(&mut self) -> &mut ExportConfig {
        &mut self.export
    }
}

/// Initial values of the global viewing options.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ViewingConfig {
    #[serde(default)]
    printing_variant: PrintingVariant,

    #[serde(default)]
    expand_all: bool,

    #[serde(default)]
    open_steps: bool,
}

impl ViewingConfig {
    pub fn new(printing_variant: PrintingVariant, expand_all: bool, open_steps: bool) -> Self {
        Self {
            printing_variant,
            expand_all,
            open_steps,
        }
    }

    pub fn printing_variant(&self) -> PrintingVariant {
        self.printing_variant
    }

    pub fn expand_all(&self) -> bool {
        self.expand_all
    }

    pub fn open_steps(&self) -> bool {
        self.open_steps
    }

    pub fn set_printing_variant(&mut self, printing_variant: PrintingVariant) {
        self.printing_variant = printing_variant;
    }

    pub fn set_expand_all(&mut self, expand_all: bool) {
        self.expand_all = expand_all;
    }

    pub fn set_open_steps(&mut self, open_steps: bool) {
        self.open_steps = open_steps;
    }

    /// The [`ViewingOptions`] a fresh session starts with.
    pub fn options(&self) -> ViewingOptions {
        ViewingOptions::new(self.printing_variant)
            .with_expand_all(self.expand_all)
            .with_open_steps(self.open_steps)
    }
}

/// Options of exported documents.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Title of the HTML page.
    #[serde(default = "default_title")]
    title: String,

    /// Output format.
    #[serde(default)]
    format: Format,
}

fn default_title() -> String {
    "Proof trace".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            format: Format::default(),
        }
    }
}

impl ExportConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }
}
