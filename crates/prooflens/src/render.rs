//! Rendering of traces into view trees.
//!
//! One renderer per union of the data model:
//!
//! - [`trace`] - the document, assigning declaration identity keys
//! - [`declaration`] - one declaration per kind
//! - [`step`] - one proof-script line
//! - [`event`] - the recursive tactic execution tree
//!
//! Renderers are pure functions of the trace, the [`ViewingOptions`] and the
//! [`ToggleStore`]; rendering the same inputs twice yields the same tree.

mod declaration;
mod event;
mod step;
mod trace;

pub use trace::{Occurrences, render_trace};

use crate::{options::ViewingOptions, toggle::ToggleStore};

/// Read-only inputs shared by every renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    options: &'a ViewingOptions,
    toggles: &'a ToggleStore,
}

impl<'a> RenderContext<'a> {
    pub fn new(options: &'a ViewingOptions, toggles: &'a ToggleStore) -> Self {
        Self { options, toggles }
    }

    pub fn options(&self) -> &ViewingOptions {
        self.options
    }

    pub fn toggles(&self) -> &ToggleStore {
        self.toggles
    }

    fn select<'t>(&self, variants: &'t prooflens_core::trace::PrintingVariants) -> &'t str {
        variants.select(self.options.printing_variant)
    }
}
