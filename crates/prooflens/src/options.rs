//! Global viewing options.

use prooflens_core::printing::PrintingVariant;

/// Options applied to the whole displayed trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewingOptions {
    /// Which rendering of every term is shown.
    pub printing_variant: PrintingVariant,
    /// Show every tactic subtree regardless of local collapse state.
    pub expand_all: bool,
    /// Open the disclosure of every tactic step.
    pub open_steps: bool,
}

impl ViewingOptions {
    pub fn new(printing_variant: PrintingVariant) -> Self {
        Self {
            printing_variant,
            ..Self::default()
        }
    }

    pub fn with_expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self
    }

    pub fn with_open_steps(mut self, open_steps: bool) -> Self {
        self.open_steps = open_steps;
        self
    }
}
