//! The interactive viewing session.
//!
//! A [`Session`] owns everything that changes while a user looks at traces:
//! the currently displayed [`Trace`], the global [`ViewingOptions`] and the
//! [`ToggleStore`] of local expand/collapse flags. Renderers only ever see
//! read-only borrows of this state.
//!
//! Loading a file replaces the trace and discards every toggle at once. A
//! failed load leaves the session untouched apart from a [`Notification`].

use log::{debug, error, info};

use prooflens_core::{printing::PrintingVariant, trace::Trace};
use prooflens_loader::{FailureKind, LoadError};

use crate::{
    error::ProoflensError,
    export::{html, text},
    options::ViewingOptions,
    render::{RenderContext, render_trace},
    toggle::{Modifiers, NodeId, StepId, ToggleStore},
    view::Node,
};

/// A user-facing report of a failed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: FailureKind,
    details: Vec<String>,
}

impl Notification {
    fn from_error(err: &LoadError) -> Self {
        let details = match err {
            LoadError::Validation(validation) => validation
                .violations()
                .iter()
                .map(ToString::to_string)
                .collect(),
            LoadError::Decompress(_) | LoadError::Utf8(_) | LoadError::Json(_) => {
                vec![err.to_string()]
            }
        };

        Self {
            kind: err.kind(),
            details,
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The headline shown to the user.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Diagnostic lines; one per schema violation for validation failures.
    pub fn details(&self) -> &[String] {
        &self.details
    }
}

/// State of one viewer instance.
#[derive(Debug, Default)]
pub struct Session {
    trace: Trace,
    options: ViewingOptions,
    toggles: ToggleStore,
    notifications: Vec<Notification>,
}

impl Session {
    /// Creates a session showing the empty trace.
    pub fn new(options: ViewingOptions) -> Self {
        Self {
            trace: Trace::empty(),
            options,
            toggles: ToggleStore::new(),
            notifications: Vec::new(),
        }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn options(&self) -> &ViewingOptions {
        &self.options
    }

    pub fn toggles(&self) -> &ToggleStore {
        &self.toggles
    }

    /// Loads the bytes of a dropped file.
    ///
    /// On success the new trace replaces the displayed one and all toggle
    /// state is discarded. On failure the displayed trace is kept and a
    /// [`Notification`] is queued.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] of a failed load.
    pub fn drop_file(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        match prooflens_loader::load(bytes) {
            Ok(trace) => {
                self.replace_trace(trace);
                Ok(())
            }
            Err(err) => {
                let notification = Notification::from_error(&err);
                error!(kind:% = notification.kind(), err:% = err; "Failed to load trace");
                for detail in notification.details() {
                    error!(detail:% = detail; "Trace diagnostic");
                }
                self.notifications.push(notification);
                Err(err)
            }
        }
    }

    /// Displays `trace`, discarding all toggle state of the previous one.
    pub fn replace_trace(&mut self, trace: Trace) {
        info!(declarations = trace.declarations.len(); "Displaying trace");
        self.trace = trace;
        self.toggles.clear();
    }

    pub fn set_printing_variant(&mut self, printing_variant: PrintingVariant) {
        debug!(printing_variant:% = printing_variant; "Printing variant changed");
        self.options.printing_variant = printing_variant;
    }

    /// Turns expand-all on or off. Each change starts a fresh expand-all
    /// period without local collapse overrides.
    pub fn set_expand_all(&mut self, expand_all: bool) {
        debug!(expand_all; "Expand all changed");
        self.options.expand_all = expand_all;
        self.toggles.clear_overrides();
    }

    pub fn set_open_steps(&mut self, open_steps: bool) {
        self.options.open_steps = open_steps;
    }

    /// Applies a click on the header of the tactic at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ProoflensError::UnknownNode`] if `id` designates no tactic
    /// of the current trace.
    pub fn click_tactic(&mut self, id: &NodeId, modifiers: Modifiers) -> Result<(), ProoflensError> {
        let state = id
            .resolve(&self.trace)
            .ok_or_else(|| ProoflensError::UnknownNode(id.to_string()))?;

        self.toggles
            .click(id, state, self.options.expand_all, modifiers);
        debug!(node:% = id, alt = modifiers.alt; "Tactic clicked");
        Ok(())
    }

    /// Opens or closes the disclosure of the tactic step at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ProoflensError::UnknownNode`] if `id` designates no tactic
    /// step of the current trace.
    pub fn toggle_step(&mut self, id: &StepId) -> Result<(), ProoflensError> {
        if id.resolve(&self.trace).is_none() {
            return Err(ProoflensError::UnknownNode(id.to_string()));
        }

        self.toggles.toggle_step(id);
        Ok(())
    }

    /// Drains the queued notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Renders the current trace.
    pub fn render(&self) -> Node {
        render_trace(&RenderContext::new(&self.options, &self.toggles), &self.trace)
    }

    /// Renders the current trace as an HTML fragment.
    pub fn render_html(&self) -> String {
        html::render_fragment(&self.render())
    }

    /// Renders the current trace as plain text.
    pub fn render_text(&self) -> String {
        text::render(&self.render())
    }
}
