//! Prooflens - A viewer for proof-assistant execution traces.
//!
//! Loading, interactive state, and rendering for the traces a proof
//! assistant records while checking a file. A trace lists declarations in
//! source order; interactive proofs carry their steps and, for each tactic
//! step, the tree of tactic events the engine actually ran.

pub mod config;
pub mod export;
pub mod options;
pub mod render;
pub mod session;
pub mod toggle;
pub mod view;

mod error;

pub use prooflens_core::{printing, schema, trace};
pub use prooflens_loader::{FailureKind, LoadError};

pub use error::ProoflensError;

use log::{debug, info, trace};

use config::AppConfig;
use export::{html, text};
use render::{RenderContext, render_trace};
use session::Session;
use toggle::ToggleStore;
use view::Node;

/// Builder for loading and rendering proof traces.
///
/// This provides an API for processing trace files through the loading,
/// validation, and rendering stages without any interactive state. Use
/// [`TraceViewer::session`] for a viewer that tracks clicks.
///
/// # Examples
///
/// ```rust,no_run
/// use prooflens::{TraceViewer, config::AppConfig};
///
/// let bytes = std::fs::read("trace.json").expect("Failed to read trace");
///
/// // With custom config
/// let config = AppConfig::default();
/// let viewer = TraceViewer::new(config);
///
/// // Load and validate the trace
/// let trace = viewer.load(&bytes)
///     .expect("Failed to load");
///
/// // Render it to a standalone HTML page
/// let html = viewer.render_html(&trace);
///
/// // Or use default config
/// let viewer = TraceViewer::default();
/// ```
#[derive(Default)]
pub struct TraceViewer {
    config: AppConfig,
}

impl TraceViewer {
    /// Create a new trace viewer with the given configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prooflens::{TraceViewer, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let viewer = TraceViewer::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this viewer renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load a trace file.
    ///
    /// The bytes may be plain JSON or a zstd frame holding JSON. The
    /// decoded document is validated against the trace schema before it is
    /// converted into a [`trace::Trace`].
    ///
    /// # Errors
    ///
    /// Returns [`ProoflensError::Load`] if the bytes cannot be decompressed
    /// or parsed, or if the document violates the schema.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prooflens::TraceViewer;
    ///
    /// let viewer = TraceViewer::default();
    /// let trace = viewer
    ///     .load(br#"{"sub_filenames": [], "declarations": []}"#)
    ///     .expect("Failed to load trace");
    /// assert!(trace.declarations.is_empty());
    /// ```
    pub fn load(&self, bytes: &[u8]) -> Result<trace::Trace, ProoflensError> {
        info!(bytes = bytes.len(); "Loading trace");

        let trace = prooflens_loader::load(bytes)?;

        let statistics = trace.statistics();
        debug!(
            declarations = statistics.declarations,
            interactives = statistics.interactives,
            steps = statistics.steps,
            tactic_events = statistics.tactic_events,
            max_event_depth = statistics.max_event_depth;
            "Trace loaded successfully"
        );
        trace!(statistics:?; "Trace statistics");

        Ok(trace)
    }

    /// Render a trace to a view tree using the configured initial options.
    ///
    /// No tactic has been clicked, so every tactic shows its default
    /// expansion and steps are open only when `open_steps` is configured.
    pub fn render(&self, trace: &trace::Trace) -> Node {
        let options = self.config.viewing().options();
        let toggles = ToggleStore::new();
        render_trace(&RenderContext::new(&options, &toggles), trace)
    }

    /// Render a trace to a standalone HTML document.
    ///
    /// The page title comes from the export configuration and the trace's
    /// sub-filenames are listed above the declarations.
    pub fn render_html(&self, trace: &trace::Trace) -> String {
        let body = self.render(trace);
        let document = html::render_document(self.config.export().title(), &trace.sub_filenames, &body);
        info!(bytes = document.len(); "HTML rendered successfully");
        document
    }

    /// Render a trace to indented plain text.
    pub fn render_text(&self, trace: &trace::Trace) -> String {
        text::render(&self.render(trace))
    }

    /// Start an interactive session with the configured initial options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prooflens::TraceViewer;
    ///
    /// let mut session = TraceViewer::default().session();
    /// session
    ///     .drop_file(br#"{"sub_filenames": [], "declarations": []}"#)
    ///     .expect("Failed to load trace");
    /// assert_eq!(session.render_text(), "");
    /// ```
    pub fn session(&self) -> Session {
        Session::new(self.config.viewing().options())
    }
}
