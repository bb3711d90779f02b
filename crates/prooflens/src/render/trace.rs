//! Rendering of a whole trace document.

use indexmap::IndexMap;
use log::debug;

use prooflens_core::trace::Trace;

use super::{RenderContext, declaration::render_declaration};
use crate::{
    toggle::DeclarationKey,
    view::{Element, Node},
};

/// Assigns per-path occurrence indices to declarations in document order.
///
/// Paths `A, B, A, A` receive `A#0, B#0, A#1, A#2`.
#[derive(Debug, Default)]
pub struct Occurrences {
    next: IndexMap<String, usize>,
}

impl Occurrences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key for the next declaration named `path`.
    pub fn next_key(&mut self, path: &str) -> DeclarationKey {
        let next = self.next.entry(path.to_string()).or_insert(0);
        let key = DeclarationKey::new(path, *next);
        *next += 1;
        key
    }

    /// Number of distinct paths seen so far.
    pub fn distinct_paths(&self) -> usize {
        self.next.len()
    }
}

/// Renders every declaration of `trace` in stored order.
///
/// Occurrence keys are recomputed on every call, so rendering the same
/// trace twice gives the same tree.
pub fn render_trace(ctx: &RenderContext<'_>, trace: &Trace) -> Node {
    let mut occurrences = Occurrences::new();

    let declarations: Vec<Node> = trace
        .declarations
        .iter()
        .map(|declaration| {
            let key = occurrences.next_key(&declaration.path);
            render_declaration(ctx, declaration, &key)
        })
        .collect();

    debug!(
        declarations = declarations.len(),
        distinct_paths = occurrences.distinct_paths();
        "Trace rendered"
    );

    Element::new("div")
        .with_class("trace")
        .with_class_if(ctx.options().printing_variant.is_pretty(), "trace-pretty")
        .with_children(declarations)
        .into()
}
