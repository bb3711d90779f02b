//! Expand/collapse state of rendered nodes.
//!
//! The trace is immutable, so interactive state lives beside it in a
//! [`ToggleStore`] keyed by the position of a node in the rendered
//! document. Positions are only meaningful for one trace instance; loading
//! a new trace clears the store.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use prooflens_core::trace::{DeclarationKind, Event, StepKind, Trace};

/// Tactic nodes shallower than this are expanded by default.
pub const DEFAULT_EXPAND_DEPTH: usize = 15;

/// Tactic nodes at least this deep are styled as deep.
pub const DEEP_DEPTH: usize = 10;

/// Identity of a declaration: its path and the occurrence of that path in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclarationKey {
    path: String,
    occurrence: usize,
}

impl DeclarationKey {
    pub fn new(path: impl Into<String>, occurrence: usize) -> Self {
        Self {
            path: path.into(),
            occurrence,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn occurrence(&self) -> usize {
        self.occurrence
    }
}

impl fmt::Display for DeclarationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.path, self.occurrence)
    }
}

/// Identity of a step within a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepId {
    declaration: DeclarationKey,
    step: usize,
}

impl StepId {
    pub fn new(declaration: DeclarationKey, step: usize) -> Self {
        Self { declaration, step }
    }

    pub fn declaration(&self) -> &DeclarationKey {
        &self.declaration
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Finds the execution tree of the tactic step this id designates.
    ///
    /// Returns `None` if the step does not exist or is not a tactic step.
    pub fn resolve<'t>(&self, trace: &'t Trace) -> Option<&'t Event> {
        let declaration = trace
            .declarations
            .iter()
            .filter(|d| d.path == self.declaration.path())
            .nth(self.declaration.occurrence())?;

        let DeclarationKind::Interactive { steps, .. } = &declaration.kind else {
            return None;
        };
        match &steps.get(self.step)?.kind {
            StepKind::Tactic { event, .. } => Some(event),
            StepKind::StartSubproof | StepKind::EndSubproof | StepKind::Bullet { .. } => None,
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.declaration, self.step)
    }
}

/// Identity of an event node: the step owning the event tree and the child
/// indices leading from the root event to the node.
///
/// Child indices are positions in `Sequence::elements` or
/// `Dispatch::branches`; the `details` of a `Tactic` is child `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    step: StepId,
    path: Vec<usize>,
}

impl NodeId {
    /// The root event of `step`.
    pub fn root(step: StepId) -> Self {
        Self {
            step,
            path: Vec::new(),
        }
    }

    /// The node reached by following `path` from the root event of `step`.
    pub fn new(step: StepId, path: Vec<usize>) -> Self {
        Self { step, path }
    }

    pub fn step(&self) -> &StepId {
        &self.step
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.path.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.path.pop();
    }

    /// Finds the tactic this id designates in `trace`.
    ///
    /// Returns `None` if the position does not exist or is not a tactic.
    pub fn resolve(&self, trace: &Trace) -> Option<TacticState> {
        let mut event = self.step.resolve(trace)?;
        let mut depth = 0;
        for &index in &self.path {
            event = match event {
                Event::Sequence { elements } => elements.get(index)?,
                Event::Dispatch { branches, .. } => branches.get(index)?,
                Event::Tactic { details, .. } if index == 0 => {
                    depth += 1;
                    details.as_ref()
                }
                Event::Tactic { .. } | Event::Message { .. } => return None,
            };
        }

        match event {
            Event::Tactic { details, .. } => Some(TacticState::new(depth, details)),
            Event::Sequence { .. } | Event::Dispatch { .. } | Event::Message { .. } => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.step)?;
        for (i, index) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// Keyboard modifiers held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { alt: false };
    pub const ALT: Modifiers = Modifiers { alt: true };
}

/// Position-derived facts about a tactic node that drive its toggle policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TacticState {
    depth: usize,
    empty: bool,
}

impl TacticState {
    pub fn new(depth: usize, details: &Event) -> Self {
        Self {
            depth,
            empty: details.is_empty_sequence(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `true` when the details are an empty sequence; such nodes are
    /// always expanded.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn is_deep(&self) -> bool {
        self.depth >= DEEP_DEPTH
    }

    /// Expand state of the node before any click.
    pub fn default_expanded(&self) -> bool {
        self.depth < DEFAULT_EXPAND_DEPTH || self.empty
    }
}

/// Local expand/collapse flags of tactic nodes and open flags of steps.
#[derive(Debug, Clone, Default)]
pub struct ToggleStore {
    expanded: HashMap<NodeId, bool>,
    /// Nodes collapsed by a modifier click since expand-all was enabled.
    collapsed_overrides: HashSet<NodeId>,
    open_steps: HashSet<StepId>,
}

impl ToggleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local expand flag of a tactic node.
    pub fn is_expanded(&self, id: &NodeId, state: TacticState) -> bool {
        if state.is_empty() {
            return true;
        }
        self.expanded
            .get(id)
            .copied()
            .unwrap_or_else(|| state.default_expanded())
    }

    /// Whether the details of a tactic node are shown.
    pub fn is_visible(&self, id: &NodeId, state: TacticState, expand_all: bool) -> bool {
        if state.is_empty() {
            return true;
        }
        if expand_all {
            !self.collapsed_overrides.contains(id)
        } else {
            self.is_expanded(id, state)
        }
    }

    /// Applies a click on the header of a tactic node.
    ///
    /// Plain clicks are ignored while expand-all is on; modifier clicks
    /// always toggle.
    pub fn click(
        &mut self,
        id: &NodeId,
        state: TacticState,
        expand_all: bool,
        modifiers: Modifiers,
    ) {
        if state.is_empty() {
            return;
        }

        if !expand_all {
            let expanded = self.is_expanded(id, state);
            self.expanded.insert(id.clone(), !expanded);
            return;
        }

        if !modifiers.alt {
            return;
        }

        if self.collapsed_overrides.remove(id) {
            self.expanded.insert(id.clone(), true);
        } else {
            self.collapsed_overrides.insert(id.clone());
            self.expanded.insert(id.clone(), false);
        }
    }

    /// Forgets collapses made under a previous expand-all period.
    pub fn clear_overrides(&mut self) {
        self.collapsed_overrides.clear();
    }

    pub fn is_step_open(&self, id: &StepId) -> bool {
        self.open_steps.contains(id)
    }

    pub fn toggle_step(&mut self, id: &StepId) {
        if !self.open_steps.remove(id) {
            self.open_steps.insert(id.clone());
        }
    }

    /// Drops every flag.
    pub fn clear(&mut self) {
        self.expanded.clear();
        self.collapsed_overrides.clear();
        self.open_steps.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty() && self.collapsed_overrides.is_empty() && self.open_steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(path: Vec<usize>) -> NodeId {
        NodeId::new(StepId::new(DeclarationKey::new("thm", 0), 0), path)
    }

    fn state(depth: usize) -> TacticState {
        TacticState {
            depth,
            empty: false,
        }
    }

    fn empty_state(depth: usize) -> TacticState {
        TacticState { depth, empty: true }
    }

    #[test]
    fn test_default_expand_threshold() {
        assert!(state(0).default_expanded());
        assert!(state(14).default_expanded());
        assert!(!state(15).default_expanded());
        assert!(!state(40).default_expanded());
    }

    #[test]
    fn test_empty_details_always_expanded() {
        assert!(empty_state(15).default_expanded());
        assert!(empty_state(100).default_expanded());

        let mut store = ToggleStore::new();
        let id = node(vec![0]);
        store.click(&id, empty_state(20), false, Modifiers::NONE);
        assert!(store.is_visible(&id, empty_state(20), false));
        store.click(&id, empty_state(20), true, Modifiers::ALT);
        assert!(store.is_visible(&id, empty_state(20), true));
        assert!(store.is_empty());
    }

    #[test]
    fn test_deep_marker() {
        assert!(!state(9).is_deep());
        assert!(state(10).is_deep());
    }

    #[test]
    fn test_plain_click_toggles() {
        let mut store = ToggleStore::new();
        let id = node(vec![]);

        assert!(store.is_visible(&id, state(0), false));
        store.click(&id, state(0), false, Modifiers::NONE);
        assert!(!store.is_visible(&id, state(0), false));
        store.click(&id, state(0), false, Modifiers::NONE);
        assert!(store.is_visible(&id, state(0), false));
    }

    #[test]
    fn test_modifier_click_toggles_without_expand_all() {
        let mut store = ToggleStore::new();
        let id = node(vec![0]);

        store.click(&id, state(15), false, Modifiers::ALT);
        assert!(store.is_visible(&id, state(15), false));
    }

    #[test]
    fn test_plain_click_ignored_under_expand_all() {
        let mut store = ToggleStore::new();
        let id = node(vec![]);

        store.click(&id, state(0), true, Modifiers::NONE);
        assert!(store.is_visible(&id, state(0), true));
        assert!(store.is_expanded(&id, state(0)));
    }

    #[test]
    fn test_expand_all_shows_collapsed_nodes() {
        let store = ToggleStore::new();
        let id = node(vec![0, 0]);

        assert!(!store.is_visible(&id, state(20), false));
        assert!(store.is_visible(&id, state(20), true));
    }

    #[test]
    fn test_modifier_click_collapses_under_expand_all() {
        let mut store = ToggleStore::new();
        let id = node(vec![1]);
        let sibling = node(vec![2]);

        store.click(&id, state(1), true, Modifiers::ALT);
        assert!(!store.is_visible(&id, state(1), true));
        assert!(store.is_visible(&sibling, state(1), true));

        store.click(&id, state(1), true, Modifiers::ALT);
        assert!(store.is_visible(&id, state(1), true));
    }

    #[test]
    fn test_override_survives_as_local_state() {
        let mut store = ToggleStore::new();
        let id = node(vec![]);

        store.click(&id, state(0), true, Modifiers::ALT);
        store.clear_overrides();

        assert!(store.is_visible(&id, state(0), true));
        assert!(!store.is_visible(&id, state(0), false));
    }

    #[test]
    fn test_toggle_step() {
        let mut store = ToggleStore::new();
        let id = StepId::new(DeclarationKey::new("thm", 1), 3);

        assert!(!store.is_step_open(&id));
        store.toggle_step(&id);
        assert!(store.is_step_open(&id));
        store.toggle_step(&id);
        assert!(!store.is_step_open(&id));
    }

    #[test]
    fn test_clear() {
        let mut store = ToggleStore::new();
        store.click(&node(vec![]), state(0), false, Modifiers::NONE);
        store.toggle_step(&StepId::new(DeclarationKey::new("thm", 0), 0));
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_display() {
        let id = node(vec![0, 2, 1]);
        assert_eq!(id.to_string(), "thm#0/0/0.2.1");
        assert_eq!(node(vec![]).to_string(), "thm#0/0/");
    }
}
