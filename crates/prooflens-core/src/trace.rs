//! Trace data model.
//!
//! This module contains the representation of a proof-assistant execution
//! trace as it is read from a trace file. Every type is immutable once
//! loaded; nothing in the viewer mutates a [`Trace`].
//!
//! # Shape
//!
//! ```text
//! Trace
//!  └─ Declaration*          (document order)
//!      └─ DeclarationKind
//!          └─ Interactive
//!              ├─ Step*     (proof-script order)
//!              │   └─ StepKind::Tactic
//!              │       └─ Event        (recursive)
//!              └─ Outcome
//! ```
//!
//! All unions are internally tagged with the `"type"` discriminant field, and
//! the same derive drives both deserialization and the JSON Schema in
//! [`crate::schema`], so the two cannot drift apart.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::printing::PrintingVariant;

/// Fully-qualified name of a global entity.
pub type FullPath = String;

/// A named entity used by a notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum Reference {
    Const { path: FullPath },
    Ind { path: FullPath },
    Construct { ind_path: FullPath, path: FullPath },
}

impl Reference {
    /// Returns the path of the referenced entity.
    pub fn path(&self) -> &str {
        match self {
            Reference::Const { path } | Reference::Ind { path } | Reference::Construct { path, .. } => {
                path
            }
        }
    }
}

/// Alternate textual renderings of the same term.
///
/// Exactly one of the five strings is displayed at a time, chosen by the
/// global [`PrintingVariant`] through [`PrintingVariants::select`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PrintingVariants {
    pub default: String,
    pub full_path: String,
    pub no_notations: String,
    pub low_level: String,
    pub default_pretty: String,
    pub references: Vec<Reference>,
}

impl PrintingVariants {
    /// Creates printing variants where every mode renders as `text`.
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            default: text.clone(),
            full_path: text.clone(),
            no_notations: text.clone(),
            low_level: text.clone(),
            default_pretty: text,
            references: Vec::new(),
        }
    }

    /// Returns the rendering for `variant`, unchanged.
    pub fn select(&self, variant: PrintingVariant) -> &str {
        match variant {
            PrintingVariant::Default => &self.default,
            PrintingVariant::FullPath => &self.full_path,
            PrintingVariant::NoNotations => &self.no_notations,
            PrintingVariant::LowLevel => &self.low_level,
            PrintingVariant::DefaultPretty => &self.default_pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum HypKind {
    Assumption,
    Definition { value: PrintingVariants },
}

/// A hypothesis of a goal context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Hyp {
    pub name: String,
    pub type_: PrintingVariants,
    pub kind: HypKind,
}

/// A proof goal. Hypotheses are kept in context order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Goal {
    pub hyps: Vec<Hyp>,
    pub concl: PrintingVariants,
}

/// How a tactic is implemented, with its source string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum TacticKind {
    Primitive { s: String },
    Builtin { s: String },
    Alias { s: String },
    #[serde(rename = "ML")]
    Ml { s: String },
}

impl TacticKind {
    /// Returns the discriminant as written in trace files.
    pub fn name(&self) -> &'static str {
        match self {
            TacticKind::Primitive { .. } => "Primitive",
            TacticKind::Builtin { .. } => "Builtin",
            TacticKind::Alias { .. } => "Alias",
            TacticKind::Ml { .. } => "ML",
        }
    }

    /// Returns the raw source string of the tactic.
    pub fn source(&self) -> &str {
        match self {
            TacticKind::Primitive { s }
            | TacticKind::Builtin { s }
            | TacticKind::Alias { s }
            | TacticKind::Ml { s } => s,
        }
    }
}

/// A node of a tactic execution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum Event {
    /// Sibling events executed one after another.
    Sequence { elements: Vec<Event> },
    /// One event per goal branch.
    Dispatch {
        goals_before: Vec<Goal>,
        branches: Vec<Event>,
    },
    /// A tactic firing and the trace of how it was resolved.
    Tactic {
        goals_before: Vec<Goal>,
        goals_after: Vec<Goal>,
        kind: TacticKind,
        tactic: PrintingVariants,
        details: Box<Event>,
    },
    /// A diagnostic message.
    Message { message: String },
}

impl Event {
    /// An empty [`Event::Sequence`].
    pub fn empty() -> Self {
        Event::Sequence {
            elements: Vec::new(),
        }
    }

    /// Returns `true` for a [`Event::Sequence`] without elements.
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, Event::Sequence { elements } if elements.is_empty())
    }

    /// Tactic nesting depth of this subtree.
    ///
    /// Sequences and dispatches do not add a level; each tactic adds one.
    pub fn tactic_depth(&self) -> usize {
        match self {
            Event::Sequence { elements } => {
                elements.iter().map(Event::tactic_depth).max().unwrap_or(0)
            }
            Event::Dispatch { branches, .. } => {
                branches.iter().map(Event::tactic_depth).max().unwrap_or(0)
            }
            Event::Tactic { details, .. } => 1 + details.tactic_depth(),
            Event::Message { .. } => 0,
        }
    }

    /// Number of [`Event::Tactic`] nodes in this subtree.
    pub fn tactic_count(&self) -> usize {
        match self {
            Event::Sequence { elements } => elements.iter().map(Event::tactic_count).sum(),
            Event::Dispatch { branches, .. } => branches.iter().map(Event::tactic_count).sum(),
            Event::Tactic { details, .. } => 1 + details.tactic_count(),
            Event::Message { .. } => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum StepKind {
    Tactic {
        goal_selector: String,
        tactic_raw: String,
        tactic: PrintingVariants,
        event: Event,
    },
    StartSubproof,
    EndSubproof,
    Bullet { bullet: String },
}

/// One line of an interactive proof script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Step {
    pub goals_before: Vec<Goal>,
    pub goals_after: Vec<Goal>,
    pub kind: StepKind,
}

/// Terminal state of an interactive declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum Outcome {
    Admitted,
    Proved,
    Exact,
    Abort,
    Fail,
}

impl Outcome {
    /// The script keyword closing a proof with this outcome.
    pub fn keyword(self) -> &'static str {
        match self {
            Outcome::Admitted => "Admitted",
            Outcome::Proved => "Qed",
            Outcome::Exact => "Exact",
            Outcome::Abort => "Abort",
            Outcome::Fail => "Fail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum DeclarationKind {
    Inductive,
    Constructor {
        ind_path: FullPath,
    },
    Assumption,
    Definition {
        value: PrintingVariants,
        equations: Vec<PrintingVariants>,
    },
    Interactive {
        steps: Vec<Step>,
        outcome: Outcome,
    },
}

/// A top-level named item of a trace.
///
/// Paths are not unique within a trace; see the occurrence keys assigned by
/// the trace renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Declaration {
    pub path: FullPath,
    pub type_: PrintingVariants,
    pub kind: DeclarationKind,
}

/// The root of a trace file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Trace {
    pub sub_filenames: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl Trace {
    /// The trace shown before any file has been loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collects summary counts over the whole trace.
    pub fn statistics(&self) -> TraceStatistics {
        let mut stats = TraceStatistics {
            declarations: self.declarations.len(),
            ..TraceStatistics::default()
        };

        for declaration in &self.declarations {
            match &declaration.kind {
                DeclarationKind::Inductive => stats.inductives += 1,
                DeclarationKind::Constructor { .. } => stats.constructors += 1,
                DeclarationKind::Assumption => stats.assumptions += 1,
                DeclarationKind::Definition { .. } => stats.definitions += 1,
                DeclarationKind::Interactive { steps, .. } => {
                    stats.interactives += 1;
                    stats.steps += steps.len();
                    for step in steps {
                        if let StepKind::Tactic { event, .. } = &step.kind {
                            stats.tactic_events += event.tactic_count();
                            stats.max_event_depth = stats.max_event_depth.max(event.tactic_depth());
                        }
                    }
                }
            }
        }

        stats
    }
}

/// Summary counts of a [`Trace`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStatistics {
    pub declarations: usize,
    pub inductives: usize,
    pub constructors: usize,
    pub assumptions: usize,
    pub definitions: usize,
    pub interactives: usize,
    pub steps: usize,
    pub tactic_events: usize,
    pub max_event_depth: usize,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tactic(label: &str, details: Event) -> Event {
        Event::Tactic {
            goals_before: Vec::new(),
            goals_after: Vec::new(),
            kind: TacticKind::Primitive { s: label.to_string() },
            tactic: PrintingVariants::uniform(label),
            details: Box::new(details),
        }
    }

    #[test]
    fn test_deserialize_minimal_trace() {
        let value = json!({
            "sub_filenames": [],
            "declarations": [{
                "path": "T",
                "type_": {
                    "default": "Prop",
                    "full_path": "Prop",
                    "no_notations": "Prop",
                    "low_level": "Prop",
                    "default_pretty": "Prop",
                    "references": []
                },
                "kind": { "type": "Assumption" }
            }]
        });

        let trace: Trace = serde_json::from_value(value).unwrap();
        assert_eq!(trace.declarations.len(), 1);
        assert_eq!(trace.declarations[0].path, "T");
        assert_eq!(trace.declarations[0].kind, DeclarationKind::Assumption);
    }

    #[test]
    fn test_deserialize_ml_tactic_kind() {
        let kind: TacticKind = serde_json::from_value(json!({ "type": "ML", "s": "auto" })).unwrap();
        assert_eq!(kind, TacticKind::Ml { s: "auto".to_string() });
        assert_eq!(kind.name(), "ML");
        assert_eq!(kind.source(), "auto");
    }

    #[test]
    fn test_unknown_event_tag_is_rejected() {
        let result: Result<Event, _> = serde_json::from_value(json!({ "type": "Loop" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_reference_path() {
        let reference = Reference::Construct {
            ind_path: "nat".to_string(),
            path: "S".to_string(),
        };
        assert_eq!(reference.path(), "S");
    }

    #[test]
    fn test_is_empty_sequence() {
        assert!(Event::empty().is_empty_sequence());
        assert!(
            !Event::Sequence {
                elements: vec![Event::Message {
                    message: "m".to_string()
                }]
            }
            .is_empty_sequence()
        );
        assert!(
            !Event::Dispatch {
                goals_before: Vec::new(),
                branches: Vec::new()
            }
            .is_empty_sequence()
        );
    }

    #[test]
    fn test_tactic_depth_ignores_sequences() {
        let event = Event::Sequence {
            elements: vec![
                tactic("a", tactic("b", Event::empty())),
                Event::Dispatch {
                    goals_before: Vec::new(),
                    branches: vec![tactic("c", tactic("d", tactic("e", Event::empty())))],
                },
            ],
        };

        assert_eq!(event.tactic_depth(), 3);
        assert_eq!(event.tactic_count(), 5);
    }

    #[test]
    fn test_outcome_keywords() {
        assert_eq!(Outcome::Admitted.keyword(), "Admitted");
        assert_eq!(Outcome::Proved.keyword(), "Qed");
        assert_eq!(Outcome::Exact.keyword(), "Exact");
        assert_eq!(Outcome::Abort.keyword(), "Abort");
        assert_eq!(Outcome::Fail.keyword(), "Fail");
    }

    #[test]
    fn test_statistics() {
        let trace = Trace {
            sub_filenames: Vec::new(),
            declarations: vec![
                Declaration {
                    path: "nat".to_string(),
                    type_: PrintingVariants::uniform("Set"),
                    kind: DeclarationKind::Inductive,
                },
                Declaration {
                    path: "O".to_string(),
                    type_: PrintingVariants::uniform("nat"),
                    kind: DeclarationKind::Constructor {
                        ind_path: "nat".to_string(),
                    },
                },
                Declaration {
                    path: "thm".to_string(),
                    type_: PrintingVariants::uniform("True"),
                    kind: DeclarationKind::Interactive {
                        steps: vec![
                            Step {
                                goals_before: Vec::new(),
                                goals_after: Vec::new(),
                                kind: StepKind::Bullet {
                                    bullet: "-".to_string(),
                                },
                            },
                            Step {
                                goals_before: Vec::new(),
                                goals_after: Vec::new(),
                                kind: StepKind::Tactic {
                                    goal_selector: "1".to_string(),
                                    tactic_raw: "exact I".to_string(),
                                    tactic: PrintingVariants::uniform("exact I"),
                                    event: tactic("exact", tactic("refine", Event::empty())),
                                },
                            },
                        ],
                        outcome: Outcome::Proved,
                    },
                },
            ],
        };

        let stats = trace.statistics();
        assert_eq!(stats.declarations, 3);
        assert_eq!(stats.inductives, 1);
        assert_eq!(stats.constructors, 1);
        assert_eq!(stats.interactives, 1);
        assert_eq!(stats.steps, 2);
        assert_eq!(stats.tactic_events, 2);
        assert_eq!(stats.max_event_depth, 2);
    }
}
