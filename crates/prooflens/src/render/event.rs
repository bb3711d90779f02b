//! Rendering of tactic execution trees.

use prooflens_core::trace::{Event, PrintingVariants, Reference, TacticKind};

use super::RenderContext;
use crate::{
    toggle::{NodeId, TacticState},
    view::{Element, Node},
};

/// Placeholder shown instead of a collapsed subtree.
pub const COLLAPSED_PLACEHOLDER: &str = "<collapsed>";

/// Renders `event` found at position `id`, `depth` tactics below the root.
///
/// Sequences and dispatches keep the depth of their parent; only the
/// details of a tactic are one level deeper.
pub(crate) fn render_event(
    ctx: &RenderContext<'_>,
    event: &Event,
    depth: usize,
    id: &mut NodeId,
) -> Node {
    match event {
        Event::Sequence { elements } => {
            let cells: Vec<Element> = elements
                .iter()
                .enumerate()
                .map(|(i, element)| {
                    Element::new("td").with_child(render_child(ctx, element, depth, id, i))
                })
                .collect();

            table("event-sequence")
                .with_child(Element::new("tbody").with_child(Element::new("tr").with_children(cells)))
                .into()
        }
        Event::Dispatch { branches, .. } => {
            let rows: Vec<Element> = branches
                .iter()
                .enumerate()
                .map(|(i, branch)| {
                    Element::new("tr").with_child(
                        Element::new("td").with_child(render_child(ctx, branch, depth, id, i)),
                    )
                })
                .collect();

            table("event-dispatch")
                .with_child(Element::new("tbody").with_children(rows))
                .into()
        }
        Event::Tactic {
            kind,
            tactic,
            details,
            ..
        } => {
            let state = TacticState::new(depth, details);
            let visible = ctx
                .toggles()
                .is_visible(id, state, ctx.options().expand_all);

            let header = Element::new("tr")
                .with_class("event-tactic_header")
                .with_attr("data-node", id.to_string())
                .with_child(
                    Element::new("th")
                        .with_attr("title", tooltip(kind, tactic))
                        .with_child(Element::new("pre").with_child(ctx.select(tactic))),
                );

            let body: Node = if visible {
                render_child(ctx, details, depth + 1, id, 0)
            } else {
                Element::new("i").with_child(COLLAPSED_PLACEHOLDER).into()
            };

            table("event-tactic")
                .with_class_if(state.is_deep(), "event-tactic-deep")
                .with_class_if(!visible, "event-tactic-collapsed")
                .with_child(
                    Element::new("tbody").with_child(header).with_child(
                        Element::new("tr").with_child(
                            Element::new("td")
                                .with_class("event-tactic_details")
                                .with_child(body),
                        ),
                    ),
                )
                .into()
        }
        Event::Message { message } => table("event-message")
            .with_child(
                Element::new("tbody").with_child(
                    Element::new("tr").with_child(
                        Element::new("td")
                            .with_child("(﹡")
                            .with_child(Element::new("code").with_child(message.as_str()))
                            .with_child("﹡)"),
                    ),
                ),
            )
            .into(),
    }
}

fn render_child(
    ctx: &RenderContext<'_>,
    child: &Event,
    depth: usize,
    id: &mut NodeId,
    index: usize,
) -> Node {
    id.push(index);
    let node = render_event(ctx, child, depth, id);
    id.pop();
    node
}

fn table(class: &'static str) -> Element {
    Element::new("table").with_class("event").with_class(class)
}

/// Tooltip of a tactic header: the tactic kind, its JSON-quoted source and
/// the references of its notation.
fn tooltip(kind: &TacticKind, tactic: &PrintingVariants) -> String {
    let source = serde_json::Value::String(kind.source().to_string());
    let mut title = format!("{} {source}", kind.name());

    if !tactic.references.is_empty() {
        let references: Vec<&str> = tactic.references.iter().map(Reference::path).collect();
        title.push_str("\nreferences: ");
        title.push_str(&references.join(", "));
    }

    title
}
