//! Rendering of proof-script steps.

use prooflens_core::trace::{Step, StepKind};

use super::{RenderContext, event::render_event};
use crate::{
    toggle::{NodeId, StepId},
    view::{Element, Node},
};

/// Renders one step. Tactic steps hide their execution tree behind a
/// disclosure; the tree restarts at depth 0.
pub(crate) fn render_step(ctx: &RenderContext<'_>, step: &Step, id: StepId) -> Node {
    match &step.kind {
        StepKind::Tactic {
            goal_selector,
            tactic_raw,
            tactic,
            event,
        } => {
            let open = ctx.options().open_steps || ctx.toggles().is_step_open(&id);

            let summary = Element::new("summary")
                .with_attr("title", tactic_raw.as_str())
                .with_child(Element::new("pre").with_child(goal_selector.as_str()))
                .with_child(": ")
                .with_child(Element::new("pre").with_child(ctx.select(tactic)))
                .with_child(".");

            let details = Element::new("details")
                .with_attr("data-step", id.to_string())
                .with_child(summary)
                .with_child(
                    Element::new("div")
                        .with_class("step-tactic_event")
                        .with_child(render_event(ctx, event, 0, &mut NodeId::root(id))),
                );
            let details = if open {
                details.with_attr("open", "")
            } else {
                details
            };

            step_div("step-tactic").with_child(details).into()
        }
        StepKind::StartSubproof => step_div("step-start-subproof")
            .with_child(Element::new("code").with_child("{"))
            .into(),
        StepKind::EndSubproof => step_div("step-end-subproof")
            .with_child(Element::new("code").with_child("}"))
            .into(),
        StepKind::Bullet { bullet } => step_div("step-bullet")
            .with_child(Element::new("code").with_child(bullet.as_str()))
            .into(),
    }
}

fn step_div(class: &'static str) -> Element {
    Element::new("div").with_class("step").with_class(class)
}
