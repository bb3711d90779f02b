//! Rendering of top-level declarations.

use prooflens_core::trace::{Declaration, DeclarationKind};

use super::{RenderContext, step::render_step};
use crate::{
    toggle::{DeclarationKey, StepId},
    view::{Element, Node},
};

/// Renders one declaration. `key` is attached as identity only and does not
/// change what is displayed.
pub(crate) fn render_declaration(
    ctx: &RenderContext<'_>,
    declaration: &Declaration,
    key: &DeclarationKey,
) -> Node {
    let path = code(&declaration.path);
    let type_ = code(ctx.select(&declaration.type_));

    let (class, body) = match &declaration.kind {
        DeclarationKind::Inductive => (
            "declaration-inductive",
            body()
                .with_child(keyword("Inductive"))
                .with_child(" ")
                .with_child(path)
                .with_child(" : ")
                .with_child(type_)
                .with_child("."),
        ),
        DeclarationKind::Constructor { ind_path } => (
            "declaration-constructor",
            body()
                .with_child(keyword("Constructor"))
                .with_child(" ")
                .with_child(path)
                .with_child(" ∈ ")
                .with_child(code(ind_path))
                .with_child(" : ")
                .with_child(type_)
                .with_child("."),
        ),
        DeclarationKind::Assumption => (
            "declaration-assumption",
            body()
                .with_child(keyword("Axiom"))
                .with_child(" ")
                .with_child(path)
                .with_child(" : ")
                .with_child(type_)
                .with_child("."),
        ),
        DeclarationKind::Definition { value, equations } => {
            let equations = equations
                .iter()
                .map(|equation| Element::new("li").with_child(code(ctx.select(equation))));

            (
                "declaration-definition",
                body()
                    .with_child(keyword("Definition"))
                    .with_child(" ")
                    .with_child(path)
                    .with_child(" : ")
                    .with_child(type_)
                    .with_child(" :=")
                    .with_child(Element::new("br"))
                    .with_child(
                        Element::new("span")
                            .with_class("declaration-definition_value")
                            .with_child(code(ctx.select(value))),
                    )
                    .with_child(".")
                    .with_child(
                        Element::new("ol")
                            .with_class("declaration-definition_equations")
                            .with_children(equations),
                    ),
            )
        }
        DeclarationKind::Interactive { steps, outcome } => {
            let steps = steps.iter().enumerate().map(|(i, step)| {
                Element::new("li").with_child(render_step(ctx, step, StepId::new(key.clone(), i)))
            });

            (
                "declaration-interactive",
                body()
                    .with_child(keyword("Theorem"))
                    .with_child(" ")
                    .with_child(path)
                    .with_child(" : ")
                    .with_child(type_)
                    .with_child(".")
                    .with_child(
                        Element::new("ol")
                            .with_class("declaration-interactive_steps")
                            .with_children(steps),
                    )
                    .with_child(
                        Element::new("div")
                            .with_class("declaration-interactive_outcome")
                            .with_child(keyword(outcome.keyword()))
                            .with_child("."),
                    ),
            )
        }
    };

    Element::new("div")
        .with_class("declaration")
        .with_class(class)
        .with_attr("data-key", key.to_string())
        .with_child(body)
        .into()
}

fn body() -> Element {
    Element::new("div").with_class("declaration_body")
}

fn keyword(text: &str) -> Element {
    Element::new("span").with_class("keyword").with_child(text)
}

fn code(text: &str) -> Element {
    Element::new("code").with_child(text)
}
