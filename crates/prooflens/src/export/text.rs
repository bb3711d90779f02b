//! Plain-text serialization.
//!
//! Every block-level element starts a new line. Ordered lists are numbered
//! and indented, and tactic details are indented below their header, so a
//! tactic tree reads top to bottom.

use crate::view::{Element, Node};

const INDENT: &str = "  ";

/// Elements rendered inline with their surroundings.
const INLINE_ELEMENTS: &[&str] = &["span", "code", "pre", "i", "b"];

/// Serializes `node` as indented plain text.
pub fn render(node: &Node) -> String {
    let mut writer = TextWriter::default();
    writer.node(node);
    writer.flush();

    let mut out = writer.lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

#[derive(Default)]
struct TextWriter {
    lines: Vec<String>,
    current: String,
    indent: usize,
    prefix: Option<String>,
}

impl TextWriter {
    fn node(&mut self, node: &Node) {
        match node {
            Node::Text(text) => self.current.push_str(text),
            Node::Element(element) => self.element(element),
        }
    }

    fn element(&mut self, element: &Element) {
        if element.tag() == "br" {
            self.flush();
            return;
        }

        if INLINE_ELEMENTS.contains(&element.tag()) {
            self.children(element);
            return;
        }

        let indented = element.tag() == "ol"
            || element.has_class("event-tactic_details")
            || element.has_class("step-tactic_event");

        self.flush();
        if indented {
            self.indent += 1;
        }

        if element.tag() == "ol" {
            for (i, child) in element.children().iter().enumerate() {
                self.prefix = Some(format!("{}. ", i + 1));
                self.node(child);
                self.flush();
            }
            self.prefix = None;
        } else {
            self.children(element);
        }

        self.flush();
        if indented {
            self.indent -= 1;
        }
    }

    fn children(&mut self, element: &Element) {
        let closed = element.tag() == "details" && !element.has_attr("open");
        for child in element.children() {
            if closed && child.as_element().is_none_or(|e| e.tag() != "summary") {
                continue;
            }
            self.node(child);
        }
    }

    /// Emits the pending text. Embedded newlines keep their relative
    /// indentation and hang under the list number.
    fn flush(&mut self) {
        let text = self.current.trim();
        if !text.is_empty() {
            let indent = INDENT.repeat(self.indent);
            let prefix = self.prefix.take().unwrap_or_default();
            let hanging = " ".repeat(prefix.chars().count());
            for (i, line) in text.lines().enumerate() {
                let lead = if i == 0 { &prefix } else { &hanging };
                let out = format!("{indent}{lead}{line}");
                self.lines.push(out.trim_end().to_string());
            }
        }
        self.current.clear();
    }
}
