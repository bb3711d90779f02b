//! HTML serialization.

use crate::view::{Element, Node};

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br"];

const STYLESHEET: &str = r#"
body { font-family: sans-serif; margin: 1em; }
pre, code { font-family: monospace; margin: 0; display: inline; white-space: pre-wrap; }
.keyword { font-weight: bold; color: #7a3e9d; }
.declaration { margin: 0.5em 0; padding: 0.25em 0.5em; border-left: 3px solid #ccc; }
.declaration-definition_value { display: block; padding-left: 2em; }
.step summary { cursor: pointer; }
.step-tactic_event { overflow-x: auto; padding: 0.25em; }
table.event { border-collapse: collapse; vertical-align: top; }
table.event td { vertical-align: top; padding: 0 0.25em; }
.event-tactic { border: 1px solid #999; }
.event-tactic_header th { text-align: left; background: #eef; cursor: pointer; }
.event-tactic-deep .event-tactic_header th { background: #fee; }
.event-sequence > tbody > tr > td { border-left: 1px dotted #bbb; }
.event-dispatch > tbody > tr > td { border-top: 1px dotted #bbb; }
.event-message td { color: #666; font-style: italic; }
.trace-pretty code, .trace-pretty pre { font-family: serif; }
"#;

/// Serializes `node` as an HTML fragment.
pub fn render_fragment(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Wraps the rendering of a trace in a standalone HTML page.
///
/// `header` lists informational lines shown above the trace, such as the
/// source files of the trace.
pub fn render_document(title: &str, header: &[String], body: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n<title>");
    escape_text(&mut out, title);
    out.push_str("</title>\n<style>");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"app\">\n");

    if !header.is_empty() {
        out.push_str("<ul class=\"app_sub-filenames\">\n");
        for line in header {
            out.push_str("<li><code>");
            escape_text(&mut out, line);
            out.push_str("</code></li>\n");
        }
        out.push_str("</ul>\n");
    }

    out.push_str("<div class=\"app_trace\">");
    write_node(&mut out, body);
    out.push_str("</div>\n</div>\n</body>\n</html>\n");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => escape_text(out, text),
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag());

    if !element.classes().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&element.classes().join(" "));
        out.push('"');
    }

    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            escape_attr(out, value);
            out.push('"');
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag()) {
        return;
    }

    for child in element.children() {
        write_node(out, child);
    }

    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn escape_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_escapes_text() {
        let node: Node = Element::new("i").with_child("<collapsed>").into();
        assert_eq!(render_fragment(&node), "<i>&lt;collapsed&gt;</i>");
    }

    #[test]
    fn test_fragment_writes_classes_and_attributes() {
        let node: Node = Element::new("th")
            .with_class("a")
            .with_class("b")
            .with_attr("title", "Primitive \"x\"\nrefs")
            .with_child("x && y")
            .into();

        assert_eq!(
            render_fragment(&node),
            "<th class=\"a b\" title=\"Primitive &quot;x&quot;&#10;refs\">x &amp;&amp; y</th>"
        );
    }

    #[test]
    fn test_boolean_attribute() {
        let node: Node = Element::new("details").with_attr("open", "").into();
        assert_eq!(render_fragment(&node), "<details open></details>");
    }

    #[test]
    fn test_void_element() {
        let node: Node = Element::new("div")
            .with_child("a")
            .with_child(Element::new("br"))
            .with_child("b")
            .into();
        assert_eq!(render_fragment(&node), "<div>a<br>b</div>");
    }

    #[test]
    fn test_document_wraps_body() {
        let body: Node = Element::new("div").with_class("trace").into();
        let html = render_document("A <trace>", &["a.v".to_string()], &body);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &lt;trace&gt;</title>"));
        assert!(html.contains("<li><code>a.v</code></li>"));
        assert!(html.contains("<div class=\"app_trace\"><div class=\"trace\"></div></div>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
