//! View tree produced by the renderers.
//!
//! The renderers never emit markup directly. They build a tree of
//! [`Node`]s that the exporters in [`crate::export`] serialize to HTML or
//! plain text. The tree is also what tests inspect.

/// A node of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Returns the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this subtree in document order.
    ///
    /// A closed `details` element contributes only its `summary`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                let closed = element.tag == "details" && !element.has_attr("open");
                for child in &element.children {
                    if closed && child.as_element().is_none_or(|e| e.tag != "summary") {
                        continue;
                    }
                    child.collect_text(out);
                }
            }
        }
    }

    /// Every element of this subtree in depth-first order, including the
    /// node itself.
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(&mut found);
        found
    }

    fn collect_elements<'a>(&'a self, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            found.push(element);
            for child in &element.children {
                child.collect_elements(found);
            }
        }
    }

    /// Elements of this subtree carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|element| element.has_class(class))
            .collect()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element with a static tag, style classes and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<&'static str>,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_class_if(self, condition: bool, class: &'static str) -> Self {
        if condition {
            self.with_class(class)
        } else {
            self
        }
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> &[&'static str] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_in_document_order() {
        let node: Node = Element::new("div")
            .with_child(Element::new("span").with_child("Axiom"))
            .with_child(" ")
            .with_child(Element::new("code").with_child("T"))
            .with_child(".")
            .into();

        assert_eq!(node.text_content(), "Axiom T.");
    }

    #[test]
    fn test_closed_details_only_shows_summary() {
        let details = Element::new("details")
            .with_child(Element::new("summary").with_child("head"))
            .with_child(Element::new("div").with_child("body"));

        assert_eq!(Node::from(details.clone()).text_content(), "head");
        assert_eq!(
            Node::from(details.with_attr("open", "")).text_content(),
            "headbody"
        );
    }

    #[test]
    fn test_find_by_class() {
        let node: Node = Element::new("div")
            .with_class("outer")
            .with_child(Element::new("div").with_class("inner").with_class("x"))
            .with_child(Element::new("div").with_class("inner"))
            .into();

        assert_eq!(node.find_by_class("inner").len(), 2);
        assert_eq!(node.find_by_class("outer").len(), 1);
        assert!(node.find_by_class("missing").is_empty());
    }

    #[test]
    fn test_class_if() {
        let element = Element::new("table")
            .with_class_if(true, "deep")
            .with_class_if(false, "shallow");
        assert_eq!(element.classes(), &["deep"]);
    }

    #[test]
    fn test_attr_lookup() {
        let element = Element::new("tr").with_attr("data-node", "a#0/1/0");
        assert_eq!(element.attr("data-node"), Some("a#0/1/0"));
        assert!(!element.has_attr("title"));
    }
}
