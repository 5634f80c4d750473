//! A small element tree standing in for the browser DOM.
//!
//! Pages are assembled as [`Element`]s and serialized to HTML once the page
//! has settled. Text and attribute values are escaped on serialization;
//! [`Node::Script`] bodies are written verbatim and must already be safe to
//! embed.

use std::fmt::Write;
use quick_xml::escape::escape;

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Script(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

const VOID_TAGS: [&str; 4] = ["img", "link", "meta", "br"];

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    pub fn with_script(mut self, body: impl Into<String>) -> Self {
        self.children.push(Node::Script(body.into()));
        self
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Concatenated text of this element and its descendants, scripts excluded.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) => out.push_str(text),
                Node::Script(_) => {}
            }
        }
    }

    /// Depth-first search, including `self`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(predicate))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|element: &Element| element.id() == Some(id))
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|element: &Element| element.has_class(class))
    }

    pub fn scripts(&self) -> Vec<&str> {
        let mut scripts = Vec::new();
        self.collect_scripts(&mut scripts);
        scripts
    }

    fn collect_scripts<'a>(&'a self, out: &mut Vec<&'a str>) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_scripts(out),
                Node::Script(body) => out.push(body),
                Node::Text(_) => {}
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value.as_str()));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape(text.as_str())),
                Node::Script(body) => out.push_str(body),
            }
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}
