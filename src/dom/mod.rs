pub mod condition;
pub mod parser;

use std::fmt;

pub use condition::{Condition, ElementView};

/// Capability the priority engine needs from an element handle.
///
/// Implementations decide how a structural condition is tested; the
/// engine never inspects elements any other way.
pub trait Element {
    /// Does this element satisfy `condition`?
    fn matches(&self, condition: &Condition) -> bool;

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self) -> String;

    /// Raw attribute value, when the handle exposes attributes.
    fn attribute(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// Source of the live head region.
///
/// The document model owns element identity: it hands out element
/// handles, shows its own head for inspection, and builds display
/// containers from cloned elements.
pub trait DocumentModel {
    type Element: Element + Clone + fmt::Display;
    type Container: fmt::Display;

    /// Direct element children of the head, in document order.
    fn head_children(&self) -> Vec<Self::Element>;

    /// The live head itself.
    fn head(&self) -> &Self::Container;

    /// A fresh head populated with deep clones of `elements`, in order.
    fn clone_into_container<'a, I>(&self, elements: I) -> Self::Container
    where
        I: IntoIterator<Item = &'a Self::Element>,
        Self::Element: 'a;
}

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text is serialized verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Child of a head element: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadNode {
    Element(HeadElement),
    Text(String),
}

/// Owned element node. Attributes keep the order the parser reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<HeadNode>,
}

impl HeadElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into().to_ascii_lowercase(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(HeadNode::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: HeadElement) -> Self {
        self.children.push(HeadNode::Element(child));
        self
    }

    /// Element children only, skipping text runs.
    pub fn element_children(&self) -> impl Iterator<Item = &HeadElement> {
        self.children.iter().filter_map(|c| match c {
            HeadNode::Element(el) => Some(el),
            HeadNode::Text(_) => None,
        })
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                HeadNode::Text(t) => buf.push_str(t),
                HeadNode::Element(el) => el.collect_text(buf),
            }
        }
    }

    fn write_open_tag(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {name}=\"{}\"", escape(value, true))?;
            }
        }
        f.write_str(">")
    }
}

impl ElementView for HeadElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl Element for HeadElement {
    fn matches(&self, condition: &Condition) -> bool {
        condition.test(self)
    }

    fn text_content(&self) -> String {
        let mut buf = String::new();
        self.collect_text(&mut buf);
        buf
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        ElementView::attribute(self, name)
    }
}

/// Outer HTML. The alternate form (`{:#}`) puts each element child on
/// its own indented line, which reads better for a whole `<head>`.
impl fmt::Display for HeadElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_open_tag(f)?;
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return Ok(());
        }

        let raw = RAW_TEXT_ELEMENTS.contains(&self.tag.as_str());
        let pretty = f.alternate();
        for child in &self.children {
            match child {
                HeadNode::Text(t) if pretty && t.trim().is_empty() => {}
                HeadNode::Text(t) if raw => f.write_str(t)?,
                HeadNode::Text(t) => f.write_str(&escape(t, false))?,
                HeadNode::Element(el) if pretty => write!(f, "\n  {el}")?,
                HeadNode::Element(el) => write!(f, "{el}")?,
            }
        }
        if pretty && self.element_children().next().is_some() {
            f.write_str("\n")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn escape(s: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
