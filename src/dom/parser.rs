use crate::dom::{DocumentModel, HeadElement, HeadNode};
use scraper::{ElementRef, Html, Node};

/// A parsed HTML document, reduced to its head region.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    pub head: HeadElement,
    pub url: String,
}

/// Parse raw HTML and keep the `<head>` the HTML parser built.
///
/// Tree construction follows html5ever, so elements a browser would move
/// into `<body>` do not show up as head children here either.
pub fn parse_html(html: &str, url: &str) -> HtmlDocument {
    let document = Html::parse_document(html);

    let head = document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "head")
        .map(convert_element)
        .unwrap_or_else(|| HeadElement::new("head"));

    log::debug!(
        "parsed {} head children from {}",
        head.element_children().count(),
        url
    );

    HtmlDocument {
        head,
        url: url.to_string(),
    }
}

fn convert_element(el: ElementRef<'_>) -> HeadElement {
    let mut node = HeadElement::new(el.value().name());
    node.attributes = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    for child_ref in el.children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child_ref) {
                    node.children.push(HeadNode::Element(convert_element(child_el)));
                }
            }
            Node::Text(t) => node.children.push(HeadNode::Text(t.text.to_string())),
            _ => {}
        }
    }

    node
}

impl DocumentModel for HtmlDocument {
    type Element = HeadElement;
    type Container = HeadElement;

    fn head_children(&self) -> Vec<HeadElement> {
        self.head.element_children().cloned().collect()
    }

    fn head(&self) -> &HeadElement {
        &self.head
    }

    fn clone_into_container<'a, I>(&self, elements: I) -> HeadElement
    where
        I: IntoIterator<Item = &'a HeadElement>,
    {
        elements
            .into_iter()
            .fold(HeadElement::new("head"), |head, el| head.with_child(el.clone()))
    }
}
