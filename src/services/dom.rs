// src/services/dom.rs

//! Read-only view over a parsed page.
//!
//! The extractors only need two things from the markup: descendants that
//! match a structural marker, and the text or attributes of a node. Both are
//! exposed here so the extractors never touch `scraper` types directly.

use scraper::node::Node as DomNode;
use scraper::{ElementRef, Html, Selector};

use crate::error::ParseFailure;

/// Elements that separate words when their text is flattened.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// A parsed HTML snapshot.
pub struct Page {
    document: Html,
}

impl Page {
    /// Parse markup, failing only when there is nothing to extract.
    pub fn parse(html: &str) -> Result<Self, ParseFailure> {
        if html.trim().is_empty() {
            return Err(ParseFailure::EmptyDocument);
        }

        let page = Self {
            document: Html::parse_document(html),
        };
        if !page.has_content() {
            return Err(ParseFailure::NoContent);
        }
        Ok(page)
    }

    /// The document element.
    pub fn root(&self) -> Node<'_> {
        Node(self.document.root_element())
    }

    fn has_content(&self) -> bool {
        self.document.root_element().descendants().any(|node| match node.value() {
            DomNode::Element(el) => !matches!(el.name(), "html" | "head" | "body"),
            DomNode::Text(text) => !text.trim().is_empty(),
            _ => false,
        })
    }
}

/// An element inside a [`Page`].
#[derive(Clone, Copy, Debug)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// All descendants matching `selector`, in document order.
    pub fn find_all(self, selector: &'a Selector) -> impl Iterator<Item = Node<'a>> + 'a {
        self.0.select(selector).map(Node)
    }

    /// First descendant matching `selector`.
    pub fn find_first(self, selector: &'a Selector) -> Option<Node<'a>> {
        self.find_all(selector).next()
    }

    /// Last descendant matching `selector`.
    pub fn find_last(self, selector: &'a Selector) -> Option<Node<'a>> {
        self.find_all(selector).last()
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Concatenated descendant text, trimmed.
    pub fn text(&self) -> String {
        self.0.text().collect::<String>().trim().to_string()
    }

    /// Descendant text with every subtree matching `excluded` left out.
    ///
    /// Block-level elements are separated by a space so adjacent paragraphs
    /// do not run together. Whitespace is not collapsed.
    pub fn text_excluding(&self, excluded: &Selector) -> String {
        let mut out = String::new();
        collect_text(self.0, excluded, &mut out);
        out
    }
}

fn collect_text(element: ElementRef<'_>, excluded: &Selector, out: &mut String) {
    for child in element.children() {
        match child.value() {
            DomNode::Text(text) => out.push_str(text),
            DomNode::Element(_) => {
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                if excluded.matches(&child_el) {
                    continue;
                }

                let block = BLOCK_ELEMENTS.contains(&child_el.value().name());
                if block {
                    out.push(' ');
                }
                collect_text(child_el, excluded, out);
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}
