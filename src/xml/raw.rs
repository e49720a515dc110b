//! In-memory XML element tree

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

use crate::document::NodeKind;
use crate::error::{Error, Result};

/// A node in the element tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    /// Element node
    Element(XmlElement),
    /// Text node (unescaped, untrimmed)
    Text(String),
}

/// XML element with attributes and children
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Full element name (with prefix, e.g., "w:customXml")
    pub name: String,
    /// Attributes as (name, value) pairs
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create a new empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Parse a complete XML document and return its root element
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        // Text must survive untouched for xml:space="preserve"
        reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => return Self::from_reader(&mut reader, &e),
                Event::Empty(e) => return Self::from_empty(&e),
                Event::Eof => {
                    return Err(Error::InvalidDocument("No root element".into()));
                }
                _ => {}
            }
            buf.clear();
        }
    }

    /// Read a complete element from XML reader (starting after the start tag was read)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        // Open elements, innermost last; nesting depth only costs heap
        let mut open = vec![Self::from_empty(start)?];
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => open.push(Self::from_empty(&e)?),
                Event::Empty(e) => {
                    let child = Self::from_empty(&e)?;
                    if let Some(parent) = open.last_mut() {
                        parent.children.push(XmlNode::Element(child));
                    }
                }
                Event::Text(t) => {
                    let text = t.unescape()?.into_owned();
                    if let Some(parent) = open.last_mut() {
                        parent.push_text(text);
                    }
                }
                Event::CData(c) => {
                    let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                    if let Some(parent) = open.last_mut() {
                        parent.push_text(text);
                    }
                }
                Event::End(_) => {
                    let Some(element) = open.pop() else {
                        return Err(Error::InvalidDocument("Unbalanced end tag".into()));
                    };
                    match open.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(element)),
                        None => return Ok(element),
                    }
                }
                Event::Eof => {
                    let name = open.last().map(|e| e.name.as_str()).unwrap_or_default();
                    return Err(Error::InvalidDocument(format!(
                        "Unexpected EOF inside <{}>",
                        name
                    )));
                }
                _ => {}
            }
            buf.clear();
        }
    }

    /// Create from a start or empty element tag, without children
    pub fn from_empty(e: &BytesStart) -> Result<Self> {
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            attributes.push((
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                attr.unescape_value()?.into_owned(),
            ));
        }

        Ok(Self {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            attributes,
            children: Vec::new(),
        })
    }

    /// Recognized kind of this element
    pub fn kind(&self) -> NodeKind {
        NodeKind::from_name(&self.name)
    }

    /// Get an attribute value by qualified name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements, skipping text nodes
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|c| match c {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Concatenated direct text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                XmlNode::Text(t) => Some(t.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    /// Add an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Add a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    // Adjacent text and CDATA events belong to the same text node
    fn push_text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(XmlNode::Text(text));
        }
    }
}

impl Drop for XmlElement {
    // Unlink descendants onto a heap stack so deep trees drop without recursion
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let XmlNode::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}
