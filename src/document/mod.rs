//! Document model - text extraction and line wrapping for DOCX documents

mod body;
mod kind;
mod paragraph;
mod run;
mod text;

pub use body::format_body;
pub use kind::NodeKind;
pub use paragraph::{
    format_paragraph, hyperlink_tokens, paragraph_tokens, smart_tag_tokens, LineWrapper,
};
pub use run::run_tokens;
pub use text::{split_text, text_tokens};

use crate::error::Result;
use crate::opc::Package;
use crate::options::FormatOptions;
use crate::xml::XmlElement;
use std::io::{Read, Seek};
use std::path::Path;

/// A parsed DOCX document body
#[derive(Clone, Debug)]
pub struct Document {
    /// Root element of word/document.xml
    root: XmlElement,
}

impl Document {
    /// Open a document from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut package = Package::open(path)?;
        Self::from_package(&mut package)
    }

    /// Open a document from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut package = Package::from_bytes(bytes)?;
        Self::from_package(&mut package)
    }

    /// Create document from an OPC package
    pub fn from_package<R: Read + Seek>(package: &mut Package<R>) -> Result<Self> {
        let xml = package.document_xml()?;
        Self::from_xml(&xml)
    }

    /// Parse document.xml content
    pub fn from_xml(xml: &str) -> Result<Self> {
        let root = XmlElement::parse(xml)?;
        if root.kind() != NodeKind::Document {
            log::warn!("unexpected root element <{}>", root.name);
        }

        let doc = Self { root };
        if doc.bodies().next().is_none() {
            log::warn!("document has no w:body, nothing to print");
        }
        Ok(doc)
    }

    /// Body elements (w:document/w:body)
    pub fn bodies(&self) -> impl Iterator<Item = &XmlElement> {
        let is_document = self.root.kind() == NodeKind::Document;
        self.root
            .elements()
            .filter(move |e| is_document && e.kind() == NodeKind::Body)
    }

    /// Wrapped lines of every body, in document order
    pub fn lines(&self, options: &FormatOptions) -> Vec<String> {
        let lines: Vec<String> = self
            .bodies()
            .flat_map(|body| format_body(body, options.width))
            .collect();
        log::debug!("laid out {} lines at width {}", lines.len(), options.width);
        lines
    }

    /// Full text output: every line newline-terminated, then one blank line
    pub fn render(&self, options: &FormatOptions) -> String {
        let mut output = String::new();
        for line in self.lines(options) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
        output
    }
}
