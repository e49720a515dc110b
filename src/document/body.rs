//! Document body (w:body) and block-level content

use crate::document::{format_paragraph, NodeKind};
use crate::xml::XmlElement;

/// Lay out every paragraph of a body, in document order.
///
/// Paragraphs wrapped in w:customXml are treated as direct children of the
/// body. Tables and unknown blocks contribute nothing.
pub fn format_body(body: &XmlElement, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for block in body.elements() {
        match block.kind() {
            NodeKind::Paragraph => lines.extend(format_paragraph(block, width)),
            NodeKind::CustomXml => {
                for para in block
                    .elements()
                    .filter(|child| child.kind() == NodeKind::Paragraph)
                {
                    lines.extend(format_paragraph(para, width));
                }
            }
            NodeKind::Table => log::debug!("skipping table"),
            _ => log::trace!("skipping <{}> in body", block.name),
        }
    }

    lines
}
