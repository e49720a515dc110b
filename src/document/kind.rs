//! Node kinds recognized by the text extractor

use crate::xml;

/// Closed set of element kinds the extractor understands.
///
/// Anything else maps to [`NodeKind::Other`] and is skipped without error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// w:document
    Document,
    /// w:body
    Body,
    /// w:p
    Paragraph,
    /// w:r
    Run,
    /// w:t
    Text,
    /// w:hyperlink
    Hyperlink,
    /// w:smartTag
    SmartTag,
    /// w:customXml
    CustomXml,
    /// w:tbl (recognized, never rendered)
    Table,
    /// Anything else
    Other,
}

impl NodeKind {
    /// Classify a qualified element name
    pub fn from_name(name: &str) -> Self {
        match name {
            xml::DOCUMENT => NodeKind::Document,
            xml::BODY => NodeKind::Body,
            xml::PARAGRAPH => NodeKind::Paragraph,
            xml::RUN => NodeKind::Run,
            xml::TEXT => NodeKind::Text,
            xml::HYPERLINK => NodeKind::Hyperlink,
            xml::SMART_TAG => NodeKind::SmartTag,
            xml::CUSTOM_XML => NodeKind::CustomXml,
            xml::TABLE => NodeKind::Table,
            _ => NodeKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(NodeKind::from_name("w:p"), NodeKind::Paragraph);
        assert_eq!(NodeKind::from_name("w:smartTag"), NodeKind::SmartTag);
        assert_eq!(NodeKind::from_name("w:tbl"), NodeKind::Table);
        // Local names alone, or other prefixes, are not recognized
        assert_eq!(NodeKind::from_name("p"), NodeKind::Other);
        assert_eq!(NodeKind::from_name("a:p"), NodeKind::Other);
        assert_eq!(NodeKind::from_name("w:pPr"), NodeKind::Other);
    }
}
