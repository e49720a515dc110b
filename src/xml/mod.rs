//! XML utilities and the in-memory element tree

mod namespace;
mod raw;

pub use namespace::*;
pub use raw::{XmlElement, XmlNode};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use quick_xml::events::Event;
    use quick_xml::Reader;

    #[test]
    fn test_element_from_reader() {
        let xml = r#"<w:custom foo="bar"><w:child>text</w:child></w:custom>"#;
        let mut reader = Reader::from_str(xml);

        let mut buf = Vec::new();
        if let Event::Start(e) = reader.read_event_into(&mut buf).unwrap() {
            let elem = XmlElement::from_reader(&mut reader, &e).unwrap();

            assert_eq!(elem.name, "w:custom");
            assert_eq!(elem.attr("foo"), Some("bar"));
            assert_eq!(elem.children.len(), 1);
            assert_eq!(elem.elements().next().unwrap().text(), "text");
        }
    }

    #[test]
    fn test_parse_keeps_whitespace() {
        let xml = r#"<?xml version="1.0"?><w:t xml:space="preserve">  a &amp; b  </w:t>"#;
        let root = XmlElement::parse(xml).unwrap();

        assert_eq!(root.name, TEXT);
        assert_eq!(root.attr(XML_SPACE), Some(PRESERVE));
        assert_eq!(root.text(), "  a & b  ");
    }

    #[test]
    fn test_parse_merges_cdata() {
        let root = XmlElement::parse("<w:t>one<![CDATA[ <two> ]]>three</w:t>").unwrap();
        assert_eq!(root.children, vec![XmlNode::Text("one <two> three".into())]);
    }

    #[test]
    fn test_parse_empty_root() {
        let root = XmlElement::parse(r#"<w:p w:rsidR="00A1"/>"#).unwrap();
        assert_eq!(root, XmlElement::new(PARAGRAPH).with_attr("w:rsidR", "00A1"));
    }

    #[test]
    fn test_parse_truncated() {
        let err = XmlElement::parse("<w:document><w:body>").unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_) | Error::Xml(_)));

        let err = XmlElement::parse("   ").unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));
    }

    #[test]
    fn test_namespace_constants() {
        assert!(W.contains("wordprocessingml"));
        assert!(PARAGRAPH.starts_with("w:"));
    }
}
