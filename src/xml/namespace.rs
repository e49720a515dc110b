//! Qualified names used in WordprocessingML document bodies

/// WordprocessingML main namespace
pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Document root (w:document)
pub const DOCUMENT: &str = "w:document";
/// Document body (w:body)
pub const BODY: &str = "w:body";
/// Paragraph (w:p)
pub const PARAGRAPH: &str = "w:p";
/// Run (w:r)
pub const RUN: &str = "w:r";
/// Text leaf (w:t)
pub const TEXT: &str = "w:t";
/// Hyperlink (w:hyperlink)
pub const HYPERLINK: &str = "w:hyperlink";
/// Smart tag annotation span (w:smartTag)
pub const SMART_TAG: &str = "w:smartTag";
/// Custom XML wrapper (w:customXml)
pub const CUSTOM_XML: &str = "w:customXml";
/// Table (w:tbl)
pub const TABLE: &str = "w:tbl";

/// Whitespace handling attribute on text leaves
pub const XML_SPACE: &str = "xml:space";
/// Value of `xml:space` that keeps leading/trailing whitespace
pub const PRESERVE: &str = "preserve";
