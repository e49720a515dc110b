//! Open Packaging Convention (OPC) access
//!
//! This module handles the ZIP-based package format used by DOCX files.

mod package;

pub use package::{Package, DOCUMENT_PART};
