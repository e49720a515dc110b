//! # antidocx
//!
//! Extract the text of a DOCX document and lay it out as word-wrapped
//! plain text, in the spirit of `antiword`.
//!
//! ## Features
//!
//! - Reads `word/document.xml` straight out of the ZIP container
//! - Paragraphs, runs, hyperlinks, smart tags and custom XML wrappers
//! - Greedy wrapping at a configurable column width
//! - Tables and anything unrecognized are skipped, never an error
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use antidocx::{Document, FormatOptions};
//!
//! let doc = Document::open("example.docx")?;
//! print!("{}", doc.render(&FormatOptions::new().width(72)));
//! ```

pub mod document;
pub mod error;
pub mod opc;
pub mod options;
pub mod xml;

pub use document::Document;
pub use error::{Error, Result};
pub use opc::Package;
pub use options::{FormatOptions, DEFAULT_WIDTH};
