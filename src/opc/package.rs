//! OPC Package implementation
//!
//! Opens a DOCX file as a ZIP package and pulls out the main document part

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use zip::read::ZipArchive;

/// Archive entry holding the document body
pub const DOCUMENT_PART: &str = "word/document.xml";

/// An OPC package (ZIP-based container for DOCX)
#[derive(Debug)]
pub struct Package<R> {
    archive: ZipArchive<R>,
}

impl Package<BufReader<File>> {
    /// Open a package from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<'a> Package<Cursor<&'a [u8]>> {
    /// Open a package from bytes
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> Package<R> {
    /// Open a package from a reader
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        log::debug!("opened package with {} entries", archive.len());
        Ok(Self { archive })
    }

    /// Number of entries in the archive
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the archive has no entries
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Read a named entry as raw bytes
    pub fn read_part(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(Error::MissingPart(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        // Sized by what is actually read, not by the entry header
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        log::debug!("read {} ({} bytes)", name, data.len());
        Ok(data)
    }

    /// Read the main document part (word/document.xml) as UTF-8
    pub fn document_xml(&mut self) -> Result<String> {
        let data = self.read_part(DOCUMENT_PART)?;
        let xml = std::str::from_utf8(&data)?;
        Ok(xml.to_string())
    }
}
