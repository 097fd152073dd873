//! DOCX package assembly
//!
//! A DOCX file is a ZIP archive of XML parts. The package holds all
//! parts in memory keyed by path and writes them out in sorted order so
//! identical documents produce identically ordered archives.

use std::collections::BTreeMap;
use std::io::{Cursor, Seek, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::Result;
use crate::skeleton;

/// An in-memory OOXML package
#[derive(Debug)]
pub struct DocxPackage {
    /// All parts in the archive, keyed by path
    files: BTreeMap<String, Vec<u8>>,
}

impl DocxPackage {
    /// Create a package pre-populated with the static parts
    ///
    /// `word/document.xml` is not included; set it before writing.
    pub fn new() -> Self {
        let mut package = Self {
            files: BTreeMap::new(),
        };
        package.set_string("[Content_Types].xml", skeleton::CONTENT_TYPES);
        package.set_string("_rels/.rels", skeleton::ROOT_RELS);
        package.set_string("word/_rels/document.xml.rels", skeleton::DOCUMENT_RELS);
        package.set_string("word/styles.xml", skeleton::STYLES_XML);
        package.set_string("word/numbering.xml", skeleton::NUMBERING_XML);
        package
    }

    /// Set or update a part's contents
    pub fn set_string(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into().into_bytes());
    }

    /// Check if a part exists in the package
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Write the package to any writer as a ZIP archive
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        // BTreeMap iteration keeps output deterministic
        for (path, contents) in &self.files {
            zip.start_file(path.as_str(), options)?;
            zip.write_all(contents)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Write the package and return the archive bytes
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }
}

impl Default for DocxPackage {
    fn default() -> Self {
        Self::new()
    }
}
