//! ecorep-docx - flow rendering via OOXML
//!
//! Generates a flowing word-processor document (DOCX) from an
//! `ecorep_ast::Document`. A DOCX file is a ZIP archive of XML parts;
//! [`package`] owns the archive, [`skeleton`] provides the static parts
//! (content types, relationships, styles, numbering), and [`writer`]
//! emits `word/document.xml` from the Document Model.
//!
//! # Example
//!
//! ```ignore
//! let doc = ecorep_core::compile(report_text);
//! let docx_bytes = ecorep_docx::render_docx(&doc)?;
//! ```

pub mod error;
pub mod package;
pub mod skeleton;
pub mod writer;

pub use error::{DocxError, Result};
pub use package::DocxPackage;
pub use writer::DocxWriter;

/// Render a document to DOCX bytes
pub fn render_docx(doc: &ecorep_ast::Document) -> Result<Vec<u8>> {
    ecorep_ast::render(doc, DocxWriter::new())
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
