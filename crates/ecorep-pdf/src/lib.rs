//! ecorep-pdf - print rendering via Typst
//!
//! The print pipeline has two stages:
//!
//! 1. **Transpiler** - converts an `ecorep_ast::Document` to Typst markup
//! 2. **Compiler** - compiles Typst markup to PDF bytes
//!
//! The [`Transpiler`] implements `BlockSink`, so the shared walker drives
//! it; `finish` runs the compile stage and returns the bytes.
//!
//! # Example
//!
//! ```ignore
//! let doc = ecorep_core::compile(report_text);
//! let pdf_bytes = ecorep_pdf::render_pdf(&doc)?;
//! ```

mod compiler;
mod error;
mod transpiler;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use transpiler::Transpiler;

/// Render a document to PDF bytes
pub fn render_pdf(doc: &ecorep_ast::Document) -> Result<Vec<u8>> {
    ecorep_ast::render(doc, Transpiler::new())
}
