//! The renderer seam
//!
//! Both output backends consume the Document Model through [`BlockSink`]:
//! one primitive per block kind, plus `finish` to flush the owned output
//! buffer into bytes. The shared [`render`] walker dispatches blocks in
//! order, so the two backends see exactly the same structure and the same
//! `featured` flags.

use crate::block::Block;
use crate::document::Document;

/// Primitive emission capabilities a renderer must provide
///
/// Each method receives the `featured` flag for the block; how that maps
/// to a visual treatment is renderer policy. The sink owns its output
/// buffer exclusively until `finish` hands it to the caller.
pub trait BlockSink {
    /// Renderer-specific failure type
    type Error;

    /// Emit the document title (at most once, before any block)
    fn title(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Emit a heading block
    fn heading(&mut self, level: u8, text: &str, featured: bool) -> Result<(), Self::Error>;

    /// Emit a paragraph block
    fn paragraph(&mut self, text: &str, featured: bool) -> Result<(), Self::Error>;

    /// Emit a list block; `items` is never empty
    fn list(&mut self, items: &[String], featured: bool) -> Result<(), Self::Error>;

    /// Emit a table block; the first row is the header
    fn table(&mut self, rows: &[Vec<String>], featured: bool) -> Result<(), Self::Error>;

    /// Finalize the output and return the rendered bytes
    fn finish(self) -> Result<Vec<u8>, Self::Error>;
}

/// Render a document through a sink
///
/// Emits the title (when present), then every block in insertion order,
/// then finalizes. An empty document still produces a valid output.
pub fn render<S: BlockSink>(doc: &Document, mut sink: S) -> Result<Vec<u8>, S::Error> {
    if let Some(ref title) = doc.metadata.title {
        sink.title(title)?;
    }

    for block in &doc.blocks {
        match block {
            Block::Heading(h) => sink.heading(h.level, &h.text, h.featured)?,
            Block::Paragraph(p) => sink.paragraph(&p.text, p.featured)?,
            Block::List(l) => sink.list(&l.items, l.featured)?,
            Block::Table(t) => sink.table(&t.rows, t.featured)?,
        }
    }

    sink.finish()
}
