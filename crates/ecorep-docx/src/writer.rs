//! DOCX Writer
//!
//! Emits WordprocessingML for each block of the Document Model.
//! Featured blocks are shaded with the same green the print renderer
//! uses; featured paragraphs additionally take the `Quote` style.
//!
//! # Example
//!
//! ```ignore
//! use ecorep_docx::DocxWriter;
//!
//! let doc = ecorep_core::compile(report_text);
//! let output = ecorep_ast::render(&doc, DocxWriter::new())?;
//! std::fs::write("climate_report.docx", output)?;
//! ```

use ecorep_ast::{Block, BlockSink, Document};

use crate::error::Result;
use crate::package::DocxPackage;

/// Shading fill for featured blocks (matches the print renderer tint)
const FEATURED_FILL: &str = "E8F5E9";

/// Shading fill for table header rows
const HEADER_FILL: &str = "D9D9D9";

/// DOCX writer accumulating the document body XML
pub struct DocxWriter {
    /// Body XML of word/document.xml
    body: String,
}

impl DocxWriter {
    /// Create a new DocxWriter
    pub fn new() -> Self {
        Self {
            body: String::new(),
        }
    }

    /// Generate the `word/document.xml` part for a whole document
    ///
    /// Used by tests and tooling that inspect the XML without building
    /// the archive.
    pub fn document_xml_for(doc: &Document) -> String {
        let mut writer = Self::new();
        if let Some(ref title) = doc.metadata.title {
            writer.emit_title(title);
        }
        for block in &doc.blocks {
            writer.emit_block(block);
        }
        writer.document_xml()
    }

    /// Wrap the accumulated body into a complete document part
    pub fn document_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\n\
             <w:body>\n{}<w:sectPr><w:pgMar w:top=\"1440\" w:right=\"1140\" w:bottom=\"1440\" w:left=\"1140\"/></w:sectPr>\n\
             </w:body>\n</w:document>",
            self.body
        )
    }

    fn emit_block(&mut self, block: &Block) {
        match block {
            Block::Heading(h) => self.emit_heading(h.level, &h.text, h.featured),
            Block::Paragraph(p) => self.emit_paragraph(&p.text, p.featured),
            Block::List(l) => self.emit_list(&l.items, l.featured),
            Block::Table(t) => self.emit_table(&t.rows, t.featured),
        }
    }

    fn emit_title(&mut self, title: &str) {
        self.body.push_str("<w:p><w:pPr><w:pStyle w:val=\"Title\"/></w:pPr>");
        self.emit_run(title, false);
        self.body.push_str("</w:p>\n");
    }

    fn emit_heading(&mut self, level: u8, text: &str, featured: bool) {
        self.body.push_str("<w:p><w:pPr>");
        self.body
            .push_str(&format!("<w:pStyle w:val=\"Heading{}\"/>", level.clamp(1, 3)));
        if featured {
            self.push_shading();
        }
        self.body.push_str("</w:pPr>");
        self.emit_run(text, false);
        self.body.push_str("</w:p>\n");
    }

    fn emit_paragraph(&mut self, text: &str, featured: bool) {
        self.body.push_str("<w:p><w:pPr>");
        if featured {
            self.body.push_str("<w:pStyle w:val=\"Quote\"/>");
            self.push_shading();
        } else {
            self.body.push_str("<w:pStyle w:val=\"Normal\"/>");
        }
        self.body.push_str("</w:pPr>");
        self.emit_run(text, false);
        self.body.push_str("</w:p>\n");
    }

    fn emit_list(&mut self, items: &[String], featured: bool) {
        for item in items {
            self.body.push_str("<w:p><w:pPr>");
            self.body.push_str("<w:pStyle w:val=\"ListParagraph\"/>");
            if featured {
                self.push_shading();
            }
            self.body
                .push_str("<w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"1\"/></w:numPr>");
            self.body.push_str("</w:pPr>");
            self.emit_run(item, false);
            self.body.push_str("</w:p>\n");
        }
    }

    /// Emit a table; column count comes from the header row.
    ///
    /// Ragged body rows are truncated to the header width or blank-padded
    /// up to it; same policy as the print renderer. A table whose header
    /// row has no cells renders nothing.
    fn emit_table(&mut self, rows: &[Vec<String>], featured: bool) {
        let Some(header) = rows.first() else {
            return;
        };
        let cols = header.len();
        if cols == 0 {
            return;
        }

        self.body.push_str("<w:tbl>\n<w:tblPr>");
        self.body.push_str("<w:tblStyle w:val=\"TableGrid\"/>");
        self.body.push_str("<w:tblW w:w=\"5000\" w:type=\"pct\"/>");
        if featured {
            self.body.push_str(&format!(
                "<w:shd w:val=\"clear\" w:fill=\"{}\"/>",
                FEATURED_FILL
            ));
        }
        self.body.push_str("</w:tblPr>\n<w:tblGrid>");
        for _ in 0..cols {
            self.body.push_str("<w:gridCol w:w=\"2000\"/>");
        }
        self.body.push_str("</w:tblGrid>\n");

        // Header row: repeated across pages, shaded, bold runs
        self.body.push_str("<w:tr><w:trPr><w:tblHeader/></w:trPr>");
        for cell in header {
            self.body.push_str(&format!(
                "<w:tc><w:tcPr><w:shd w:val=\"clear\" w:fill=\"{}\"/></w:tcPr><w:p>",
                HEADER_FILL
            ));
            self.emit_run(cell, true);
            self.body.push_str("</w:p></w:tc>");
        }
        self.body.push_str("</w:tr>\n");

        for row in &rows[1..] {
            self.body.push_str("<w:tr>");
            for i in 0..cols {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                self.body.push_str("<w:tc><w:p>");
                if !cell.is_empty() {
                    self.emit_run(cell, false);
                }
                self.body.push_str("</w:p></w:tc>");
            }
            self.body.push_str("</w:tr>\n");
        }

        self.body.push_str("</w:tbl>\n");
        // Word needs a paragraph between a table and whatever follows
        self.body.push_str("<w:p/>\n");
    }

    fn emit_run(&mut self, text: &str, bold: bool) {
        self.body.push_str("<w:r>");
        if bold {
            self.body.push_str("<w:rPr><w:b/></w:rPr>");
        }
        self.body.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>",
            escape_xml(text)
        ));
        self.body.push_str("</w:r>");
    }

    fn push_shading(&mut self) {
        self.body.push_str(&format!(
            "<w:shd w:val=\"clear\" w:fill=\"{}\"/>",
            FEATURED_FILL
        ));
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockSink for DocxWriter {
    type Error = crate::error::DocxError;

    fn title(&mut self, text: &str) -> Result<()> {
        self.emit_title(text);
        Ok(())
    }

    fn heading(&mut self, level: u8, text: &str, featured: bool) -> Result<()> {
        self.emit_heading(level, text, featured);
        Ok(())
    }

    fn paragraph(&mut self, text: &str, featured: bool) -> Result<()> {
        self.emit_paragraph(text, featured);
        Ok(())
    }

    fn list(&mut self, items: &[String], featured: bool) -> Result<()> {
        self.emit_list(items, featured);
        Ok(())
    }

    fn table(&mut self, rows: &[Vec<String>], featured: bool) -> Result<()> {
        self.emit_table(rows, featured);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        let mut package = DocxPackage::new();
        package.set_string("word/document.xml", self.document_xml());
        package.into_bytes()
    }
}

/// Escape XML special characters in text content
fn escape_xml(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}
