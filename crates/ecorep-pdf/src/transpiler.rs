//! Document to Typst markup transpiler
//!
//! Maps each block to Typst primitives. Featured blocks are wrapped in a
//! tinted green box with a green border; heading levels 1-3 are colored
//! blue, navy, and dark blue to match the house report style.

use ecorep_ast::{Block, BlockSink, Document};

use crate::compiler::Compiler;
use crate::error::{PdfError, Result};

/// Typst fill/stroke used for featured blocks
const FEATURED_FILL: &str = "rgb(\"#e8f5e9\")";
const FEATURED_STROKE: &str = "0.5pt + rgb(\"#2e7d32\")";

/// Fill used for the table header row
const HEADER_FILL: &str = "rgb(\"#d9d9d9\")";

/// Show rules applied before any content
const PREAMBLE: &str = "\
#set page(margin: 1in)
#set text(size: 11pt)
#show heading.where(level: 1): set text(fill: blue)
#show heading.where(level: 2): set text(fill: navy)
#show heading.where(level: 3): set text(fill: rgb(\"#00008b\"))
";

/// Transpiler accumulating Typst markup for one document
pub struct Transpiler {
    markup: String,
}

impl Transpiler {
    /// Create a transpiler with the report preamble in place
    pub fn new() -> Self {
        Self {
            markup: PREAMBLE.to_string(),
        }
    }

    /// Transpile a whole document to Typst markup
    pub fn transpile(doc: &Document) -> String {
        let mut t = Self::new();
        if let Some(ref title) = doc.metadata.title {
            t.emit_title(title);
        }
        for block in &doc.blocks {
            t.emit_block(block);
        }
        t.markup
    }

    fn emit_title(&mut self, title: &str) {
        self.markup.push_str(&format!(
            "#set document(title: \"{}\")\n",
            escape_string(title)
        ));
        self.markup.push_str(&format!(
            "#align(center)[#text(size: 18pt, weight: \"bold\")[{}]]\n#v(12pt)\n",
            escape_markup(title)
        ));
    }

    fn emit_block(&mut self, block: &Block) {
        match block {
            Block::Heading(h) => self.emit_heading(h.level, &h.text, h.featured),
            Block::Paragraph(p) => self.emit_paragraph(&p.text, p.featured),
            Block::List(l) => self.emit_list(&l.items, l.featured),
            Block::Table(t) => self.emit_table(&t.rows, t.featured),
        }
    }

    fn emit_heading(&mut self, level: u8, text: &str, featured: bool) {
        let body = format!(
            "{} {}\n",
            "=".repeat(level as usize),
            escape_markup(text)
        );
        self.push_body(body, featured);
    }

    fn emit_paragraph(&mut self, text: &str, featured: bool) {
        let body = format!("{}\n", escape_markup(text));
        self.push_body(body, featured);
    }

    fn emit_list(&mut self, items: &[String], featured: bool) {
        let mut body = String::new();
        for item in items {
            body.push_str(&format!("- {}\n", escape_markup(item)));
        }
        self.push_body(body, featured);
    }

    /// Emit a table; column count comes from the header row.
    ///
    /// Ragged body rows are truncated to the header width or blank-padded
    /// up to it. A table whose header row has no cells renders nothing.
    fn emit_table(&mut self, rows: &[Vec<String>], featured: bool) {
        let Some(header) = rows.first() else {
            return;
        };
        let cols = header.len();
        if cols == 0 {
            return;
        }

        let mut body = format!(
            "#table(\n  columns: {},\n  fill: (x, y) => if y == 0 {{ {} }},\n",
            cols, HEADER_FILL
        );

        body.push_str("  table.header(");
        for cell in header {
            body.push_str(&format!("[*{}*], ", escape_markup(cell)));
        }
        body.push_str("),\n");

        for row in &rows[1..] {
            body.push_str("  ");
            for i in 0..cols {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                body.push_str(&format!("[{}], ", escape_markup(cell)));
            }
            body.push('\n');
        }

        body.push_str(")\n");
        self.push_body(body, featured);
    }

    /// Append a block body, boxing it when featured
    fn push_body(&mut self, body: String, featured: bool) {
        if featured {
            self.markup.push_str(&format!(
                "#block(fill: {}, stroke: {}, inset: 8pt, radius: 2pt, width: 100%)[\n{}]\n",
                FEATURED_FILL, FEATURED_STROKE, body
            ));
        } else {
            self.markup.push_str(&body);
        }
        self.markup.push('\n');
    }
}

impl Default for Transpiler {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockSink for Transpiler {
    type Error = PdfError;

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
        Compiler::compile(&self.markup)
    }
}

/// Escape special characters inside Typst string literals
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape Typst markup characters in content text
///
/// Report text is untrusted generator output; anything that could start
/// Typst syntax is escaped.
fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '#' | '*' | '_' | '`' | '[' | ']' | '<' | '>' | '@' | '$' | '\\' | '~'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecorep_ast::{Heading, List, Paragraph, Table};

    #[test]
    fn test_transpile_heading_levels() {
        let mut doc = Document::new();
        doc.push(Block::Heading(Heading {
            level: 1,
            text: "Overview".to_string(),
            featured: false,
        }));
        doc.push(Block::Heading(Heading {
            level: 3,
            text: "Detail".to_string(),
            featured: false,
        }));

        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("= Overview"));
        assert!(typst.contains("=== Detail"));
    }

    #[test]
    fn test_transpile_title() {
        let doc = Document::with_title("Climate & Carbon Footprint Report");
        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("#set document(title: \"Climate & Carbon Footprint Report\")"));
    }

    #[test]
    fn test_transpile_paragraph() {
        let mut doc = Document::new();
        doc.push(Block::Paragraph(Paragraph {
            text: "This is a paragraph.".to_string(),
            featured: false,
        }));
        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("This is a paragraph."));
    }

    #[test]
    fn test_transpile_list() {
        let mut doc = Document::new();
        doc.push(Block::List(List {
            items: vec!["one".to_string(), "two".to_string()],
            featured: false,
        }));
        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("- one\n- two\n"));
    }

    #[test]
    fn test_featured_block_is_boxed() {
        let mut doc = Document::new();
        doc.push(Block::Paragraph(Paragraph {
            text: "inside".to_string(),
            featured: true,
        }));
        doc.push(Block::Paragraph(Paragraph {
            text: "outside".to_string(),
            featured: false,
        }));
        let typst = Transpiler::transpile(&doc);
        assert_eq!(typst.matches(FEATURED_FILL).count(), 1);
    }

    #[test]
    fn test_table_column_count_from_header() {
        let mut doc = Document::new();
        doc.push(Block::Table(Table {
            rows: vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string()],
                vec!["2".to_string(), "3".to_string(), "4".to_string()],
            ],
            featured: false,
        }));
        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("columns: 2"));
        // short row padded with an empty cell, long row truncated
        assert!(typst.contains("[1], [], "));
        assert!(typst.contains("[2], [3], "));
        assert!(!typst.contains("[4]"));
    }

    #[test]
    fn test_table_header_is_bold() {
        let mut doc = Document::new();
        doc.push(Block::Table(Table {
            rows: vec![vec!["Sector".to_string()], vec!["Road".to_string()]],
            featured: false,
        }));
        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("table.header([*Sector*], )"));
    }

    #[test]
    fn test_table_with_empty_header_renders_nothing() {
        let mut doc = Document::new();
        doc.push(Block::Table(Table {
            rows: vec![Vec::new(), vec!["late".to_string()]],
            featured: false,
        }));
        let typst = Transpiler::transpile(&doc);
        assert!(!typst.contains("#table"));
        assert!(!typst.contains("late"));
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("a #b [c]"), "a \\#b \\[c\\]");
        assert_eq!(escape_markup("5 * 3"), "5 \\* 3");
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_string("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_empty_document_still_produces_markup() {
        let typst = Transpiler::transpile(&Document::new());
        assert!(typst.contains("#set page"));
    }
}
