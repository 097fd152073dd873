//! Block Accumulator
//!
//! A single-pass state machine that consumes classified lines in order
//! and groups contiguous same-kind lines into blocks: a run of bullet
//! lines becomes one `List`, a run of table rows one `Table`. The
//! accumulator is total over all inputs; the upstream report generator
//! cannot be trusted to produce well-formed Markdown, so malformed or
//! truncated structure degrades gracefully instead of failing.

use ecorep_ast::{Block, Document, Heading, List, Paragraph, ReportMeta, Table};

use crate::classifier::{classify, LineKind, SectionMatcher};

/// Whether a blank line terminates an open list.
///
/// The upstream generator often puts blank lines between bullets, so a
/// blank line does not close a list. Flagged for product-owner
/// confirmation; see DESIGN.md.
pub const BLANK_CLOSES_LIST: bool = false;

/// Whether a blank line terminates an open table.
///
/// Any non-row line after table rows closes the table, separator rows
/// excepted (those are absorbed).
pub const BLANK_CLOSES_TABLE: bool = true;

/// The block currently being accumulated, if any
enum OpenBlock {
    None,
    List(Vec<String>),
    Table(Vec<Vec<String>>),
}

/// Report compiler using a state machine over classified lines
struct Compiler {
    /// Accumulated blocks
    blocks: Vec<Block>,
    /// Current open list or table
    open: OpenBlock,
    /// Whether we are inside the feature section
    featured: bool,
    /// Predicate for feature-section entry
    matcher: SectionMatcher,
}

impl Compiler {
    fn new(matcher: SectionMatcher) -> Self {
        Self {
            blocks: Vec::new(),
            open: OpenBlock::None,
            featured: false,
            matcher,
        }
    }

    /// Compile the entire report text
    fn compile(mut self, text: &str) -> Document {
        // Normalize line endings
        let text = text.replace("\r\n", "\n");

        for line in text.lines() {
            self.process(classify(line));
        }

        // End of input closes any still-open block
        self.flush_open();

        Document {
            metadata: ReportMeta::default(),
            blocks: self.blocks,
        }
    }

    /// Process one classified line
    fn process(&mut self, kind: LineKind) {
        match kind {
            LineKind::Heading { level, text } => {
                self.flush_open();

                // Feature-span transitions: a matching heading turns the
                // flag on (and is itself featured); the next level-1/2
                // heading turns it off and is NOT featured.
                if self.matcher.matches(level, &text) {
                    self.featured = true;
                } else if self.featured && level <= 2 {
                    self.featured = false;
                }

                self.blocks.push(Block::Heading(Heading {
                    level,
                    text,
                    featured: self.featured,
                }));
            }

            LineKind::ListItem { text } => {
                if matches!(self.open, OpenBlock::Table(_)) {
                    self.flush_open();
                }
                match &mut self.open {
                    OpenBlock::List(items) => items.push(text),
                    _ => self.open = OpenBlock::List(vec![text]),
                }
            }

            LineKind::TableRow { cells } => {
                if matches!(self.open, OpenBlock::List(_)) {
                    self.flush_open();
                }
                match &mut self.open {
                    OpenBlock::Table(rows) => rows.push(cells),
                    _ => self.open = OpenBlock::Table(vec![cells]),
                }
            }

            // Separator rows only delimit a table header from its body;
            // they never open, continue, or close anything.
            LineKind::Separator => {}

            LineKind::Blank => match self.open {
                OpenBlock::List(_) if BLANK_CLOSES_LIST => self.flush_open(),
                OpenBlock::Table(_) if BLANK_CLOSES_TABLE => self.flush_open(),
                _ => {}
            },

            LineKind::Plain { text } => {
                self.flush_open();
                self.blocks.push(Block::Paragraph(Paragraph {
                    text,
                    featured: self.featured,
                }));
            }
        }
    }

    /// Close the open block, if any, and append it to the output
    ///
    /// A list or table that never accumulated a line is never emitted.
    fn flush_open(&mut self) {
        match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None => {}
            OpenBlock::List(items) => {
                if !items.is_empty() {
                    self.blocks.push(Block::List(List {
                        items,
                        featured: self.featured,
                    }));
                }
            }
            OpenBlock::Table(rows) => {
                if !rows.is_empty() {
                    self.blocks.push(Block::Table(Table {
                        rows,
                        featured: self.featured,
                    }));
                }
            }
        }
    }
}

/// Compile report text into a Document using the default feature matcher
///
/// Compilation never fails: any line sequence yields a Document, and an
/// empty input yields an empty one.
pub fn compile(text: &str) -> Document {
    compile_with_matcher(text, SectionMatcher::default())
}

/// Compile report text with an injected feature-section matcher
pub fn compile_with_matcher(text: &str, matcher: SectionMatcher) -> Document {
    Compiler::new(matcher).compile(text)
}
