//! Block-level elements of the report Document Model
//!
//! A compiled report is an ordered sequence of blocks: headings,
//! paragraphs, bullet lists, and tables. Every block records whether it
//! falls inside the highlighted feature section via its `featured` flag;
//! renderers map that flag to a visual treatment and never re-derive
//! section boundaries themselves.

use serde::{Deserialize, Serialize};

/// Block-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// A section heading
    Heading(Heading),
    /// A paragraph of text
    Paragraph(Paragraph),
    /// An unordered list
    List(List),
    /// A table; the first row is always the header
    Table(Table),
}

/// A section heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-3, where 1 is the highest)
    pub level: u8,
    /// Heading text with markers and surrounding whitespace removed
    pub text: String,
    /// Whether this heading opens (and belongs to) the feature section
    pub featured: bool,
}

/// A paragraph block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text, one source line
    pub text: String,
    /// Whether this paragraph is inside the feature section
    pub featured: bool,
}

/// An unordered list built from a contiguous run of bullet lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Item texts, in source order; never empty once materialized
    pub items: Vec<String>,
    /// Whether this list is inside the feature section
    pub featured: bool,
}

/// A table built from a contiguous run of pipe-delimited rows
///
/// Rows may be ragged; renderers take the column count from the first
/// row (the header) and truncate or blank-pad the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Cell rows, in source order; the first row is the header
    pub rows: Vec<Vec<String>>,
    /// Whether this table is inside the feature section
    pub featured: bool,
}

impl Block {
    /// Whether this block lies inside the feature section
    pub fn featured(&self) -> bool {
        match self {
            Block::Heading(h) => h.featured,
            Block::Paragraph(p) => p.featured,
            Block::List(l) => l.featured,
            Block::Table(t) => t.featured,
        }
    }
}

impl Default for Heading {
    fn default() -> Self {
        Self {
            level: 1,
            text: String::new(),
            featured: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_default() {
        let h = Heading::default();
        assert_eq!(h.level, 1);
        assert!(!h.featured);
    }

    #[test]
    fn test_block_featured_accessor() {
        let blocks = vec![
            Block::Heading(Heading {
                level: 2,
                text: "Relation with Carbon Footprint".to_string(),
                featured: true,
            }),
            Block::Paragraph(Paragraph {
                text: "text".to_string(),
                featured: false,
            }),
            Block::List(List {
                items: vec!["a".to_string()],
                featured: true,
            }),
            Block::Table(Table {
                rows: vec![vec!["A".to_string()]],
                featured: false,
            }),
        ];
        let flags: Vec<bool> = blocks.iter().map(Block::featured).collect();
        assert_eq!(flags, vec![true, false, true, false]);
    }

    #[test]
    fn test_table_header_is_first_row() {
        let table = Table {
            rows: vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ],
            featured: false,
        };
        assert_eq!(table.rows[0], vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_block_serialize_roundtrip() {
        let block = Block::List(List {
            items: vec!["one".to_string(), "two".to_string()],
            featured: true,
        });
        let json = serde_json::to_string(&block).unwrap();
        let restored: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, block);
    }
}
