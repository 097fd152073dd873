//! Document root and report metadata

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// A compiled report document
///
/// Built once per compilation, read-only afterwards. Block order is
/// insertion order and the only meaningful ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Report metadata (title, attributes)
    pub metadata: ReportMeta,
    /// Document content blocks
    pub blocks: Vec<Block>,
}

/// Report metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Document title, stamped onto both outputs when present
    pub title: Option<String>,
    /// Additional attributes (generation parameters, provenance)
    pub attributes: HashMap<String, String>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            metadata: ReportMeta::default(),
            blocks: Vec::new(),
        }
    }

    /// Create a document with a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            metadata: ReportMeta {
                title: Some(title.into()),
                ..Default::default()
            },
            blocks: Vec::new(),
        }
    }

    /// Add a block to the document
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document is empty (no blocks)
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over the blocks inside the feature section
    pub fn featured_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.featured())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportMeta {
    /// Create metadata with just a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get an attribute
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Heading, Paragraph};

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_document_with_title() {
        let doc = Document::with_title("Climate & Carbon Footprint Report");
        assert_eq!(
            doc.metadata.title,
            Some("Climate & Carbon Footprint Report".to_string())
        );
    }

    #[test]
    fn test_document_push_block() {
        let mut doc = Document::new();
        doc.push(Block::Paragraph(Paragraph {
            text: "Hello".to_string(),
            featured: false,
        }));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_featured_blocks_iterator() {
        let mut doc = Document::new();
        doc.push(Block::Heading(Heading {
            level: 2,
            text: "Relation with Carbon Footprint".to_string(),
            featured: true,
        }));
        doc.push(Block::Paragraph(Paragraph {
            text: "inside".to_string(),
            featured: true,
        }));
        doc.push(Block::Paragraph(Paragraph {
            text: "outside".to_string(),
            featured: false,
        }));
        assert_eq!(doc.featured_blocks().count(), 2);
    }

    #[test]
    fn test_metadata_attributes() {
        let mut meta = ReportMeta::default();
        meta.set_attribute("tone", "formal");
        assert_eq!(meta.get_attribute("tone"), Some("formal"));
    }
}
