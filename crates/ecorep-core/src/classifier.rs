//! Line Classifier
//!
//! Maps each raw input line to exactly one [`LineKind`]. Classification
//! is a pure function with a fixed priority order:
//!
//! 1. Heading markers `# `, `## `, `### ` (deeper markers fall through
//!    to plain text)
//! 2. Bullet markers `- ` or `* ` after trimming
//! 3. A leading `|` makes a candidate table row; a row whose cells are
//!    only dashes and alignment colons is a separator
//! 4. Empty after trimming is blank
//! 5. Anything else is plain text
//!
//! Ragged table rows are passed through as-is; tolerating them is the
//! renderers' job.

use serde::{Deserialize, Serialize};

/// The classification of one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// A heading line with level 1-3
    Heading { level: u8, text: String },
    /// A bullet list item
    ListItem { text: String },
    /// A pipe-delimited table row
    TableRow { cells: Vec<String> },
    /// An empty (or whitespace-only) line
    Blank,
    /// A header/body separator row (`|---|---|`); structurally blank,
    /// but it must not terminate an open table
    Separator,
    /// Ordinary text
    Plain { text: String },
}

/// Classify a single line of report text
pub fn classify(line: &str) -> LineKind {
    // Heading markers are matched on the raw line; four or more '#'
    // are not a recognized depth and fall through to plain text.
    for (marker, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(rest) = line.strip_prefix(marker) {
            return LineKind::Heading {
                level,
                text: rest.trim().to_string(),
            };
        }
    }

    let trimmed = line.trim();

    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return LineKind::ListItem {
            text: rest.to_string(),
        };
    }

    if trimmed.starts_with('|') {
        let cells = split_row(trimmed);
        if is_separator_row(&cells) {
            return LineKind::Separator;
        }
        return LineKind::TableRow { cells };
    }

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    LineKind::Plain {
        text: line.to_string(),
    }
}

/// Split a pipe-delimited row into trimmed cells
///
/// Leading and trailing pipes produce empty first/last segments, which
/// are dropped; everything in between is a cell.
fn split_row(trimmed: &str) -> Vec<String> {
    let segments: Vec<&str> = trimmed.split('|').collect();
    if segments.len() <= 2 {
        return Vec::new();
    }
    segments[1..segments.len() - 1]
        .iter()
        .map(|s| s.trim().to_string())
        .collect()
}

/// Whether every cell consists only of dashes and alignment colons
fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|cell| {
            !cell.is_empty() && cell.chars().all(|ch| ch == '-' || ch == ':')
        })
}

/// The fixed feature-section title of every generated report
pub const FEATURE_SECTION_TITLE: &str = "Relation with Carbon Footprint";

/// Predicate deciding whether a heading opens the feature section
///
/// The default matcher looks for "Relation with Carbon Footprint"
/// case-insensitively in the text of a level-1 or level-2 heading.
/// Injecting a different matcher reuses the same accumulator state
/// machine for other highlighted sections.
#[derive(Debug, Clone)]
pub struct SectionMatcher {
    needle: String,
}

impl SectionMatcher {
    /// Create a matcher for the given heading text (case-insensitive)
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            needle: pattern.into().to_lowercase(),
        }
    }

    /// Whether a heading of this level and text opens the feature section
    ///
    /// Only level-1 and level-2 headings can open the section; level-3
    /// headings inside it do not end it either.
    pub fn matches(&self, level: u8, text: &str) -> bool {
        (1..=2).contains(&level) && text.to_lowercase().contains(&self.needle)
    }
}

impl Default for SectionMatcher {
    fn default() -> Self {
        Self::new(FEATURE_SECTION_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headings() {
        assert_eq!(
            classify("# Title"),
            LineKind::Heading {
                level: 1,
                text: "Title".to_string()
            }
        );
        assert_eq!(
            classify("## Sub "),
            LineKind::Heading {
                level: 2,
                text: "Sub".to_string()
            }
        );
        assert_eq!(
            classify("### Deep"),
            LineKind::Heading {
                level: 3,
                text: "Deep".to_string()
            }
        );
    }

    #[test]
    fn test_classify_deep_heading_marker_is_plain() {
        assert_eq!(
            classify("#### Too deep"),
            LineKind::Plain {
                text: "#### Too deep".to_string()
            }
        );
    }

    #[test]
    fn test_classify_hash_without_space_is_plain() {
        assert_eq!(
            classify("#hashtag"),
            LineKind::Plain {
                text: "#hashtag".to_string()
            }
        );
    }

    #[test]
    fn test_classify_list_items() {
        assert_eq!(
            classify("- item"),
            LineKind::ListItem {
                text: "item".to_string()
            }
        );
        assert_eq!(
            classify("  * indented"),
            LineKind::ListItem {
                text: "indented".to_string()
            }
        );
    }

    #[test]
    fn test_classify_table_row() {
        assert_eq!(
            classify("| A | B |"),
            LineKind::TableRow {
                cells: vec!["A".to_string(), "B".to_string()]
            }
        );
    }

    #[test]
    fn test_classify_separator_row() {
        assert_eq!(classify("|---|---|"), LineKind::Separator);
        assert_eq!(classify("| :--- | ---: |"), LineKind::Separator);
    }

    #[test]
    fn test_classify_mixed_row_is_not_separator() {
        assert_eq!(
            classify("| --- | data |"),
            LineKind::TableRow {
                cells: vec!["---".to_string(), "data".to_string()]
            }
        );
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t"), LineKind::Blank);
    }

    #[test]
    fn test_classify_plain_keeps_original_line() {
        assert_eq!(
            classify("  indented text"),
            LineKind::Plain {
                text: "  indented text".to_string()
            }
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let lines = ["# H", "- x", "| a | b |", "|---|", "", "text"];
        for line in lines {
            assert_eq!(classify(line), classify(line));
        }
    }

    #[test]
    fn test_split_row_drops_outer_segments() {
        assert_eq!(
            classify("| one | two | three |"),
            LineKind::TableRow {
                cells: vec!["one".to_string(), "two".to_string(), "three".to_string()]
            }
        );
    }

    #[test]
    fn test_lone_pipe_has_no_cells() {
        assert_eq!(classify("|"), LineKind::TableRow { cells: Vec::new() });
    }

    #[test]
    fn test_matcher_default() {
        let m = SectionMatcher::default();
        assert!(m.matches(1, "Relation with Carbon Footprint"));
        assert!(m.matches(2, "relation with carbon footprint"));
        assert!(m.matches(2, "Relation with Carbon Footprint:"));
        assert!(!m.matches(3, "Relation with Carbon Footprint"));
        assert!(!m.matches(1, "Other Section"));
    }

    #[test]
    fn test_matcher_custom_pattern() {
        let m = SectionMatcher::new("Key Findings");
        assert!(m.matches(2, "key findings"));
        assert!(!m.matches(2, "Relation with Carbon Footprint"));
    }
}
