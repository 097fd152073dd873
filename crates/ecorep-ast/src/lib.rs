//! ecorep-ast - Document Model definitions
//!
//! This crate provides the block-level types that represent a compiled
//! report, plus the `BlockSink` seam both renderers implement.
//!
//! A report is compiled once into a [`Document`] and then rendered any
//! number of times; the Document is read-only after compilation.

pub mod block;
pub mod document;
pub mod sink;

pub use block::{Block, Heading, List, Paragraph, Table};
pub use document::{Document, ReportMeta};
pub use sink::{render, BlockSink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
