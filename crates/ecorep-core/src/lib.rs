//! ecorep-core - report text to Document Model compilation
//!
//! Compiles a freeform, AI-generated Markdown-like report into an
//! `ecorep_ast::Document` in a single pass: each line is classified
//! ([`classifier`]), then a state machine groups contiguous same-kind
//! lines into blocks ([`compiler`]). Compilation is total: there is no
//! such thing as invalid report text, only degraded structure.
//!
//! # Example
//!
//! ```
//! use ecorep_core::compile;
//!
//! let doc = compile("# Title\nplain text\n");
//! assert_eq!(doc.len(), 2);
//! ```

pub mod classifier;
pub mod compiler;

pub use classifier::{classify, LineKind, SectionMatcher, FEATURE_SECTION_TITLE};
pub use compiler::{compile, compile_with_matcher};

/// The fixed title stamped onto both report outputs
pub const REPORT_TITLE: &str = "Climate & Carbon Footprint Report";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
