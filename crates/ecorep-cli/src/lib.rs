//! ecorep-cli - command-line interface library
//!
//! Exposes the CLI application logic for the `ecorep` binary and the
//! delivery helpers that package rendered bytes for download.

pub mod app;
pub mod delivery;

pub use app::run_cli;
pub use delivery::{download_link, DeliveryFormat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
