//! DOI scanning and link-formatting engine
//!
//! Finds DOI occurrences in markdown-flavored text blocks - bare `10.x/y`
//! identifiers, resolver URLs, and pasted strings - and rewrites each block
//! with `[label](https://doi.org/...)` links, optionally resolving titles
//! through Crossref. Already-linked DOIs are never reformatted.
//!
//! The host platform (block storage, clipboard, toast notifications) sits
//! behind the traits in [`host`]; this crate owns only the text engine,
//! the tree walk, and the single-block paste flow.

pub mod config;
pub mod error;
pub mod formatter;
pub mod host;
pub mod http;
pub mod paste;
pub mod scanner;
pub mod sources;
pub mod walker;

pub use config::OutputMode;
pub use error::EngineError;
pub use formatter::Formatter;
pub use host::{Clipboard, DocumentNode, DocumentStore, Notifier, StoreError};
pub use paste::paste_doi;
pub use scanner::{scan, ScanOutcome};
pub use walker::{walk_tree, WalkSummary};
