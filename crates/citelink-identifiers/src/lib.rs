//! DOI validation, normalization, and extraction
//!
//! This crate provides the identifier layer of the citelink engine:
//! - DOI validation (bare form, resolver URLs, `doi:` labels)
//! - Normalization to the bare `10.{registrant}/{suffix}` form
//! - Canonical resolver-URL construction
//! - Extraction of DOI occurrences from free-form text with spans

pub mod extractors;
pub mod validators;

pub use extractors::*;
pub use validators::*;
