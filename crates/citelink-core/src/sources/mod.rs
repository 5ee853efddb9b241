//! Source plugins for DOI metadata lookup

pub mod crossref;
pub mod traits;

pub use crossref::*;
pub use traits::*;
