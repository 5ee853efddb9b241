//! DOI occurrence scanning
//!
//! A scan first collects the resolver URLs of links already present in the
//! text, then extracts raw occurrences and filters out everything that is
//! already linked. Running the pass over fully formatted text is a no-op.

use std::collections::HashSet;

use citelink_identifiers::{doi_url, extract_dois, ExtractedDoi};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // URL side of an existing markdown link pointing at a DOI resolver.
    // The scheme is optional: the extractor recognizes schemeless
    // `doi.org/` and `dx.doi.org/` forms, so the exclusion must too.
    static ref LINKED_DOI_URL: Regex =
        Regex::new(r"\[[^\]]*\]\((?P<url>(?:https?://)?(?:dx\.)?doi\.org/[^)\s]+)\)").unwrap();
}

/// Result of scanning one text block.
#[derive(Debug, Default, Clone)]
pub struct ScanOutcome {
    /// Resolver URLs already wrapped as markdown links in this text.
    pub excluded: HashSet<String>,
    /// Raw occurrences still needing formatting, in document order.
    pub occurrences: Vec<ExtractedDoi>,
}

/// Find the raw DOI occurrences in `text`.
///
/// An occurrence survives the scan when it is not a member of the excluded
/// set (neither its matched substring nor its canonical URL), and is not
/// the label of an existing markdown link.
pub fn scan(text: &str) -> ScanOutcome {
    // Built before extraction so already-linked DOIs are never candidates.
    let excluded: HashSet<String> = LINKED_DOI_URL
        .captures_iter(text)
        .filter_map(|cap| cap.name("url"))
        .map(|m| m.as_str().to_string())
        .collect();

    // Canonical forms of the excluded URLs, so a bare mention of an
    // already-linked DOI is excluded whatever form the link used.
    let excluded_canonical: HashSet<String> = excluded.iter().map(|url| doi_url(url)).collect();

    let occurrences = extract_dois(text)
        .into_iter()
        .filter(|occ| !excluded.contains(&occ.matched))
        .filter(|occ| !excluded_canonical.contains(&doi_url(&occ.doi)))
        .filter(|occ| !text[occ.end..].starts_with("]("))
        .collect();

    ScanOutcome {
        excluded,
        occurrences,
    }
}
