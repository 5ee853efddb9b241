//! DOI extraction from free-form text

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validators::{is_valid_doi, normalize_doi, TRAILING_PUNCTUATION};

/// A DOI occurrence found in a source text.
///
/// `matched` is the substring exactly as it appears (including any resolver
/// prefix the author pasted); `doi` is the normalized bare identifier;
/// `start..end` is the byte span of `matched` within the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDoi {
    pub matched: String,
    pub doi: String,
    pub start: usize,
    pub end: usize,
}

lazy_static! {
    // DOI occurrence: optional resolver prefix, then the identifier body.
    // The leading \b keeps the match from starting inside a longer
    // alphanumeric run; the end is bounded by the suffix character class
    // plus the trailing-punctuation trim below.
    static ref DOI_REGEX: Regex = Regex::new(
        r"\b(?:https?://(?:dx\.)?doi\.org/|dx\.doi\.org/|doi\.org/)?10\.\d{4,9}/[-._;<>/\w%]+(?:\([\w ]*\))?"
    )
    .unwrap();
}

/// Find all DOI occurrences in `text`, left to right, non-overlapping.
///
/// Trailing sentence punctuation is trimmed from each match, with the span
/// adjusted to cover only the kept substring.
pub fn extract_dois(text: &str) -> Vec<ExtractedDoi> {
    DOI_REGEX
        .find_iter(text)
        .filter_map(|m| {
            let mut matched = m.as_str();
            let mut end = m.end();
            while matched.ends_with(TRAILING_PUNCTUATION) {
                matched = &matched[..matched.len() - 1];
                end -= 1;
            }

            let doi = normalize_doi(matched);
            if !is_valid_doi(&doi) {
                return None;
            }

            Some(ExtractedDoi {
                matched: matched.to_string(),
                doi,
                start: m.start(),
                end,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bare_doi() {
        let found = extract_dois("See 10.1000/xyz123 for details.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].matched, "10.1000/xyz123");
        assert_eq!(found[0].doi, "10.1000/xyz123");
        assert_eq!(found[0].start, 4);
        assert_eq!(found[0].end, 18);
    }

    #[test]
    fn test_extract_resolver_url_keeps_prefix_in_match() {
        let found = extract_dois("https://doi.org/10.1000/xyz123");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].matched, "https://doi.org/10.1000/xyz123");
        assert_eq!(found[0].doi, "10.1000/xyz123");
    }

    #[test]
    fn test_extract_legacy_resolver_host() {
        let found = extract_dois("old link: http://dx.doi.org/10.1038/nature12373");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].doi, "10.1038/nature12373");
    }

    #[test]
    fn test_trailing_punctuation_stays_outside_the_match() {
        let found = extract_dois("As shown in 10.1000/xyz123, the effect holds.");
        assert_eq!(found[0].matched, "10.1000/xyz123");
        let found = extract_dois("As shown in 10.1000/xyz123.");
        assert_eq!(found[0].matched, "10.1000/xyz123");
    }

    #[test]
    fn test_parenthesized_suffix_is_captured() {
        let found = extract_dois("10.1016/s0140-6736(20) cited twice");
        assert_eq!(found[0].matched, "10.1016/s0140-6736(20)");
    }

    #[test]
    fn test_no_match_inside_alphanumeric_run() {
        assert!(extract_dois("v10.1000/xyz123").is_empty());
    }

    #[test]
    fn test_multiple_occurrences_in_document_order() {
        let found = extract_dois("10.1000/a then 10.1000/b then 10.1000/a");
        let dois: Vec<&str> = found.iter().map(|f| f.doi.as_str()).collect();
        assert_eq!(dois, vec!["10.1000/a", "10.1000/b", "10.1000/a"]);
        assert!(found[0].start < found[1].start);
        assert!(found[1].start < found[2].start);
    }

    #[test]
    fn test_spans_cover_the_matched_text() {
        let text = "refs: doi.org/10.1000/a and 10.1000/b.";
        for occ in extract_dois(text) {
            assert_eq!(&text[occ.start..occ.end], occ.matched);
        }
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        assert!(extract_dois("no identifiers here, just prose").is_empty());
        assert!(extract_dois("").is_empty());
    }
}
