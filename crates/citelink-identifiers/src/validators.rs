//! DOI validation and normalization

use lazy_static::lazy_static;
use regex::Regex;

/// Canonical resolver prefix used for every generated link.
pub const RESOLVER_URL: &str = "https://doi.org/";

lazy_static! {
    // Bare DOI: registrant code of 4-9 digits, then a suffix drawn from the
    // character class DOIs actually use, with an optional parenthesized tail.
    static ref DOI_PATTERN: Regex =
        Regex::new(r"^10\.\d{4,9}/[-._;<>/\w%]+(\([\w ]*\))?$").unwrap();
}

// Recognized forms a DOI may be pasted in. Longest prefixes first so the
// legacy dx.doi.org host is stripped whole.
const RESOLVER_PREFIXES: [&str; 7] = [
    "https://dx.doi.org/",
    "http://dx.doi.org/",
    "https://doi.org/",
    "http://doi.org/",
    "dx.doi.org/",
    "doi.org/",
    "doi:",
];

/// Sentence punctuation trimmed from the end of a candidate. The suffix
/// character class over-matches a trailing `.` or `;` at sentence
/// boundaries, so boundary handling lives here rather than in the regex.
pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';'];

/// Reduce any recognized DOI form to the bare `10.x/y` identifier.
pub fn normalize_doi(text: &str) -> String {
    let mut result = text.trim().to_string();

    for prefix in RESOLVER_PREFIXES {
        if let Some(head) = result.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                result = result[prefix.len()..].to_string();
                break;
            }
        }
    }

    while result.ends_with(TRAILING_PUNCTUATION) {
        result.pop();
    }

    result
}

/// Whether `text` is a DOI in some recognized form (bare, resolver URL,
/// or `doi:`-labelled), after normalization.
pub fn is_valid_doi(text: &str) -> bool {
    DOI_PATTERN.is_match(&normalize_doi(text))
}

/// Canonical resolver URL for a DOI, uniform regardless of the form the
/// input took.
pub fn doi_url(doi: &str) -> String {
    format!("{}{}", RESOLVER_URL, normalize_doi(doi))
}
