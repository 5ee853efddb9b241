//! Formatted-link substitution
//!
//! Builds `[label](https://doi.org/...)` replacements for raw occurrences
//! and applies them to a text block in a single rewrite. The canonical URL
//! is uniform across input forms and modes; only the label varies.

use std::collections::HashMap;

use citelink_identifiers::{doi_url, ExtractedDoi};
use tracing::warn;

use crate::config::OutputMode;
use crate::scanner::scan;
use crate::sources::MetadataSource;

/// Pass-wide formatting state.
///
/// One formatter lives for exactly one invocation (a tree walk or a paste).
/// It caches replacements by exact matched substring, so the same raw
/// substring always gets the same link, and titles by normalized DOI, so
/// the metadata source sees at most one lookup per unique DOI.
pub struct Formatter<'a, M: MetadataSource> {
    source: &'a M,
    mode: OutputMode,
    replacements: HashMap<String, String>,
    titles: HashMap<String, Option<String>>,
    links_formatted: usize,
    fallbacks: usize,
}

impl<'a, M: MetadataSource> Formatter<'a, M> {
    pub fn new(source: &'a M, mode: OutputMode) -> Self {
        Self {
            source,
            mode,
            replacements: HashMap::new(),
            titles: HashMap::new(),
            links_formatted: 0,
            fallbacks: 0,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Links substituted so far in this pass.
    pub fn links_formatted(&self) -> usize {
        self.links_formatted
    }

    /// Lookups that fell back to the normalized label in this pass.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// Replacement link for one occurrence. Never fails: `ItemName`
    /// degrades to the normalized label when the lookup does.
    pub async fn replacement(&mut self, occ: &ExtractedDoi) -> String {
        if let Some(existing) = self.replacements.get(&occ.matched) {
            return existing.clone();
        }

        let label = match self.mode {
            OutputMode::Unaltered => occ.matched.clone(),
            OutputMode::Normalised => occ.doi.clone(),
            OutputMode::ItemName => self
                .title(&occ.doi)
                .await
                .unwrap_or_else(|| occ.doi.clone()),
        };

        let link = format!("[{}]({})", label, doi_url(&occ.doi));
        self.replacements.insert(occ.matched.clone(), link.clone());
        link
    }

    /// One lookup attempt per unique DOI per pass, failures cached too.
    async fn title(&mut self, doi: &str) -> Option<String> {
        if let Some(cached) = self.titles.get(doi) {
            return cached.clone();
        }

        let fetched = match self.source.fetch_title(doi).await {
            Ok(title) => Some(title),
            Err(err) => {
                warn!(doi, error = %err, "metadata lookup failed, using normalized label");
                self.fallbacks += 1;
                None
            }
        };

        self.titles.insert(doi.to_string(), fetched.clone());
        fetched
    }

    /// Scan `text` and apply every surviving occurrence in one rebuild.
    ///
    /// Returns `None` when nothing needs formatting, so callers can skip
    /// the write-back entirely. Replacements are applied by span, left to
    /// right, leaving all surrounding text untouched.
    pub async fn rewrite(&mut self, text: &str) -> Option<String> {
        let occurrences = scan(text).occurrences;
        if occurrences.is_empty() {
            return None;
        }

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for occ in &occurrences {
            let link = self.replacement(occ).await;
            out.push_str(&text[cursor..occ.start]);
            out.push_str(&link);
            cursor = occ.end;
            self.links_formatted += 1;
        }
        out.push_str(&text[cursor..]);

        Some(out)
    }
}
