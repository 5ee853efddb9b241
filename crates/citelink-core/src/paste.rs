//! Single-block paste flow
//!
//! Idle -> AwaitingClipboard -> Validating -> (Resolving) -> Writing ->
//! Done, with early exits back to Idle on a missing target or invalid
//! clipboard content. No write happens on the early exits.

use std::time::Duration;

use citelink_identifiers::{doi_url, is_valid_doi, normalize_doi};
use tracing::warn;

use crate::config::OutputMode;
use crate::error::EngineError;
use crate::host::{Clipboard, DocumentStore, Notifier};
use crate::sources::MetadataSource;
use crate::walker::{FALLBACK_MSG, TOAST_MS};

const FOCUS_MSG: &str = "Please focus a block before pasting into your graph";
const INVALID_MSG: &str = "Please make sure that the clipboard contains a DOI";
const RETRIEVING_PLACEHOLDER: &str = "Retrieving item name...";

/// Lets the host UI settle before glue clears the synthetic focus.
const UI_SETTLE: Duration = Duration::from_millis(50);

/// Paste the clipboard's DOI into `target` as a formatted link.
///
/// In `ItemName` mode the block is first written with a placeholder while
/// the title lookup is in flight, then overwritten once with the final
/// link; in the other modes the block is written exactly once. A failed
/// lookup degrades to the normalized label, never to an error.
pub async fn paste_doi<S, C, N, M>(
    store: &S,
    clipboard: &C,
    notifier: &N,
    source: &M,
    target: Option<&str>,
    mode: OutputMode,
) -> Result<(), EngineError>
where
    S: DocumentStore,
    C: Clipboard,
    N: Notifier,
    M: MetadataSource,
{
    let clip = clipboard.read_text().await;
    let clip = clip.trim();
    if !is_valid_doi(clip) {
        notifier.notify(INVALID_MSG, TOAST_MS);
        return Err(EngineError::InvalidInput);
    }

    let Some(target) = target else {
        notifier.notify(FOCUS_MSG, TOAST_MS);
        return Err(EngineError::MissingTarget);
    };

    let doi = normalize_doi(clip);
    let url = doi_url(&doi);

    let label = match mode {
        OutputMode::Unaltered => clip.to_string(),
        OutputMode::Normalised => doi.clone(),
        OutputMode::ItemName => {
            // The placeholder covers the network round trip.
            store.set_text(target, RETRIEVING_PLACEHOLDER).await?;
            match source.fetch_title(&doi).await {
                Ok(title) => title,
                Err(err) => {
                    warn!(doi = %doi, error = %err, "metadata lookup failed, using normalized label");
                    notifier.notify(FALLBACK_MSG, TOAST_MS);
                    doi.clone()
                }
            }
        }
    };

    store
        .set_text(target, &format!("[{}]({})", label, url))
        .await?;

    tokio::time::sleep(UI_SETTLE).await;
    Ok(())
}
