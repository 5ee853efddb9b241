//! Depth-first formatting pass over a document tree

use tracing::{debug, warn};

use crate::config::OutputMode;
use crate::formatter::Formatter;
use crate::host::{DocumentNode, DocumentStore, Notifier};
use crate::sources::MetadataSource;

/// Toast duration used for engine notifications.
pub const TOAST_MS: u64 = 3000;

pub(crate) const FALLBACK_MSG: &str =
    "Failed to retrieve item name from crossref. Output normalised item instead";
const DONE_MSG: &str = "Finished checking page for DOIs";

/// Counters reported after a walk, for host glue and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub nodes_visited: usize,
    pub nodes_rewritten: usize,
    pub links_formatted: usize,
    pub fallbacks: usize,
}

/// Rewrite DOI occurrences in every descendant of `root`, depth-first,
/// pre-order.
///
/// The root's own text is left alone: the host treats the page node as a
/// title, not a content block. Each visited node is written back at most
/// once, and always before its children are processed; sibling order
/// follows document order.
///
/// Failures never abort the walk. A rejected write skips that node only; a
/// failed title lookup degrades that occurrence only, with at most one
/// fallback notification per walk. A single completion notification fires
/// after the whole subtree has been visited.
pub async fn walk_tree<S, N, M>(
    store: &S,
    notifier: &N,
    source: &M,
    root: DocumentNode,
    mode: OutputMode,
) -> WalkSummary
where
    S: DocumentStore,
    N: Notifier,
    M: MetadataSource,
{
    let mut formatter = Formatter::new(source, mode);
    let mut summary = WalkSummary::default();
    let mut fallback_notified = false;

    // Explicit work stack instead of recursion; trees can be deep.
    let mut stack: Vec<DocumentNode> = root.children.into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        summary.nodes_visited += 1;

        if let Some(rewritten) = formatter.rewrite(&node.text).await {
            match store.set_text(&node.id, &rewritten).await {
                Ok(()) => {
                    debug!(id = %node.id, "rewrote DOI links");
                    summary.nodes_rewritten += 1;
                }
                Err(err) => {
                    warn!(id = %node.id, error = %err, "write rejected, skipping node");
                }
            }
        }

        if !fallback_notified && formatter.fallbacks() > 0 {
            notifier.notify(FALLBACK_MSG, TOAST_MS);
            fallback_notified = true;
        }

        // Children run after their parent's write-back, before later
        // siblings.
        stack.extend(node.children.into_iter().rev());
    }

    summary.links_formatted = formatter.links_formatted();
    summary.fallbacks = formatter.fallbacks();
    notifier.notify(DONE_MSG, TOAST_MS);
    summary
}
