//! Traits for the external host platform
//!
//! The engine never talks to the host directly. Glue code implements these
//! traits over the real document store, clipboard, and toast surface; tests
//! implement them with in-memory fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A text-bearing node in the host's document tree.
///
/// Children are owned by their parent and kept in document order. A tree is
/// read once from the host, rewritten in place during a walk, and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("node not found: {id}")]
    NotFound { id: String },
    #[error("write rejected for {id}: {message}")]
    WriteRejected { id: String, message: String },
}

/// The host's block store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a single node; its children carry only ids and text the host
    /// chooses to include.
    async fn node(&self, id: &str) -> Result<DocumentNode, StoreError>;

    /// Overwrite a node's text. The write is atomic from the engine's side:
    /// a node is never left with a partially rewritten text.
    async fn set_text(&self, id: &str, text: &str) -> Result<(), StoreError>;

    /// Read the full subtree under `root_id`.
    async fn tree(&self, root_id: &str) -> Result<DocumentNode, StoreError>;
}

/// Read-only clipboard access.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn read_text(&self) -> String;
}

/// Fire-and-forget user notification (a toast in the host UI).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, duration_ms: u64);
}
