//! Revision history model and sequencing.
//!
//! The history is a newest-first sequence of [`HistoryEntry`] values handed
//! in by the caller; content for each entry is retrieved through the
//! [`sequencer::SnapshotStore`] collaborator and diffed against the entry's
//! chronological predecessor.

/// Presentation helpers for history listings and entry detail views
pub mod display;
/// Sequencing driver: batched fetching and per-entry diffing
pub mod sequencer;

use serde::{Deserialize, Serialize};

/// Who recorded a history entry, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Author display name
    pub name: String,
    /// Unix timestamp of the revision, in seconds
    pub timestamp: i64,
}

/// One point in a document's revision history.
///
/// Entries carry no content themselves; content is fetched by id through a
/// [`sequencer::SnapshotStore`]. Identity is the id plus the content
/// recorded under it — content at a given id never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Opaque revision identifier
    pub id: String,
    /// Revision message
    pub message: String,
    /// Author and timestamp metadata
    pub author: Signature,
}

impl HistoryEntry {
    /// Creates an entry from its id, message, and author metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, message: impl Into<String>, author: Signature) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            author,
        }
    }
}
