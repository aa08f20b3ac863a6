//! Diff computation and rendering for revision snapshots.
//!
//! This module provides character-level diffing between two snapshot
//! contents with support for:
//! - Minimal-edit segment computation with semantic cleanup
//! - Added/deleted character summaries derived from segments
//! - Per-line display rendering with insert/delete/equal tagging

/// Character-level segment computation and summaries
pub mod engine;
/// Display-line rendering of computed segments
pub mod render;

pub use engine::{compute_segments, compute_summary, summarize};
pub use render::{RenderConfig, full_insert_lines, to_display_lines};

use serde::{Deserialize, Serialize};

/// The edit operation a segment or display line is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    /// Text present in both snapshots
    Equal,
    /// Text present only in the older snapshot
    Delete,
    /// Text present only in the newer snapshot
    Insert,
}

/// A contiguous run of text tagged with one edit operation.
///
/// Segments are ordered: concatenating the text of all `Equal` and `Insert`
/// segments reconstructs the newer snapshot, and concatenating all `Equal`
/// and `Delete` segments reconstructs the older one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// Edit operation for this run of text
    pub op: DiffOp,
    /// The text covered by this segment
    pub text: String,
}

impl DiffSegment {
    /// Creates a segment from an operation and its text.
    #[must_use]
    pub fn new(op: DiffOp, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }

    /// Number of characters (Unicode scalar values) in this segment's text.
    ///
    /// This is the unit used by [`DiffSummary`] counts, so summaries always
    /// agree with segment lengths.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Total characters inserted and deleted between two snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Characters present only in the newer snapshot
    pub added: usize,
    /// Characters present only in the older snapshot
    pub deleted: usize,
}

impl DiffSummary {
    /// True when the compared snapshots are identical.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.added == 0 && self.deleted == 0
    }
}

/// One displayed line of a rendered diff.
///
/// The text never contains a newline and never carries a `+`/`-` marker;
/// markers are a presentation convention applied when writing lines out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLine {
    /// Edit operation for this line
    pub op: DiffOp,
    /// Line content without trailing newline
    pub text: String,
}
