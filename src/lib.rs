#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
// Allow pedantic strict lints that create false positives in this codebase
#![allow(clippy::arithmetic_side_effects)] // Simple counters and length sums cannot overflow
#![allow(clippy::indexing_slicing)] // Bounds checked by logic

//! # Revdiff - Revision History Diffing
//!
//! Revdiff visualizes the revision history of a textual document. Given a
//! newest-first sequence of historical snapshots, it computes a
//! character-level diff between each snapshot and its predecessor,
//! summarizes every diff as added/deleted character counts, and renders
//! diffs as ordered lists of annotated display lines ready for a
//! presentation layer.
//!
//! ## Features
//!
//! - **Character-Level Diffs**: Myers-style minimal diffs with semantic
//!   cleanup, so edits read as human-sized chunks instead of one-character
//!   alternations
//! - **Single Authoritative Path**: summary counts are always derived from
//!   the segment output, never from a separate heuristic
//! - **Display Rendering**: segments split into per-line insert/delete/equal
//!   rows with stable trailing-newline semantics
//! - **Async History Sequencing**: eager batched snapshot fetching with
//!   id-keyed memoization and stale-batch discarding
//!
//! ## Architecture
//!
//! The codebase is organized into three key modules:
//!
//! - [`diff`]: Segment computation, summaries, and display rendering
//! - [`history`]: History entry model and the async sequencing driver
//! - [`utils`]: Formatting helpers shared by the presentation layer
//!
//! ## Example Usage
//!
//! ```
//! use revdiff::diff::engine;
//!
//! let segments = engine::compute_segments("Hello\nWorld", "Hello\nThere");
//! let summary = engine::summarize(&segments);
//! assert_eq!(summary.added, summary.deleted);
//! ```

/// Diff computation and display rendering.
pub mod diff;

/// History entry model and the sequencing driver.
pub mod history;

/// Utility functions and formatting helpers.
pub mod utils;

pub use diff::engine::{compute_segments, compute_summary, summarize};
pub use diff::render::{RenderConfig, full_insert_lines, to_display_lines, write_display_lines};
pub use diff::{DiffOp, DiffSegment, DiffSummary, DisplayLine};
pub use history::sequencer::{
    ApplyOutcome, FetchBatch, HistorySequencer, SequencedHistory, SnapshotStore,
};
pub use history::{HistoryEntry, Signature};

/// Current version of the revdiff crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of identifier characters shown in abbreviated entry displays.
pub const SHORT_ID_LEN: usize = 8;
