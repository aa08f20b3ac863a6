//! Character-level diff computation between snapshot contents.
//!
//! The entry point is [`compute_segments`], which produces an ordered list
//! of [`DiffSegment`]s; [`summarize`] derives added/deleted counts from that
//! output. There is deliberately no second code path for summaries: counts
//! always agree with the segments they were derived from.

use crate::diff::{DiffOp, DiffSegment, DiffSummary};
use dissimilar::Chunk;
use tracing::{Level, debug, span};

/// Compute the ordered character-level diff segments between two snapshots.
///
/// Runs a Myers-style minimal diff followed by semantic cleanup, so small
/// fragmented edits are merged into human-readable chunks rather than
/// one-character alternations.
///
/// Guarantees:
/// - Concatenating `Equal` + `Insert` segment text reconstructs `new_text`;
///   `Equal` + `Delete` reconstructs `old_text`.
/// - Identical inputs yield a single `Equal` segment (empty output when both
///   inputs are empty).
/// - Output is deterministic for a given input pair.
#[must_use]
pub fn compute_segments(old_text: &str, new_text: &str) -> Vec<DiffSegment> {
    let span = span!(
        Level::DEBUG,
        "segment_computation",
        old_len = old_text.len(),
        new_len = new_text.len()
    );
    let _guard = span.enter();

    // Degenerate pairs short-circuit the diff algorithm entirely
    if old_text.is_empty() && new_text.is_empty() {
        return Vec::new();
    }
    if old_text.is_empty() {
        return vec![DiffSegment::new(DiffOp::Insert, new_text)];
    }
    if new_text.is_empty() {
        return vec![DiffSegment::new(DiffOp::Delete, old_text)];
    }
    if old_text == new_text {
        return vec![DiffSegment::new(DiffOp::Equal, old_text)];
    }

    let segments: Vec<DiffSegment> = dissimilar::diff(old_text, new_text)
        .into_iter()
        .map(|chunk| match chunk {
            Chunk::Equal(text) => DiffSegment::new(DiffOp::Equal, text),
            Chunk::Delete(text) => DiffSegment::new(DiffOp::Delete, text),
            Chunk::Insert(text) => DiffSegment::new(DiffOp::Insert, text),
        })
        .collect();

    debug!(segments = segments.len(), "Segment computation complete");

    segments
}

/// Derive added/deleted character counts from computed segments.
///
/// `added` is the total character count of `Insert` segments, `deleted` the
/// total of `Delete` segments, both in Unicode scalar values — the same unit
/// as [`DiffSegment::char_len`].
#[must_use]
pub fn summarize(segments: &[DiffSegment]) -> DiffSummary {
    let mut summary = DiffSummary::default();
    for segment in segments {
        match segment.op {
            DiffOp::Insert => summary.added += segment.char_len(),
            DiffOp::Delete => summary.deleted += segment.char_len(),
            DiffOp::Equal => {}
        }
    }
    summary
}

/// Compute the diff summary for a snapshot pair.
///
/// Exactly equivalent to `summarize(&compute_segments(old_text, new_text))`;
/// the segment output is the single authoritative source for counts.
#[must_use]
pub fn compute_summary(old_text: &str, new_text: &str) -> DiffSummary {
    summarize(&compute_segments(old_text, new_text))
}
