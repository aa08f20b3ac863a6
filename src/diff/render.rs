//! Display-line rendering of computed diff segments.
//!
//! Rendering is a pure presentation transform: segments are split into
//! per-line rows for line-prefixed display, and an optional colorized
//! writer formats those rows for terminals. Segment data is never mutated.

use crate::diff::engine::compute_segments;
use crate::diff::{DiffOp, DiffSegment, DisplayLine};
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use tracing::debug;

/// Configuration for display-line formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// Whether to colorize the output (insertions green, deletions red,
    /// unchanged lines muted)
    pub colorize: bool,
}

/// Split computed segments into per-line display rows.
///
/// Each segment's text is split strictly on `\n` without trimming, so a
/// segment ending in a newline contributes a trailing empty line — never
/// dropped, never duplicated. Every resulting line carries its segment's
/// operation; a segment spanning multiple lines yields one row per
/// embedded line.
#[must_use]
pub fn to_display_lines(segments: &[DiffSegment]) -> Vec<DisplayLine> {
    let lines: Vec<DisplayLine> = segments
        .iter()
        .flat_map(|segment| {
            segment.text.split('\n').map(|line| DisplayLine {
                op: segment.op,
                text: line.to_string(),
            })
        })
        .collect();

    debug!(
        segments = segments.len(),
        lines = lines.len(),
        "Rendered display lines"
    );

    lines
}

/// Render content with no prior snapshot: every line becomes an insert row.
///
/// Used for the oldest point in history, where there is nothing to diff
/// against. Empty content yields no rows, matching the empty diff of
/// [`compute_segments`].
#[must_use]
pub fn full_insert_lines(content: &str) -> Vec<DisplayLine> {
    to_display_lines(&compute_segments("", content))
}

/// Marker character for a display line (`+` insert, `-` delete, space equal).
///
/// Markers are a presentation convention applied at write time; they are
/// never stored in [`DisplayLine`] data.
const fn marker(op: DiffOp) -> char {
    match op {
        DiffOp::Insert => '+',
        DiffOp::Delete => '-',
        DiffOp::Equal => ' ',
    }
}

/// Write display lines to an output writer with line markers.
///
/// # Errors
///
/// Returns an error if writing to the output writer fails.
pub fn write_display_lines(
    lines: &[DisplayLine],
    config: &RenderConfig,
    writer: &mut dyn Write,
) -> Result<()> {
    for line in lines {
        let row = format!("{}{}", marker(line.op), line.text);

        if config.colorize {
            let colored_row = match line.op {
                DiffOp::Insert => row.green().to_string(),
                DiffOp::Delete => row.red().to_string(),
                DiffOp::Equal => row.dimmed().to_string(),
            };
            writeln!(writer, "{colored_row}")?;
        } else {
            writeln!(writer, "{row}")?;
        }
    }

    Ok(())
}
