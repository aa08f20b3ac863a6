//! Presentation helpers for history listings and entry detail views.
//!
//! These functions format entries and their diffs for terminal display.
//! They are conveniences layered on top of the diff core — selection
//! highlighting, expand/collapse state, and rollback wiring stay with the
//! caller.

use crate::diff::render::{RenderConfig, write_display_lines};
use crate::diff::{DiffSummary, DisplayLine};
use crate::history::HistoryEntry;
use crate::utils::formatters::{format_entry_id, format_timestamp};
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Write one listing row for a history entry: abbreviated id, message, and
/// the added/deleted counts for the revision.
///
/// # Errors
///
/// Returns an error if writing to the output writer fails.
pub fn write_summary_line(
    entry: &HistoryEntry,
    summary: DiffSummary,
    writer: &mut dyn Write,
) -> Result<()> {
    writeln!(
        writer,
        "{} {} ({} {})",
        format_entry_id(&entry.id).yellow(),
        entry.message,
        format!("+{}", summary.added).green(),
        format!("-{}", summary.deleted).red(),
    )?;
    Ok(())
}

/// Write the full header for an expanded history entry.
///
/// # Errors
///
/// Returns an error if writing to the output writer fails.
pub fn write_entry_header(entry: &HistoryEntry, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "{} {}", "revision".yellow(), entry.id)?;
    writeln!(writer, "{}: {}", "Author".bold(), entry.author.name)?;
    writeln!(
        writer,
        "{}: {}",
        "Date".bold(),
        format_timestamp(entry.author.timestamp)
    )?;
    writeln!(writer, "\n    {}\n", entry.message)?;
    Ok(())
}

/// Write an expanded entry: header followed by its rendered diff lines.
///
/// # Errors
///
/// Returns an error if writing to the output writer fails.
pub fn write_entry_detail(
    entry: &HistoryEntry,
    lines: &[DisplayLine],
    config: &RenderConfig,
    writer: &mut dyn Write,
) -> Result<()> {
    write_entry_header(entry, writer)?;
    write_display_lines(lines, config, writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffOp;
    use crate::history::Signature;

    fn test_entry() -> HistoryEntry {
        HistoryEntry::new(
            "abcdef1234567890",
            "Reword opening paragraph",
            Signature {
                name: "Test Author".to_string(),
                timestamp: 1_700_000_000,
            },
        )
    }

    #[test]
    fn test_summary_line_contents() -> Result<()> {
        let mut output = Vec::new();
        let summary = DiffSummary {
            added: 12,
            deleted: 4,
        };
        write_summary_line(&test_entry(), summary, &mut output)?;

        let result = String::from_utf8(output)?;
        assert!(result.contains("abcdef12"));
        assert!(!result.contains("abcdef123"));
        assert!(result.contains("Reword opening paragraph"));
        assert!(result.contains("+12"));
        assert!(result.contains("-4"));

        Ok(())
    }

    #[test]
    fn test_entry_header_contents() -> Result<()> {
        let mut output = Vec::new();
        write_entry_header(&test_entry(), &mut output)?;

        let result = String::from_utf8(output)?;
        assert!(result.contains("revision"));
        assert!(result.contains("abcdef1234567890"));
        assert!(result.contains("Test Author"));
        assert!(result.contains("    Reword opening paragraph"));

        Ok(())
    }

    #[test]
    fn test_entry_detail_includes_diff() -> Result<()> {
        let lines = vec![
            DisplayLine {
                op: DiffOp::Delete,
                text: "old line".to_string(),
            },
            DisplayLine {
                op: DiffOp::Insert,
                text: "new line".to_string(),
            },
        ];

        let mut output = Vec::new();
        let config = RenderConfig { colorize: false };
        write_entry_detail(&test_entry(), &lines, &config, &mut output)?;

        let result = String::from_utf8(output)?;
        assert!(result.contains("revision"));
        assert!(result.contains("-old line"));
        assert!(result.contains("+new line"));

        Ok(())
    }
}
