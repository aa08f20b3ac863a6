//! Display formatting helpers shared by the presentation layer.

use crate::SHORT_ID_LEN;
use chrono::{Local, TimeZone};

/// Formats an entry id for display (shows the first 8 characters)
#[must_use]
pub fn format_entry_id(id: &str) -> &str {
    // Ids are opaque strings, so cut on a character boundary
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((index, _)) => &id[..index],
        None => id,
    }
}

/// Formats a Unix timestamp as a local `YYYY-MM-DD HH:MM:SS` string
#[must_use]
pub fn format_timestamp(seconds: i64) -> String {
    let datetime = Local
        .timestamp_opt(seconds, 0)
        .single()
        .unwrap_or_else(Local::now);
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}
