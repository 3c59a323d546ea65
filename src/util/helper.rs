// src/util/helper.rs
use chrono::{TimeZone, Utc};
use std::io::{self, IsTerminal};
use std::path::Path;

pub fn is_stderr_piped() -> bool {
    !io::stderr().is_terminal()
}

/// Format a URL for display, truncating the tail if necessary
pub fn format_url(url: &str, max_length: usize) -> String {
    if url.chars().count() <= max_length {
        url.to_string()
    } else {
        let visible: String = url.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", visible)
    }
}

/// Format a link id (unix epoch milliseconds) as an absolute timestamp
pub fn format_added_at(id_millis: i64) -> String {
    match Utc.timestamp_millis_opt(id_millis) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => "Invalid timestamp".to_string(),
    }
}

/// True if the path could be created as a file right now: its parent
/// directory exists (or it has none).
pub fn parent_dir_exists(path: &Path) -> bool {
    match path.parent() {
        None => true,
        Some(parent) if parent.as_os_str().is_empty() => true,
        Some(parent) => parent.is_dir(),
    }
}
