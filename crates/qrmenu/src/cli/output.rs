//! Output formatting utilities for CLI commands
//!
//! Provides consistent formatting for:
//! - Tables with column alignment
//! - Category bars with the active entry highlighted

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use qrmenu_catalog::CategoryEntry;

/// Print a table with a styled header row
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    println!("{}", table);
}

/// Render a category bar: `[Tümü]  Çorbalar  Tatlılar`
///
/// The active entry is wrapped in brackets; an empty label prints as `(boş)`.
pub fn format_category_bar(entries: &[CategoryEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let label = if entry.label.is_empty() {
                "(boş)"
            } else {
                entry.label.as_str()
            };
            if entry.active {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Truncate text to `max` characters, appending an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
