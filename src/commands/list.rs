//! List command - Show all notes in the active collection

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use super::utils;
use crate::notes::Note;

/// Options for the list command
pub struct ListOptions {
    /// Show the full note id for each entry
    pub with_id: bool,
    /// Sort by: name, updated, prompts
    pub sort: String,
    /// Reverse sort order
    pub reverse: bool,
    /// Limit number of results
    pub limit: Option<usize>,
}

/// Render the note collection as a table
pub fn execute(notes: &[Note], options: ListOptions) -> String {
    let mut notes: Vec<&Note> = notes.iter().collect();

    match options.sort.as_str() {
        "name" => {
            notes.sort_by(|a, b| a.title.cmp(&b.title));
        }
        "prompts" => {
            notes.sort_by(|a, b| b.prompts.len().cmp(&a.prompts.len()));
        }
        _ => {
            // Default (including "updated"): most recently updated first
            notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        }
    }

    if options.reverse {
        notes.reverse();
    }

    let total_count = notes.len();
    if let Some(n) = options.limit {
        notes.truncate(n);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![];
    if options.with_id {
        header.push(Cell::new("ID"));
    }
    header.push(Cell::new("Title"));
    header.push(Cell::new("Prompts"));
    header.push(Cell::new("Updated"));
    table.set_header(header);

    for note in &notes {
        let title = if note.title.is_empty() {
            "Untitled".to_string()
        } else {
            note.title.clone()
        };

        let mut row = vec![];
        if options.with_id {
            row.push(Cell::new(&note.id));
        }
        row.push(Cell::new(title));
        row.push(Cell::new(note.prompts.len().to_string()));
        row.push(Cell::new(utils::format_timestamp(&note.updated_at)));
        table.add_row(row);
    }

    let mut output = table.to_string();
    if notes.len() < total_count {
        output.push_str(&format!(
            "\n\nShowing {} of {} notes",
            notes.len(),
            total_count
        ));
    } else {
        output.push_str(&format!("\n\n{} notes found", total_count));
    }

    output
}
