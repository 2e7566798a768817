//! Show command - Print one note with all of its prompts

use anyhow::Result;

use super::utils;
use crate::notes::Note;

/// Resolve a note reference and render it
pub fn execute(notes: &[Note], reference: &str) -> Result<String> {
    let note = utils::resolve_note(notes, reference)?;
    Ok(format_note(note))
}

/// Render a note with its prompt list
pub fn format_note(note: &Note) -> String {
    let mut lines = vec![];

    let title = if note.title.is_empty() {
        "Untitled"
    } else {
        &note.title
    };
    lines.push(format!("{} ({})", title, note.id));
    lines.push(format!(
        "Created: {}",
        utils::format_timestamp(&note.created_at)
    ));
    lines.push(format!(
        "Updated: {}",
        utils::format_timestamp(&note.updated_at)
    ));
    lines.push(String::new());

    if note.prompts.is_empty() {
        lines.push("No prompts yet".to_string());
    }

    for (i, prompt) in note.prompts.iter().enumerate() {
        let prompt_title = if prompt.title.is_empty() {
            "(untitled prompt)"
        } else {
            &prompt.title
        };
        let short_id = prompt.id.get(..8).unwrap_or(&prompt.id);
        lines.push(format!("{}. {} [{}]", i + 1, prompt_title, short_id));

        if prompt.content.is_empty() {
            lines.push("   (empty)".to_string());
        } else {
            for line in prompt.content.lines() {
                lines.push(format!("   {}", line));
            }
        }
        lines.push(String::new());
    }

    // Drop the trailing blank line
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::Prompt;

    #[test]
    fn test_renders_title_and_prompts() {
        let mut note = Note::new();
        note.title = "Writing".to_string();
        let mut prompt = Prompt::new();
        prompt.title = "Summary".to_string();
        prompt.content = "Summarize this text".to_string();
        note.prompts.push(prompt);

        let output = format_note(&note);
        assert!(output.contains("Writing"));
        assert!(output.contains("1. Summary"));
        assert!(output.contains("   Summarize this text"));
    }

    #[test]
    fn test_renders_empty_note() {
        let note = Note::new();
        let output = format_note(&note);
        assert!(output.contains("Untitled"));
        assert!(output.contains("No prompts yet"));
    }

    #[test]
    fn test_multiline_content_is_indented() {
        let mut note = Note::new();
        let mut prompt = Prompt::new();
        prompt.content = "line one\nline two".to_string();
        note.prompts.push(prompt);

        let output = format_note(&note);
        assert!(output.contains("   line one"));
        assert!(output.contains("   line two"));
    }

    #[test]
    fn test_execute_resolves_reference() {
        let mut note = Note::new();
        note.title = "Coding".to_string();
        let notes = vec![note];

        assert!(execute(&notes, "Coding").is_ok());
        assert!(execute(&notes, "missing").is_err());
    }
}
