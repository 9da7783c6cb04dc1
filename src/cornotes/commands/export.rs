use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotesError, Result};
use crate::model::{Note, UNTITLED};
use crate::session::Session;
use std::fs;
use std::path::Path;

/// Export the currently selected note as a Markdown file.
///
/// The note's saved state is exported, not the live editing buffer. The
/// missing-note branch is defensive — the pointer invariant should make
/// it unreachable.
pub fn run(session: &Session, out_dir: &Path) -> Result<CmdResult> {
    let Some(id) = session.current_note_id else {
        return Ok(
            CmdResult::default().with_message(CmdMessage::error("No note selected to export."))
        );
    };
    let Some(note) = session.find_note(id) else {
        return Ok(CmdResult::default().with_message(CmdMessage::error(
            "Could not find the current note for export.",
        )));
    };

    let path = out_dir.join(format!("{}.md", slug(&note.title)));
    fs::write(&path, render_markdown(note)).map_err(NotesError::Io)?;

    Ok(CmdResult::default()
        .with_exported_path(path)
        .with_message(CmdMessage::success("Note exported as Markdown!")))
}

/// Fixed layout: title heading, then the three Cornell sections in order.
pub fn render_markdown(note: &Note) -> String {
    let title = if note.title.is_empty() {
        UNTITLED
    } else {
        note.title.as_str()
    };
    format!(
        "# {}\n\n## Cues / Questions\n{}\n\n## Main Notes\n{}\n\n## Summary\n{}",
        title, note.cues, note.main, note.summary
    )
    .trim()
    .to_string()
}

/// Lower-cased title with every non-alphanumeric character replaced by
/// `_`; `note` when the title is empty.
pub fn slug(title: &str) -> String {
    if title.is_empty() {
        return "note".to_string();
    }
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::note_with_fields;

    #[test]
    fn slug_replaces_non_alphanumerics() {
        assert_eq!(slug("My Plan!"), "my_plan_");
        assert_eq!(slug("Weekly Review 2"), "weekly_review_2");
        assert_eq!(slug(""), "note");
    }

    #[test]
    fn markdown_has_four_sections_in_order() {
        let note = note_with_fields("My Plan", "why?", "because", "so");
        let md = render_markdown(&note);

        let title_pos = md.find("# My Plan").unwrap();
        let cues_pos = md.find("## Cues / Questions\nwhy?").unwrap();
        let main_pos = md.find("## Main Notes\nbecause").unwrap();
        let summary_pos = md.find("## Summary\nso").unwrap();
        assert!(title_pos < cues_pos && cues_pos < main_pos && main_pos < summary_pos);
    }

    #[test]
    fn markdown_untitled_note_uses_placeholder_and_trims_tail() {
        let note = note_with_fields("", "", "body", "");
        let md = render_markdown(&note);
        assert!(md.starts_with(&format!("# {}", UNTITLED)));
        assert!(md.ends_with("## Summary"));
    }

    #[test]
    fn no_selection_is_a_user_facing_error() {
        let session = Session::new();
        let result = run(&session, Path::new(".")).unwrap();
        assert!(result.has_error());
        assert!(result.exported_path.is_none());
    }

    #[test]
    fn stale_pointer_is_a_user_facing_error() {
        let mut session = Session::new();
        session.current_note_id = Some(uuid::Uuid::new_v4());
        let result = run(&session, Path::new(".")).unwrap();
        assert!(result.has_error());
    }

    #[test]
    fn writes_slugged_file_with_rendered_body() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new();
        let note = note_with_fields("My Plan!", "q", "m", "s");
        session.current_note_id = Some(note.id);
        session.upsert(note.clone());

        let result = run(&session, dir.path()).unwrap();
        let path = result.exported_path.unwrap();
        assert_eq!(path.file_name().unwrap(), "my_plan_.md");
        assert_eq!(fs::read_to_string(path).unwrap(), render_markdown(&note));
    }
}
