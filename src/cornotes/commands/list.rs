use crate::commands::{CmdResult, DisplayNote};
use crate::error::Result;
use crate::session::Session;

/// List notes in display order: most recently modified first, with
/// 1-based indexes and the current note marked active.
pub fn run(session: &Session) -> Result<CmdResult> {
    let mut notes = session.notes.clone();
    notes.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

    let listed = notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            index: i + 1,
            active: session.current_note_id == Some(note.id),
            note,
        })
        .collect();

    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::note_with_fields;
    use chrono::Duration;

    #[test]
    fn orders_by_last_modified_descending() {
        let mut session = Session::new();
        let mut older = note_with_fields("Older", "", "", "");
        older.last_modified -= Duration::minutes(10);
        let newer = note_with_fields("Newer", "", "", "");
        session.upsert(older);
        session.upsert(newer);

        let result = run(&session).unwrap();
        assert_eq!(result.listed_notes[0].note.title, "Newer");
        assert_eq!(result.listed_notes[0].index, 1);
        assert_eq!(result.listed_notes[1].note.title, "Older");
        assert_eq!(result.listed_notes[1].index, 2);
    }

    #[test]
    fn marks_the_current_note_active() {
        let mut session = Session::new();
        let note = note_with_fields("A", "", "", "");
        session.current_note_id = Some(note.id);
        session.upsert(note);
        session.upsert(note_with_fields("B", "", "", ""));

        let result = run(&session).unwrap();
        let active: Vec<_> = result
            .listed_notes
            .iter()
            .filter(|dn| dn.active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].note.title, "A");
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let session = Session::new();
        let result = run(&session).unwrap();
        assert!(result.listed_notes.is_empty());
    }
}
