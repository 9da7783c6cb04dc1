use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, UNTITLED};
use crate::session::Session;
use crate::store::DataStore;
use chrono::Utc;
use uuid::Uuid;

/// Save the editing surface as a note.
///
/// A fully blank buffer is a validation error and mutates nothing.
/// Otherwise the note is upserted by id (current id if set, fresh
/// otherwise), the collection is persisted whole, and the draft slot is
/// cleared — a save supersedes any pending draft.
pub fn run<S: DataStore>(session: &mut Session, store: &mut S) -> Result<CmdResult> {
    if session.fields.is_blank() {
        return Ok(
            CmdResult::default().with_message(CmdMessage::error("Cannot save an empty note."))
        );
    }

    let title = session.fields.title.trim();
    let note = Note {
        id: session.current_note_id.unwrap_or_else(Uuid::new_v4),
        title: if title.is_empty() {
            UNTITLED.to_string()
        } else {
            title.to_string()
        },
        cues: session.fields.cues.trim().to_string(),
        main: session.fields.main.trim().to_string(),
        summary: session.fields.summary.trim().to_string(),
        last_modified: Utc::now(),
    };

    session.upsert(note.clone());
    session.current_note_id = Some(note.id);
    store.save_notes(&session.notes)?;
    store.clear_draft()?;

    // Re-display the saved (trimmed) state.
    session.fields.load(&note);

    Ok(CmdResult::default()
        .with_affected_notes(vec![note])
        .with_message(CmdMessage::success("Note saved successfully!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::draft;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_buffer_is_a_validation_error() {
        let mut session = Session::new();
        let mut store = InMemoryStore::new();
        store
            .save_draft(&crate::store::memory::fixtures::note_with_fields("d", "", "", ""))
            .unwrap();

        let result = run(&mut session, &mut store).unwrap();
        assert!(result.has_error());
        assert!(session.notes.is_empty());
        assert!(store.load_notes().unwrap().is_empty());
        // No mutation: the draft slot is untouched too.
        assert!(store.load_draft().unwrap().is_some());
    }

    #[test]
    fn whitespace_only_buffer_is_still_empty() {
        let mut session = Session::new();
        session.fields.title = "   ".into();
        session.fields.main = "\n\t".into();
        let mut store = InMemoryStore::new();

        let result = run(&mut session, &mut store).unwrap();
        assert!(result.has_error());
        assert!(session.notes.is_empty());
    }

    #[test]
    fn empty_title_defaults_to_placeholder() {
        let mut session = Session::new();
        session.fields.main = "body".into();
        let mut store = InMemoryStore::new();

        run(&mut session, &mut store).unwrap();
        assert_eq!(session.notes[0].title, UNTITLED);
    }

    #[test]
    fn saved_note_round_trips_through_the_store() {
        let mut session = Session::new();
        session.fields.title = "  Plan  ".into();
        session.fields.cues = "why?".into();
        session.fields.main = "because".into();
        let mut store = InMemoryStore::new();

        let before = Utc::now();
        run(&mut session, &mut store).unwrap();

        let loaded = store.load_notes().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Plan");
        assert_eq!(loaded[0].cues, "why?");
        assert_eq!(loaded[0].main, "because");
        assert!(loaded[0].last_modified >= before);
        assert_eq!(session.current_note_id, Some(loaded[0].id));
    }

    #[test]
    fn saving_twice_upserts_one_entry() {
        let mut session = Session::new();
        session.fields.title = "First".into();
        let mut store = InMemoryStore::new();

        run(&mut session, &mut store).unwrap();
        let id = session.current_note_id.unwrap();

        session.fields.title = "Second".into();
        run(&mut session, &mut store).unwrap();

        let loaded = store.load_notes().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, id);
        assert_eq!(loaded[0].title, "Second");
    }

    #[test]
    fn save_clears_a_pending_draft() {
        let mut session = Session::new();
        session.fields.title = "Note".into();
        let mut store = InMemoryStore::new();
        draft::flush(&mut session, &mut store).unwrap();
        assert!(store.load_draft().unwrap().is_some());

        run(&mut session, &mut store).unwrap();
        assert!(store.load_draft().unwrap().is_none());
    }
}
