//! Lifecycle state for a single editing session.
//!
//! The notes collection, the current-note pointer, and the field buffer
//! live in a [`Session`] owned by the API facade and passed by reference
//! into each operation. Nothing here touches the store.

use crate::model::{Note, NoteFields};
use uuid::Uuid;

/// In-memory state the lifecycle operations mutate: the notes collection,
/// the current-note pointer, and the editing-surface buffer.
#[derive(Debug, Default)]
pub struct Session {
    pub notes: Vec<Note>,
    pub current_note_id: Option<Uuid>,
    pub fields: NoteFields,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_note(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// The current pointer resolves to a persisted note only once that
    /// note has actually been saved; a pre-assigned id for a new, unsaved
    /// note resolves to `None`.
    pub fn current_note(&self) -> Option<&Note> {
        self.current_note_id.and_then(|id| self.find_note(id))
    }

    /// Replace the note with a matching id in place, or append.
    pub fn upsert(&mut self, note: Note) {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => *existing = note,
            None => self.notes.push(note),
        }
    }

    pub fn remove(&mut self, id: Uuid) {
        self.notes.retain(|n| n.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::note_with_fields;

    #[test]
    fn upsert_replaces_in_place() {
        let mut session = Session::new();
        let note = note_with_fields("A", "", "", "");
        let id = note.id;
        session.upsert(note);

        let mut updated = note_with_fields("A2", "", "", "");
        updated.id = id;
        session.upsert(updated);

        assert_eq!(session.notes.len(), 1);
        assert_eq!(session.notes[0].title, "A2");
    }

    #[test]
    fn current_note_is_none_for_unsaved_id() {
        let mut session = Session::new();
        session.current_note_id = Some(Uuid::new_v4());
        assert!(session.current_note().is_none());
    }

    #[test]
    fn remove_leaves_other_notes_untouched() {
        let mut session = Session::new();
        let a = note_with_fields("A", "", "", "");
        let b = note_with_fields("B", "", "", "");
        let a_id = a.id;
        session.upsert(a);
        session.upsert(b);

        session.remove(a_id);
        assert_eq!(session.notes.len(), 1);
        assert_eq!(session.notes[0].title, "B");
    }
}
