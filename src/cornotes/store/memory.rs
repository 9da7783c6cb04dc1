use super::DataStore;
use crate::error::Result;
use crate::model::{Note, Theme};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    draft: Option<Note>,
    theme: Option<Theme>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        self.notes = notes.to_vec();
        Ok(())
    }

    fn load_draft(&self) -> Result<Option<Note>> {
        Ok(self.draft.clone())
    }

    fn save_draft(&mut self, draft: &Note) -> Result<()> {
        self.draft = Some(draft.clone());
        Ok(())
    }

    fn clear_draft(&mut self) -> Result<()> {
        self.draft = None;
        Ok(())
    }

    fn load_theme(&self) -> Result<Theme> {
        Ok(self.theme.unwrap_or_default())
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NoteFields;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    pub fn note_with_fields(title: &str, cues: &str, main: &str, summary: &str) -> Note {
        Note::new(
            Uuid::new_v4(),
            &NoteFields {
                title: title.into(),
                cues: cues.into(),
                main: main.into(),
                summary: summary.into(),
            },
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed `count` notes with ascending `last_modified` stamps, so the
        /// last one seeded is the most recent.
        pub fn with_notes(mut self, count: usize) -> Self {
            let base = Utc::now() - Duration::minutes(count as i64);
            let mut notes = Vec::with_capacity(count);
            for i in 0..count {
                let mut note = note_with_fields(
                    &format!("Note {}", i + 1),
                    "",
                    &format!("Body {}", i + 1),
                    "",
                );
                note.last_modified = base + Duration::minutes(i as i64);
                notes.push(note);
            }
            self.store.save_notes(&notes).unwrap();
            self
        }

        pub fn with_draft(mut self, draft: &Note) -> Self {
            self.store.save_draft(draft).unwrap();
            self
        }
    }
}
