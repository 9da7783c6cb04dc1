//! # API Facade
//!
//! `NotesApi` is the single entry point for all operations, regardless of
//! the UI driving it. It owns the lifecycle state ([`Session`]), the
//! storage backend, and the auto-save debouncer, and dispatches to the
//! command layer. It never touches stdout or assumes a terminal: results
//! come back as structured [`CmdResult`] values for the caller to render.
//!
//! Generic over [`DataStore`], so production runs on `FileStore` and
//! tests on `InMemoryStore`.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::debounce::Debouncer;
use crate::error::{NotesError, Result};
use crate::model::{Field, NoteFields, Theme};
use crate::session::Session;
use crate::store::DataStore;
use std::path::Path;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Quiet period after the last edit before the draft auto-saves.
pub const AUTO_SAVE_WINDOW: Duration = Duration::from_millis(1500);

/// Keys for debounced work. Auto-save is the only scheduled task today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Task {
    AutoSave,
}

pub struct NotesApi<S: DataStore> {
    store: S,
    session: Session,
    debouncer: Debouncer<Task>,
}

impl<S: DataStore> NotesApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::new(),
            debouncer: Debouncer::new(AUTO_SAVE_WINDOW),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn fields(&self) -> &NoteFields {
        &self.session.fields
    }

    /// Run the startup sequence; `confirm` answers the draft-restore gate.
    pub fn startup(&mut self, confirm: &mut dyn FnMut(&str) -> bool) -> Result<CmdResult> {
        commands::startup::run(&mut self.session, &mut self.store, confirm)
    }

    pub fn new_note(&mut self) -> Result<CmdResult> {
        self.debouncer.cancel(&Task::AutoSave);
        commands::new_note::run(&mut self.session, &mut self.store)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        let result = commands::save::run(&mut self.session, &mut self.store)?;
        if !result.has_error() {
            // The save settled the draft slot; a pending auto-save would
            // only recreate it.
            self.debouncer.cancel(&Task::AutoSave);
        }
        Ok(result)
    }

    /// `confirm` answers the destructive-action gate.
    pub fn delete(&mut self, confirm: &mut dyn FnMut(&str) -> bool) -> Result<CmdResult> {
        let had_selection = self.session.current_note_id.is_some();
        let result = commands::delete::run(&mut self.session, &mut self.store, confirm)?;
        // Cancel only when the deletion actually settled the draft slot.
        if had_selection && self.session.current_note_id.is_none() {
            self.debouncer.cancel(&Task::AutoSave);
        }
        Ok(result)
    }

    pub fn select(&mut self, id: Uuid) -> Result<CmdResult> {
        self.debouncer.cancel(&Task::AutoSave);
        commands::select::run(&mut self.session, &mut self.store, id)
    }

    /// Resolve a 1-based display index (as printed by `list`) to a note
    /// and select it.
    pub fn select_by_index(&mut self, index: usize) -> Result<CmdResult> {
        let listed = commands::list::run(&self.session)?.listed_notes;
        let id = listed
            .iter()
            .find(|dn| dn.index == index)
            .map(|dn| dn.note.id)
            .ok_or_else(|| NotesError::Api(format!("Index {} not found", index)))?;
        self.select(id)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn export(&self, out_dir: &Path) -> Result<CmdResult> {
        commands::export::run(&self.session, out_dir)
    }

    pub fn theme(&self) -> Result<CmdResult> {
        commands::theme::show(&self.store)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<CmdResult> {
        commands::theme::set(&mut self.store, theme)
    }

    pub fn toggle_theme(&mut self) -> Result<CmdResult> {
        commands::theme::toggle(&mut self.store)
    }

    /// An edit event: update the field buffer and (re)schedule the
    /// debounced auto-save. Each event supersedes the previous unfired
    /// timer — trailing-edge debounce.
    pub fn edit_field(&mut self, field: Field, value: String, now: Instant) {
        self.session.fields.set(field, value);
        self.debouncer.schedule(Task::AutoSave, now);
    }

    /// Poll the debouncer; fires the auto-save if its quiet period has
    /// elapsed. The event loop calls this every iteration.
    pub fn poll_autosave(&mut self, now: Instant) -> Result<Option<CmdResult>> {
        if !self.debouncer.due(now).contains(&Task::AutoSave) {
            return Ok(None);
        }
        self.run_autosave().map(Some)
    }

    /// Fire a still-pending auto-save immediately. Used when the session
    /// ends, so trailing edits are not lost.
    pub fn flush_pending(&mut self) -> Result<Option<CmdResult>> {
        if !self.debouncer.drain().contains(&Task::AutoSave) {
            return Ok(None);
        }
        self.run_autosave().map(Some)
    }

    fn run_autosave(&mut self) -> Result<CmdResult> {
        let wrote = commands::draft::flush(&mut self.session, &mut self.store)?;
        let mut result = CmdResult::default();
        if wrote {
            result.add_message(CmdMessage::info("Draft auto-saved."));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> NotesApi<InMemoryStore> {
        NotesApi::new(InMemoryStore::new())
    }

    #[test]
    fn edits_auto_save_after_the_quiet_period() {
        let mut api = api();
        let t0 = Instant::now();
        api.startup(&mut |_| true).unwrap();
        let id = api.session().current_note_id;

        api.edit_field(Field::Main, "Hello".into(), t0);
        assert!(api.poll_autosave(t0 + Duration::from_millis(100)).unwrap().is_none());

        let fired = api.poll_autosave(t0 + AUTO_SAVE_WINDOW).unwrap().unwrap();
        assert_eq!(fired.messages[0].content, "Draft auto-saved.");

        let draft = api.store.load_draft().unwrap().unwrap();
        assert_eq!(draft.main, "Hello");
        assert_eq!(draft.title, "");
        // Startup pre-assigned the id; the draft attaches to it.
        assert_eq!(Some(draft.id), id);
    }

    #[test]
    fn a_new_edit_restarts_the_wait() {
        let mut api = api();
        let t0 = Instant::now();
        api.edit_field(Field::Title, "a".into(), t0);
        let t1 = t0 + Duration::from_millis(1000);
        api.edit_field(Field::Title, "ab".into(), t1);

        assert!(api.poll_autosave(t0 + AUTO_SAVE_WINDOW).unwrap().is_none());
        assert!(api.poll_autosave(t1 + AUTO_SAVE_WINDOW).unwrap().is_some());
    }

    #[test]
    fn blank_new_note_auto_save_stays_silent() {
        let mut api = api();
        let t0 = Instant::now();
        api.startup(&mut |_| true).unwrap();
        api.edit_field(Field::Main, "x".into(), t0);
        api.edit_field(Field::Main, "".into(), t0);

        let fired = api.poll_autosave(t0 + AUTO_SAVE_WINDOW).unwrap().unwrap();
        assert!(fired.messages.is_empty());
        assert!(api.store.load_draft().unwrap().is_none());
    }

    #[test]
    fn save_cancels_the_pending_auto_save() {
        let mut api = api();
        let t0 = Instant::now();
        api.edit_field(Field::Title, "Note".into(), t0);
        api.save().unwrap();

        assert!(api.poll_autosave(t0 + AUTO_SAVE_WINDOW).unwrap().is_none());
        assert!(api.store.load_draft().unwrap().is_none());
    }

    #[test]
    fn failed_save_keeps_the_auto_save_pending() {
        let mut api = api();
        let t0 = Instant::now();
        api.edit_field(Field::Title, "  ".into(), t0);
        let result = api.save().unwrap();
        assert!(result.has_error());

        // Blank new note: the flush fires but writes nothing.
        assert!(api.poll_autosave(t0 + AUTO_SAVE_WINDOW).unwrap().is_some());
    }

    #[test]
    fn flush_pending_fires_before_the_window() {
        let mut api = api();
        api.edit_field(Field::Main, "trailing".into(), Instant::now());

        let fired = api.flush_pending().unwrap().unwrap();
        assert_eq!(fired.messages.len(), 1);
        assert_eq!(api.store.load_draft().unwrap().unwrap().main, "trailing");
    }

    #[test]
    fn select_by_index_follows_display_order() {
        let mut api = api();
        api.edit_field(Field::Title, "First".into(), Instant::now());
        api.save().unwrap();
        api.new_note().unwrap();
        api.edit_field(Field::Title, "Second".into(), Instant::now());
        api.save().unwrap();

        // "Second" is most recent, so index 2 is "First".
        api.select_by_index(2).unwrap();
        assert_eq!(api.fields().title, "First");

        let err = api.select_by_index(9).unwrap_err();
        assert!(matches!(err, NotesError::Api(_)));
    }
}
