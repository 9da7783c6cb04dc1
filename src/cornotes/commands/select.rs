use crate::commands::{draft, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;
use uuid::Uuid;

/// Switch the display to the note with the given id.
///
/// In-progress edits on the previously viewed note are flushed to the
/// draft slot before anything else — switching must not silently discard
/// them. Once the target is displayed the slot is cleared: the selected
/// note's saved state is the source of truth. An unknown id is a no-op.
pub fn run<S: DataStore>(session: &mut Session, store: &mut S, id: Uuid) -> Result<CmdResult> {
    draft::flush(session, store)?;

    let Some(note) = session.find_note(id).cloned() else {
        return Ok(CmdResult::default());
    };

    session.fields.load(&note);
    session.current_note_id = Some(note.id);
    store.clear_draft()?;

    Ok(CmdResult::default().with_affected_notes(vec![note]))
}
