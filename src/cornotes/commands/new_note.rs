use crate::commands::{draft, CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;
use uuid::Uuid;

/// Start a brand-new blank note.
///
/// Unsaved edits are flushed to the draft slot first so nothing already
/// typed is lost, then the slot is cleared — the flushed draft is
/// superseded by the new note. The fresh id is pre-assigned so auto-saves
/// attach to this note before it is ever saved.
pub fn run<S: DataStore>(session: &mut Session, store: &mut S) -> Result<CmdResult> {
    draft::flush(session, store)?;
    store.clear_draft()?;

    session.fields.clear();
    session.current_note_id = Some(Uuid::new_v4());

    Ok(CmdResult::default().with_message(CmdMessage::info("New note started. Type and save!")))
}
