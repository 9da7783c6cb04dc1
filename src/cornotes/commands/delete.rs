use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

/// Delete the currently selected note, behind the destructive-action gate.
///
/// The draft slot is cleared too — it may have been shadowing the deleted
/// note. Declining the gate mutates nothing.
pub fn run<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<CmdResult> {
    let Some(id) = session.current_note_id else {
        return Ok(
            CmdResult::default().with_message(CmdMessage::error("No note selected to delete."))
        );
    };

    let title = if session.fields.title.is_empty() {
        "this note".to_string()
    } else {
        session.fields.title.clone()
    };
    if !confirm(&format!("Are you sure you want to delete \"{}\"?", title)) {
        return Ok(CmdResult::default());
    }

    session.remove(id);
    store.save_notes(&session.notes)?;
    store.clear_draft()?;
    session.fields.clear();
    session.current_note_id = None;

    Ok(CmdResult::default().with_message(CmdMessage::info("Note deleted.")))
}
