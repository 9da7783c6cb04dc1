use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::session::Session;
use crate::store::DataStore;
use uuid::Uuid;

/// Snapshot the editing surface into the draft slot.
///
/// Guard: a blank buffer belonging to a note that was never saved is not
/// worth a draft — the slot is cleared instead, so empty drafts never
/// accumulate. A blank buffer over a persisted note still drafts (the
/// user may have deliberately emptied the fields).
///
/// Returns `true` when a draft was written. If the draft needed a fresh
/// id, that id is adopted as the current note immediately, so later
/// auto-saves attach to the same note.
pub fn flush<S: DataStore>(session: &mut Session, store: &mut S) -> Result<bool> {
    if session.fields.is_blank() && session.current_note().is_none() {
        store.clear_draft()?;
        return Ok(false);
    }

    let id = session.current_note_id.unwrap_or_else(Uuid::new_v4);
    let draft = Note::new(id, &session.fields);
    store.save_draft(&draft)?;
    session.current_note_id = Some(id);
    Ok(true)
}

/// Startup-only: offer to restore a stored draft.
///
/// Confirmed, the draft is displayed exactly like a note and its id
/// becomes current (the slot itself stays occupied until a later
/// operation settles it). Declined, the slot is cleared permanently —
/// there is no second chance this session.
pub fn restore<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(draft) = store.load_draft()? else {
        return Ok(result);
    };

    if confirm("You have an unsaved draft. Would you like to restore it?") {
        session.fields.load(&draft);
        session.current_note_id = Some(draft.id);
        result.add_message(CmdMessage::info("Draft restored."));
    } else {
        store.clear_draft()?;
    }
    Ok(result)
}
