use crate::commands::{draft, new_note, select, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

/// Bring a fresh session to a consistent displayed state.
///
/// Ordering: theme, notes collection, the draft-restore gate, then — if
/// nothing became current — the most recently modified note, or a new
/// note when the collection is empty. A final reconcile pass re-displays
/// the saved note when no draft occupies the slot, falling back to a new
/// note on a stale pointer. The display is never left inconsistent.
pub fn run<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<CmdResult> {
    let theme = store.load_theme()?;
    session.notes = store.load_notes()?;

    let mut result = draft::restore(session, store, confirm)?;

    if session.current_note_id.is_none() {
        let most_recent = session
            .notes
            .iter()
            .max_by_key(|n| n.last_modified)
            .map(|n| n.id);
        match most_recent {
            Some(id) => {
                let r = select::run(session, store, id)?;
                result.messages.extend(r.messages);
            }
            None => {
                let r = new_note::run(session, store)?;
                result.messages.extend(r.messages);
            }
        }
    }

    // Reconcile: only when the draft slot is empty does the saved note
    // own the display.
    if store.load_draft()?.is_none() {
        match session.current_note_id {
            Some(id) => match session.find_note(id).cloned() {
                Some(note) => session.fields.load(&note),
                None => {
                    let r = new_note::run(session, store)?;
                    result.messages.extend(r.messages);
                }
            },
            None => {
                let r = new_note::run(session, store)?;
                result.messages.extend(r.messages);
            }
        }
    }

    Ok(result.with_theme(theme))
}
