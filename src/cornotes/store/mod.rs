//! # Storage Layer
//!
//! This module defines the storage abstraction for cornotes. The
//! [`DataStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Storage Slots
//!
//! Persistent state lives in three independent slots:
//! - the **notes collection** (always written whole, never incrementally)
//! - a single **draft slot**, holding at most one unsaved snapshot
//! - the **theme preference**
//!
//! Absence is a valid result for every slot: no operation errors for
//! "not found". Unreadable stored data degrades to the empty/default
//! value rather than failing the application.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Notes collection in `notes.json` (JSON array)
//!   - Draft slot in `draft.json` (single JSON object)
//!   - Theme preference in `theme` (plain text, `light` or `dark`)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution

use crate::error::Result;
use crate::model::{Note, Theme};

pub mod fs;
pub mod memory;

/// Abstract interface for note, draft, and theme persistence.
///
/// Implementations own durability but not interpretation: which note is
/// current, and when the draft slot is cleared, is decided upstream.
pub trait DataStore {
    /// Load the full notes collection. Empty if nothing stored or the
    /// stored data is unreadable.
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Overwrite the entire stored collection.
    fn save_notes(&mut self, notes: &[Note]) -> Result<()>;

    /// Load the draft slot, if occupied.
    fn load_draft(&self) -> Result<Option<Note>>;

    /// Overwrite the draft slot (single value, not a collection).
    fn save_draft(&mut self, draft: &Note) -> Result<()>;

    /// Empty the draft slot. Clearing an empty slot is not an error.
    fn clear_draft(&mut self) -> Result<()>;

    /// Load the theme preference, defaulting to light if unset.
    fn load_theme(&self) -> Result<Theme>;

    fn save_theme(&mut self, theme: Theme) -> Result<()>;
}
