//! # Cornotes Architecture
//!
//! Cornotes is a **UI-agnostic note-taking library** for the Cornell
//! method (title, cues, main notes, summary), with a CLI client wired on
//! top. The interesting part is not the rendering — it is the note/draft
//! lifecycle: one in-memory "current note" pointer, one notes collection,
//! and one draft slot in persistent storage, kept consistent across
//! create/select/save/delete/auto-save/reload transitions.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, runs the session loop, prints output   │
//! │  - The ONLY place that knows about stdout/stderr/prompts    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - NotesApi facade: session state + store + debouncer       │
//! │  - One method per operation, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Lifecycle logic: new/save/delete/select/export/draft,    │
//! │    startup ordering, theme                                  │
//! │  - No I/O assumptions beyond the DataStore it is handed     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over three slots:               │
//! │    notes collection, single draft, theme preference         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle invariants
//!
//! - Note ids are assigned exactly when first needed (New Note, or the
//!   first draft flush of an unsaved note) and never reused.
//! - The draft slot holds at most one snapshot and is cleared whenever a
//!   save, delete, or selection settles what the display shows.
//! - Every operation runs to completion on the single event loop; the
//!   only scheduled work is the cancellable auto-save debounce
//!   ([`debounce::Debouncer`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Lifecycle logic for each operation
//! - [`session`]: Session state (collection, pointer, field buffer)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, `NoteFields`, `Theme`)
//! - [`debounce`]: Keyed trailing-edge task scheduling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod debounce;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
