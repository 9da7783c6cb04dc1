use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title used whenever a note is saved or exported without one.
pub const UNTITLED: &str = "Untitled Note";

/// A Cornell-method note: cues, main notes, and a summary under one title.
///
/// The same shape serves as the single draft slot: a draft is a `Note`
/// stored outside the collection, holding not-yet-saved field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub cues: String,
    pub main: String,
    pub summary: String,
    // Kept camelCase on disk; display order sorts on this, descending.
    #[serde(rename = "lastModified")]
    pub last_modified: DateTime<Utc>,
}

impl Note {
    pub fn new(id: Uuid, fields: &NoteFields) -> Self {
        Self {
            id,
            title: fields.title.clone(),
            cues: fields.cues.clone(),
            main: fields.main.clone(),
            summary: fields.summary.clone(),
            last_modified: Utc::now(),
        }
    }
}

/// The editing surface: the four text fields currently displayed.
///
/// The CLI writes into this buffer on edit events; the lifecycle
/// operations read from it when flushing drafts or saving.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFields {
    pub title: String,
    pub cues: String,
    pub main: String,
    pub summary: String,
}

impl NoteFields {
    /// True when all four fields are empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
            && self.cues.trim().is_empty()
            && self.main.trim().is_empty()
            && self.summary.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn load(&mut self, note: &Note) {
        self.title = note.title.clone();
        self.cues = note.cues.clone();
        self.main = note.main.clone();
        self.summary = note.summary.clone();
    }
}

/// One of the four editable fields, for routing edit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Cues,
    Main,
    Summary,
}

impl NoteFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Cues => self.cues = value,
            Field::Main => self.main = value,
            Field::Summary => self.summary = value,
        }
    }
}

impl From<&Note> for NoteFields {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            cues: note.cues.clone(),
            main: note.main.clone(),
            summary: note.summary.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything that isn't exactly "dark" reads as the default light theme.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
