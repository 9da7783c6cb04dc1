use super::DataStore;
use crate::error::{NotesError, Result};
use crate::model::{Note, Theme};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const NOTES_FILE: &str = "notes.json";
const DRAFT_FILE: &str = "draft.json";
const THEME_FILE: &str = "theme";

/// File-based storage: three fixed slots under one data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        Ok(())
    }

    /// Read a slot file, mapping "does not exist" to `None`.
    fn read_slot(&self, name: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NotesError::Io(e)),
        }
    }

    fn write_slot(&self, name: &str, content: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.root.join(name), content).map_err(NotesError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_notes(&self) -> Result<Vec<Note>> {
        let Some(content) = self.read_slot(NOTES_FILE)? else {
            return Ok(Vec::new());
        };
        // Corrupt JSON degrades to an empty collection, never a failure.
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<()> {
        let content = serde_json::to_string_pretty(notes).map_err(NotesError::Serialization)?;
        self.write_slot(NOTES_FILE, &content)
    }

    fn load_draft(&self) -> Result<Option<Note>> {
        let Some(content) = self.read_slot(DRAFT_FILE)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str(&content).ok())
    }

    fn save_draft(&mut self, draft: &Note) -> Result<()> {
        let content = serde_json::to_string_pretty(draft).map_err(NotesError::Serialization)?;
        self.write_slot(DRAFT_FILE, &content)
    }

    fn clear_draft(&mut self) -> Result<()> {
        match fs::remove_file(self.root.join(DRAFT_FILE)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(NotesError::Io(e)),
        }
    }

    fn load_theme(&self) -> Result<Theme> {
        Ok(self
            .read_slot(THEME_FILE)?
            .map(|s| Theme::parse(&s))
            .unwrap_or_default())
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        self.write_slot(THEME_FILE, theme.as_str())
    }
}
