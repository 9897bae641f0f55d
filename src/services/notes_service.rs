use chrono::Utc;
use uuid::Uuid;

use crate::db::{load_json, save_json, Storage};
use crate::errors::StorageError;
use crate::models::note::Note;

const NOTES_STORAGE_KEY: &str = "admin-notes";

/// Admin overview notes board, newest note first.
pub struct NotesService<S: Storage> {
    store: S,
}

impl<S: Storage> NotesService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Note>, StorageError> {
        Ok(load_json(&self.store, NOTES_STORAGE_KEY)?.unwrap_or_default())
    }

    /// Returns `None` without touching storage when the text is blank.
    pub fn add(&self, text: &str) -> Result<Option<Note>, StorageError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let note = Note {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            created_at: Utc::now().timestamp_millis(),
        };
        let mut notes = self.list()?;
        notes.insert(0, note.clone());
        save_json(&self.store, NOTES_STORAGE_KEY, &notes)?;
        Ok(Some(note))
    }

    /// Returns whether a note was removed.
    pub fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let mut notes = self.list()?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Ok(false);
        }
        save_json(&self.store, NOTES_STORAGE_KEY, &notes)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.clear(NOTES_STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn test_add_prepends_trimmed_note() {
        let notes = NotesService::new(MemoryStore::new());
        notes.add("Ring Bygg AB").unwrap();
        let second = notes.add("  Byt olja på grävaren  ").unwrap().unwrap();

        let all = notes.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[0].text, "Byt olja på grävaren");
    }

    #[test]
    fn test_blank_note_is_ignored() {
        let notes = NotesService::new(MemoryStore::new());
        assert!(notes.add("   ").unwrap().is_none());
        assert!(notes.list().unwrap().is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let notes = NotesService::new(MemoryStore::new());
        let note = notes.add("Hämta släp").unwrap().unwrap();
        notes.add("Fakturera").unwrap();

        assert!(notes.remove(&note.id).unwrap());
        assert!(!notes.remove(&note.id).unwrap());
        assert_eq!(notes.list().unwrap().len(), 1);

        notes.clear().unwrap();
        assert!(notes.list().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_storage_loads_empty_board() {
        let store = MemoryStore::new();
        store.set(NOTES_STORAGE_KEY, "{not json").unwrap();
        let notes = NotesService::new(store);
        assert!(notes.list().unwrap().is_empty());
    }
}
