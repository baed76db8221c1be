//! In-memory note collection
//!
//! [`NoteStore`] owns the ordered list of loaded notes. Loading appends in
//! file order; a failed load never changes what the store already holds.

use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use crate::{
    config::NotesConfig,
    loader::{self, read_notes},
};

/// An ordered, owned collection of notes
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    config: NotesConfig,
    notes: Vec<String>,
}

impl NoteStore {
    /// Creates an empty store with the default, unbounded configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store bounded by `config`
    ///
    /// The config is expected to be validated already, see
    /// [`NotesConfig::from_json`].
    pub fn with_config(config: NotesConfig) -> Self {
        Self {
            config,
            notes: Vec::new(),
        }
    }

    /// Returns the configuration this store was created with
    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    /// Returns the loaded notes in load order
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Returns the number of loaded notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Checks if no note is loaded
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends every line of a note file to the store
    ///
    /// Notes from earlier loads are kept, so loading two files yields the
    /// first file's notes followed by the second's. The whole file is checked
    /// against the configured bounds before anything is appended.
    ///
    /// # Returns
    ///
    /// The number of notes appended
    ///
    /// # Errors
    ///
    /// Any [`loader::Error`]; the store is unchanged in every error case.
    pub fn load_notes(&mut self, path: impl AsRef<Path>) -> Result<usize, loader::Error> {
        let mut loaded = read_notes(path.as_ref(), &self.config, self.notes.len())?;
        let count = loaded.len();
        self.notes.append(&mut loaded);
        debug!(appended = count, total = self.notes.len(), "loaded notes");
        Ok(count)
    }

    /// Replaces the store contents with the lines of a note file
    ///
    /// # Errors
    ///
    /// Any [`loader::Error`]; the previous contents are kept on error.
    pub fn reload_notes(&mut self, path: impl AsRef<Path>) -> Result<usize, loader::Error> {
        let loaded = read_notes(path.as_ref(), &self.config, 0)?;
        let count = loaded.len();
        self.notes = loaded;
        debug!(total = count, "reloaded notes");
        Ok(count)
    }

    /// Removes every note
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Releases spare memory held by the collection
    ///
    /// Loaded notes are untouched; calling this at any point, including on a
    /// fresh store, has no observable effect.
    pub fn cleanup(&mut self) {
        self.notes.shrink_to_fit();
    }
}

/// A [`NoteStore`] that may be loaded and read from several threads
///
/// Loads and picks both go through the same lock, so a pick never observes
/// a half-appended file.
#[derive(Debug, Clone, Default)]
pub struct SharedNoteStore(Arc<Mutex<NoteStore>>);

impl SharedNoteStore {
    /// Wraps a store for shared use
    pub fn new(store: NoteStore) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }

    /// Locks the store for exclusive access
    ///
    /// A poisoned lock is recovered: loads only mutate the store after the
    /// file has been fully read, so a panicking holder cannot leave it torn.
    pub fn lock(&self) -> MutexGuard<'_, NoteStore> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a note file under the lock, see [`NoteStore::load_notes`]
    ///
    /// # Errors
    ///
    /// Any [`loader::Error`]; the store is unchanged in every error case.
    pub fn load_notes(&self, path: impl AsRef<Path>) -> Result<usize, loader::Error> {
        self.lock().load_notes(path)
    }
}
