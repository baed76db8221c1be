//! Category note files on disk
//!
//! A library is a folder holding one note file per category, named
//! `<category>.txt`. This module creates the folder with sample notes,
//! appends new notes to a category and loads a category into a store.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use heck::ToTitleCase;
use thiserror::Error;
use tracing::info;

use crate::{
    constants::library::{DEFAULT_CATEGORIES, FILE_EXTENSION},
    loader,
    store::NoteStore,
};

/// Errors that can occur while managing library files
#[derive(Error, Debug)]
pub enum Error {
    /// The note to append is empty or whitespace only
    #[error("note cannot be empty")]
    EmptyNote,
    /// A library file or folder could not be written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// A category file could not be loaded
    #[error(transparent)]
    Load(#[from] loader::Error),
}

/// Sample notes written to a fresh default category
fn sample_notes(category: &str) -> &'static str {
    match category {
        "sensei_notes" => "Breathe deeply.\nKeep going.\nYou will make it.",
        "samurai" => {
            "Mastery comes from discipline.\nMove forward even when wounded.\nDoubt is the enemy of the blade."
        }
        "zen" => "Breathe.\nCome back to the present.\nCalm is a strength.",
        "42" => "Read the man page.\nTame the memory.\nTrue code is humble.",
        "life" => "Drink some water.\nCall someone you love.\nTidy your mind.",
        _ => "Write your own path.",
    }
}

/// Returns the label shown for a category
///
/// Default categories have fixed labels, anything else is title cased.
pub fn display_name(category: &str) -> String {
    match category {
        "sensei_notes" => "Sensei".to_owned(),
        "samurai" => "Samurai".to_owned(),
        "zen" => "Zen".to_owned(),
        "42" => "42".to_owned(),
        "life" => "Life".to_owned(),
        "custom" => "Custom".to_owned(),
        other => other.to_title_case(),
    }
}

/// Returns the label shown for a category under the legacy configuration
///
/// Matches [`display_name`] except `life` and `custom`, which keep their
/// French labels to sit alongside [`NotesConfig::legacy`](crate::NotesConfig::legacy).
pub fn legacy_display_name(category: &str) -> String {
    match category {
        "life" => "Vie".to_owned(),
        "custom" => "Perso".to_owned(),
        other => display_name(other),
    }
}

/// A folder of category note files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    /// Creates a library rooted at `root`; nothing is touched on disk
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the library folder
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the note file of a category
    pub fn category_path(&self, category: &str) -> PathBuf {
        self.root.join(format!("{category}.{FILE_EXTENSION}"))
    }

    /// Creates the library folder and any missing default category files
    ///
    /// Missing files are filled with sample notes. Existing files are never
    /// overwritten.
    ///
    /// # Returns
    ///
    /// The paths of the files that were created
    ///
    /// # Errors
    ///
    /// * `Error::Write` - The folder or a category file could not be created
    pub fn ensure_category_files(&self) -> Result<Vec<PathBuf>, Error> {
        fs::create_dir_all(&self.root).map_err(|source| Error::Write {
            path: self.root.clone(),
            source,
        })?;

        let mut created = Vec::new();
        for category in DEFAULT_CATEGORIES {
            let path = self.category_path(category);
            let file = OpenOptions::new().write(true).create_new(true).open(&path);
            let mut file = match file {
                Ok(file) => file,
                Err(error) if error.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(source) => return Err(Error::Write { path, source }),
            };
            file.write_all(sample_notes(category).as_bytes())
                .map_err(|source| Error::Write {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), "created category file");
            created.push(path);
        }
        Ok(created)
    }

    /// Appends a note to a category file
    ///
    /// The note is trimmed of surrounding whitespace and written after a
    /// newline, so it always starts a line of its own. The file is created
    /// if it does not exist.
    ///
    /// # Returns
    ///
    /// The trimmed note that was written
    ///
    /// # Errors
    ///
    /// * `Error::EmptyNote` - The note is empty after trimming
    /// * `Error::Write` - The category file could not be written
    pub fn append_note(&self, category: &str, text: &str) -> Result<String, Error> {
        let note = text.trim();
        if note.is_empty() {
            return Err(Error::EmptyNote);
        }

        let path = self.category_path(category);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| write!(file, "\n{note}"))
            .map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
        info!(path = %path.display(), "appended note");
        Ok(note.to_owned())
    }

    /// Loads a category into a store, replacing what it held
    ///
    /// # Returns
    ///
    /// The number of notes now in the store
    ///
    /// # Errors
    ///
    /// * `Error::Load` - The category file could not be loaded; the store is
    ///   unchanged
    pub fn load_category(&self, category: &str, store: &mut NoteStore) -> Result<usize, Error> {
        Ok(store.reload_notes(self.category_path(category))?)
    }
}
