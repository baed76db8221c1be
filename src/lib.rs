//! # Seisen Note Library
//!
//! This library loads short text notes from plain text files, one note per
//! line, and serves them back one at a time at random. Notes are grouped by
//! category in a library folder, each category being a single file.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod constants;
pub mod library;
pub mod loader;
pub mod picker;
pub mod store;

pub use config::NotesConfig;
pub use library::Library;
pub use picker::Picker;
pub use store::{NoteStore, SharedNoteStore};

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_note_before_any_load_is_sentinel() {
        let store = NoteStore::new();
        let mut picker = Picker::with_seed(0);

        assert_eq!(picker.get_note(&store), "No note available");
    }

    #[test]
    fn test_load_then_pick() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "Believe in yourself\nTake a break\nYou did great\n").unwrap();

        let mut store = NoteStore::new();
        assert_eq!(store.load_notes(&path).unwrap(), 3);

        let mut picker = Picker::new();
        let note = picker.get_note(&store);
        assert!(["Believe in yourself", "Take a break", "You did great"].contains(&note));

        store.cleanup();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_config_from_json_drives_store() {
        let config = NotesConfig::from_json(r#"{"sentinel": "Nothing yet"}"#).unwrap();
        let store = NoteStore::with_config(config);
        let mut picker = Picker::default();

        assert_eq!(picker.get_note(&store), "Nothing yet");
    }
}
