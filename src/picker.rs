//! Random note selection
//!
//! A [`Picker`] owns its random number generator, so the caller decides how
//! it is seeded: a fixed seed for reproducible sequences, or fresh entropy.

use tracing::debug;

use crate::store::{NoteStore, SharedNoteStore};

/// Draws notes uniformly at random, with replacement
#[derive(Debug, Clone)]
pub struct Picker {
    rng: fastrand::Rng,
}

impl Default for Picker {
    /// Creates a picker seeded from entropy (same as `new()`)
    fn default() -> Self {
        Self::new()
    }
}

impl Picker {
    /// Creates a picker seeded from entropy
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    /// Creates a picker whose draws are fully determined by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    /// Creates a picker around an existing generator
    pub fn from_rng(rng: fastrand::Rng) -> Self {
        Self { rng }
    }

    /// Returns one note chosen uniformly at random
    ///
    /// Every note in the store is equally likely on each call and
    /// consecutive calls may return the same note.
    ///
    /// # Returns
    ///
    /// A note from `store`, or the store's configured sentinel when it holds
    /// no notes
    pub fn get_note<'a>(&mut self, store: &'a NoteStore) -> &'a str {
        match self.rng.choice(store.notes()) {
            Some(note) => note,
            None => {
                debug!("no note loaded, returning sentinel");
                &store.config().sentinel
            }
        }
    }

    /// Returns a copy of a random note from a shared store
    ///
    /// The store's lock is held only for the draw.
    pub fn get_shared_note(&mut self, shared: &SharedNoteStore) -> String {
        self.get_note(&shared.lock()).to_owned()
    }
}
