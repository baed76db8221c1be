//! Note store configuration
//!
//! Capacity bounds, terminator handling and the empty-store sentinel are
//! explicit values here rather than implicit array dimensions. A config is
//! validated with `garde` before it reaches a store.

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::notes::{
    DEFAULT_SENTINEL, LEGACY_MAX_LINE_LENGTH, LEGACY_MAX_NOTES, LEGACY_SENTINEL,
    MAX_LINE_LENGTH_LIMIT, MAX_NOTES_LIMIT, MAX_SENTINEL_LENGTH,
};

/// Settings shared by the loader and the picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NotesConfig {
    /// Maximum number of notes the store may hold, unbounded when `None`
    #[garde(range(min = 1, max = MAX_NOTES_LIMIT))]
    pub max_notes: Option<usize>,

    /// Maximum length of a single note in bytes, terminator excluded
    #[garde(range(min = 1, max = MAX_LINE_LENGTH_LIMIT))]
    pub max_line_length: Option<usize>,

    /// Whether notes keep their trailing `\n` / `\r\n`
    #[garde(skip)]
    pub keep_terminators: bool,

    /// Text returned when the store is empty
    #[garde(length(chars, min = 1, max = MAX_SENTINEL_LENGTH))]
    pub sentinel: String,
}

impl Default for NotesConfig {
    /// Unbounded store, stripped terminators, English sentinel
    fn default() -> Self {
        Self {
            max_notes: None,
            max_line_length: None,
            keep_terminators: false,
            sentinel: DEFAULT_SENTINEL.to_owned(),
        }
    }
}

/// Errors that can occur while reading a configuration
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not valid JSON for a `NotesConfig`
    #[error("malformed notes config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The config parsed but holds out-of-range values
    #[error("invalid notes config: {0}")]
    Invalid(#[from] garde::Report),
}

impl NotesConfig {
    /// The bounds and sentinel of the original fixed-buffer store
    ///
    /// At most 100 notes of 255 bytes each, terminators kept, French sentinel.
    pub fn legacy() -> Self {
        Self {
            max_notes: Some(LEGACY_MAX_NOTES),
            max_line_length: Some(LEGACY_MAX_LINE_LENGTH),
            keep_terminators: true,
            sentinel: LEGACY_SENTINEL.to_owned(),
        }
    }

    /// Parses and validates a config from JSON
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// * `Error::Parse` - The input is not a JSON object of the expected shape
    /// * `Error::Invalid` - A bound or the sentinel is out of range
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
