//! Reading note files
//!
//! A note file is plain text with one note per line. This module turns a
//! file into an ordered list of notes, enforcing whatever bounds the
//! [`NotesConfig`] carries. Storing the result is left to
//! [`NoteStore`](crate::store::NoteStore).

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::NotesConfig;

/// Why a note file could not be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenErrorKind {
    /// No file exists at the path
    NotFound,
    /// The file exists but may not be read
    PermissionDenied,
    /// Any other I/O failure
    Io,
}

impl From<io::ErrorKind> for OpenErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io,
        }
    }
}

/// Errors that can occur while loading a note file
///
/// None of these are fatal: the store a load was aimed at is left exactly
/// as it was before the call.
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened
    #[error("cannot open note file {}: {source}", path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Classified cause
        kind: OpenErrorKind,
        /// Underlying I/O error
        source: io::Error,
    },
    /// Loading the file would push the store past its note limit
    #[error("note file {} does not fit: the store holds at most {limit} notes", path.display())]
    CapacityExceeded {
        /// Path of the rejected file
        path: PathBuf,
        /// Configured maximum note count
        limit: usize,
    },
    /// A line is longer than the configured maximum
    ///
    /// The line is rejected as soon as it passes the limit, so its full
    /// length is never measured.
    #[error("line {line} of {} is over the {limit} byte limit", path.display())]
    LineTooLong {
        /// Path of the rejected file
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// Configured maximum line length
        limit: usize,
    },
}

impl Error {
    /// Returns the open failure classification, if this is an open error
    pub fn open_kind(&self) -> Option<OpenErrorKind> {
        match self {
            Self::Open { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Length of a raw line once its `\n` or `\r\n` terminator is removed
fn content_length(line: &[u8]) -> usize {
    match line {
        [.., b'\r', b'\n'] => line.len() - 2,
        [.., b'\n'] => line.len() - 1,
        _ => line.len(),
    }
}

/// Reads every note from a file
///
/// A line is everything up to and including a `\n`, or up to end of file
/// for an unterminated last line. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD. A read error part way through ends the file at
/// that point: the notes read so far are returned and a warning is logged.
///
/// # Arguments
///
/// * `path` - The note file to read
/// * `config` - Bounds and terminator handling
/// * `held` - Number of notes already in the destination store, counted
///   against `config.max_notes`
///
/// # Errors
///
/// * `Error::Open` - The file could not be opened
/// * `Error::CapacityExceeded` - `held` plus the file's notes exceed `max_notes`
/// * `Error::LineTooLong` - A line exceeds `max_line_length`
pub fn read_notes(path: &Path, config: &NotesConfig, held: usize) -> Result<Vec<String>, Error> {
    let file = File::open(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "cannot open note file");
        Error::Open {
            path: path.to_owned(),
            kind: source.kind().into(),
            source,
        }
    })?;

    let notes = collect_notes(BufReader::new(file), path, config, held)?;
    debug!(path = %path.display(), count = notes.len(), "read note file");
    Ok(notes)
}

/// Number of bytes to read for one line when lines are bounded
///
/// Leaves room for a `\r\n` terminator, so a line that fills the whole
/// window without ending in `\n` is over the limit.
fn line_window(limit: usize) -> u64 {
    u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(2)
}

/// Splits an open note source into notes, see [`read_notes`]
fn collect_notes<R: BufRead>(
    mut reader: R,
    path: &Path,
    config: &NotesConfig,
    held: usize,
) -> Result<Vec<String>, Error> {
    let room = config.max_notes.map(|limit| limit.saturating_sub(held));
    let mut notes = Vec::new();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        let read = match config.max_line_length {
            Some(limit) => reader
                .by_ref()
                .take(line_window(limit))
                .read_until(b'\n', &mut buffer),
            None => reader.read_until(b'\n', &mut buffer),
        };
        match read {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                warn!(
                    path = %path.display(),
                    line = notes.len() + 1,
                    %error,
                    "note file read interrupted"
                );
                break;
            }
        }

        if let Some(limit) = config.max_line_length {
            if content_length(&buffer) > limit {
                return Err(Error::LineTooLong {
                    path: path.to_owned(),
                    line: notes.len() + 1,
                    limit,
                });
            }
        }
        if room.is_some_and(|room| notes.len() >= room) {
            return Err(Error::CapacityExceeded {
                path: path.to_owned(),
                limit: config.max_notes.unwrap_or_default(),
            });
        }

        if !config.keep_terminators {
            buffer.truncate(content_length(&buffer));
        }
        notes.push(String::from_utf8_lossy(&buffer).into_owned());
    }

    Ok(notes)
}
