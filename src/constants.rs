//! Configuration constants for the Seisen note provider
//!
//! This module contains the limits and defaults used when loading notes,
//! picking them, and bootstrapping a note library on disk.

/// Note store configuration constants
pub mod notes {
    /// Fallback text returned when no note is loaded
    pub const DEFAULT_SENTINEL: &str = "No note available";
    /// Fallback text used by the legacy configuration
    pub const LEGACY_SENTINEL: &str = "Aucune note disponible";
    /// Number of notes the legacy configuration accepts
    pub const LEGACY_MAX_NOTES: usize = 100;
    /// Line length in bytes (terminator excluded) the legacy configuration accepts
    pub const LEGACY_MAX_LINE_LENGTH: usize = 255;
    /// Largest note count that may be configured as a bound
    pub const MAX_NOTES_LIMIT: usize = 1_000_000;
    /// Largest line length in bytes that may be configured as a bound
    pub const MAX_LINE_LENGTH_LIMIT: usize = 65_536;
    /// Maximum length of a configured sentinel in characters
    pub const MAX_SENTINEL_LENGTH: usize = 200;
}

/// Note library configuration constants
pub mod library {
    /// Extension of every category file
    pub const FILE_EXTENSION: &str = "txt";
    /// Category selected when none is given
    pub const DEFAULT_CATEGORY: &str = "sensei_notes";
    /// Categories bootstrapped with sample notes
    pub const DEFAULT_CATEGORIES: [&str; 6] = ["sensei_notes", "samurai", "zen", "42", "life", "custom"];
}
