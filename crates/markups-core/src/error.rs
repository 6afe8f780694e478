//! Error types for markups-rs.

use thiserror::Error;

/// The main error type for markups-rs operations.
#[derive(Error, Debug)]
pub enum MarkupsError {
    /// A ray of an angle has zero (or non-finite) length, so its direction is undefined.
    #[error("degenerate angle input: ray {ray} has length {length}")]
    DegenerateInput {
        /// Which ray failed (1 or 2).
        ray: u8,
        /// The measured length of the ray vector.
        length: f64,
    },

    /// A label format string could not be parsed.
    #[error("invalid label format '{format}': {reason}")]
    InvalidLabelFormat {
        /// The offending format string.
        format: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A representation factory is already registered for this markup kind.
    #[error("representation for markup kind '{0}' already registered")]
    RepresentationExists(String),

    /// No representation factory is registered for this markup kind.
    #[error("no representation registered for markup kind '{0}'")]
    UnknownMarkupKind(String),

    /// A control point index is outside the markup.
    #[error("control point {index} out of range (markup has {count})")]
    ControlPointOutOfRange { index: usize, count: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for markups-rs operations.
pub type Result<T> = std::result::Result<T, MarkupsError>;
