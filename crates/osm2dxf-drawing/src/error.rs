//! Error types for the drawing crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or saving a drawing.
#[derive(Error, Debug)]
pub enum DrawingError {
    /// A polyline was added to a layer that was never created.
    #[error("Unknown layer: {0}")]
    UnknownLayer(String),

    /// A layer with the same name already exists.
    #[error("Layer already exists: {0}")]
    DuplicateLayer(String),

    /// The drawing could not be written to its target.
    #[error("Failed to save drawing to '{}': {message}", path.display())]
    Save { path: PathBuf, message: String },
}

/// Result type alias for drawing operations.
pub type DrawingResult<T> = Result<T, DrawingError>;
