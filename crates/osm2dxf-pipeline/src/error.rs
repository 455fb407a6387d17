//! Error types for the conversion pipeline.
//!
//! [`PipelineError`] is fatal and stops the run. [`PathError`] only skips
//! the path it names; the layer carries on with the next one.

use osm2dxf_drawing::DrawingError;
use osm2dxf_source::SourceError;
use thiserror::Error;

/// Structural failures that abort the conversion.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source holds no points, so no extent exists.
    #[error("Source contains no points; cannot compute an extent")]
    EmptyPointSet,

    /// Every point shares one longitude, so the scale is undefined.
    #[error("Degenerate extent: all points share longitude {longitude}; cannot derive a scale")]
    DegenerateScale { longitude: f64 },

    /// The configured drawing width cannot produce a scale.
    #[error("Invalid drawing width: {0}")]
    InvalidDrawingWidth(f64),

    /// The source could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The drawing could not be built or saved.
    #[error(transparent)]
    Drawing(#[from] DrawingError),
}

/// Reasons a single path is left out of its layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The `ele` tag is not a finite number.
    #[error("Path {path}: elevation '{value}' is not a number, skipping path")]
    InvalidElevation { path: String, value: String },

    /// Too few references resolved to form a polyline.
    #[error("Path {path}: only {resolved} of {referenced} points resolved, skipping path")]
    TooFewPoints {
        path: String,
        resolved: usize,
        referenced: usize,
    },
}

impl PathError {
    /// Identifier of the path that was skipped
    pub fn path_id(&self) -> &str {
        match self {
            Self::InvalidElevation { path, .. } | Self::TooFewPoints { path, .. } => path,
        }
    }
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
