//! Fixed conversion constants

/// Target width of the drawing, in drawing units, spanned by the longitude extent.
pub const DEFAULT_DRAWING_WIDTH: f64 = 500.0;

/// Divisor mapping an `ele` tag value onto the drawing's z unit.
pub const ELEVATION_DIVISOR: f64 = 15.0;

/// Tag key carrying a path's elevation.
pub const ELEVATION_TAG: &str = "ele";

/// Extension appended to the source filename to name the output drawing.
pub const OUTPUT_EXTENSION: &str = "dxf";
