//! # osm2dxf Drawing
//!
//! Writers that turn layered polylines into a drawing file.
//!
//! The pipeline only talks to the [`DrawingWriter`] trait; [`DxfDrawingWriter`]
//! is the backend used by the command line tool.

pub mod dxf_writer;
pub mod error;

pub use dxf_writer::DxfDrawingWriter;
pub use error::{DrawingError, DrawingResult};

use osm2dxf_core::{Polyline, OUTPUT_EXTENSION};
use std::path::{Path, PathBuf};

/// Destination for layered polylines
pub trait DrawingWriter {
    /// Create an empty named layer
    fn create_layer(&mut self, name: &str) -> DrawingResult<()>;

    /// Add one polyline to an existing layer
    fn add_polyline(&mut self, layer: &str, polyline: &Polyline) -> DrawingResult<()>;

    /// Persist the whole drawing to `target`
    fn save(&mut self, target: &Path) -> DrawingResult<()>;
}

/// Output path for a source file: the drawing extension is appended, never
/// substituted, so `city.osm` becomes `city.osm.dxf`.
pub fn output_path_for(source: &Path) -> PathBuf {
    let mut name = source.as_os_str().to_owned();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}
