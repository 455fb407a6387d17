//! Layer grouping
//!
//! Collects the assembled paths of one tag query into a named layer and
//! writes that layer to a drawing writer.

use crate::assembler::{AssembledPath, PathAssembler};
use crate::error::{PathError, PipelineResult};
use osm2dxf_core::{Path, TagQuery};
use osm2dxf_drawing::DrawingWriter;
use std::fmt;
use tracing::{info, warn};

/// Per-layer counts reported after a tag query is processed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerReport {
    /// Output layer name
    pub layer: String,
    /// Points available for lookup while building the layer
    pub points_scanned: usize,
    /// Paths carrying the requested tag
    pub paths_found: usize,
    /// Polylines placed on the layer
    pub written: usize,
    /// Paths left out of the layer
    pub skipped: usize,
    /// Point references that could not be resolved across the layer
    pub missing_points: usize,
}

impl fmt::Display for LayerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} paths found, {} written, {} skipped, {} missing points ({} points cached)",
            self.layer,
            self.paths_found,
            self.written,
            self.skipped,
            self.missing_points,
            self.points_scanned
        )
    }
}

/// Polylines for one tag query, ready for a drawing writer
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub paths: Vec<AssembledPath>,
    /// Paths that could not be assembled, with the reason
    pub skipped: Vec<PathError>,
    pub points_scanned: usize,
}

impl Layer {
    pub fn report(&self) -> LayerReport {
        LayerReport {
            layer: self.name.clone(),
            points_scanned: self.points_scanned,
            paths_found: self.paths.len() + self.skipped.len(),
            written: self.paths.len(),
            skipped: self.skipped.len(),
            missing_points: self.paths.iter().map(|p| p.missing.len()).sum(),
        }
    }

    /// Create the layer on `writer` and add every polyline to it.
    ///
    /// The layer is created even when it holds no polylines.
    pub fn write_to(&self, writer: &mut dyn DrawingWriter) -> PipelineResult<()> {
        writer.create_layer(&self.name)?;

        for path in &self.paths {
            writer.add_polyline(&self.name, &path.polyline)?;
            info!(
                "Writing {}path for layer {} with elevation={}m, {} nodes",
                if path.is_closed() { "closed " } else { "" },
                self.name,
                path.elevation() as i64,
                path.source_vertex_count
            );
        }
        Ok(())
    }
}

/// Groups paths for a tag query into a [`Layer`]
pub struct LayerGrouper<'a> {
    assembler: PathAssembler<'a>,
    points_scanned: usize,
}

impl<'a> LayerGrouper<'a> {
    pub fn new(assembler: PathAssembler<'a>, points_scanned: usize) -> Self {
        Self {
            assembler,
            points_scanned,
        }
    }

    /// Assemble `paths` in the given order into the query's layer.
    ///
    /// Paths that fail to assemble are reported and left out; they never
    /// stop the remaining paths from being processed.
    pub fn group(&self, query: &TagQuery, paths: &[&Path]) -> Layer {
        let mut layer = Layer {
            name: query.layer_name().to_string(),
            paths: Vec::with_capacity(paths.len()),
            skipped: Vec::new(),
            points_scanned: self.points_scanned,
        };

        for path in paths {
            match self.assembler.assemble(path) {
                Ok(assembled) => layer.paths.push(assembled),
                Err(err) => {
                    warn!("Layer {}: {}", layer.name, err);
                    layer.skipped.push(err);
                }
            }
        }

        layer
    }
}
