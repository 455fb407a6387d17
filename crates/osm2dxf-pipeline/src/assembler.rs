//! Path assembly
//!
//! Turns one source path into a planar polyline: resolves each point
//! reference through the point cache, projects it with the active
//! [`DrawingFrame`], attaches the path's elevation and marks rings.
//!
//! Missing references only drop the affected vertex. A bad elevation or a
//! path left with fewer than two vertices drops the whole path.

use crate::error::PathError;
use crate::extent::DrawingFrame;
use osm2dxf_core::{NodeId, Path, PointCache, Polyline, ELEVATION_TAG};
use tracing::warn;

/// Polyline built from one source path, with its diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledPath {
    /// Identifier of the source path
    pub path_id: String,
    pub polyline: Polyline,
    /// Number of point references in the source path
    pub source_vertex_count: usize,
    /// References that were not found in the point cache, in path order
    pub missing: Vec<NodeId>,
}

impl AssembledPath {
    pub fn is_closed(&self) -> bool {
        self.polyline.closed
    }

    pub fn elevation(&self) -> f64 {
        self.polyline.elevation
    }
}

/// Builds polylines for paths against one point cache and frame
pub struct PathAssembler<'a> {
    frame: &'a DrawingFrame,
    points: &'a PointCache,
}

impl<'a> PathAssembler<'a> {
    pub fn new(frame: &'a DrawingFrame, points: &'a PointCache) -> Self {
        Self { frame, points }
    }

    pub fn assemble(&self, path: &Path) -> Result<AssembledPath, PathError> {
        let elevation = parse_elevation(path)?;

        let mut vertices = Vec::with_capacity(path.refs.len());
        let mut missing = Vec::new();

        for node_ref in &path.refs {
            match self.points.get(node_ref) {
                Some(point) => vertices.push(self.frame.to_planar(point, elevation)),
                None => {
                    warn!(
                        "Point {} referenced by path {} not found in point cache, skipping point",
                        node_ref, path.id
                    );
                    missing.push(node_ref.clone());
                }
            }
        }

        if vertices.len() < 2 {
            return Err(PathError::TooFewPoints {
                path: path.id.clone(),
                resolved: vertices.len(),
                referenced: path.refs.len(),
            });
        }

        Ok(AssembledPath {
            path_id: path.id.clone(),
            polyline: Polyline {
                vertices,
                // Decided on the references as written, before any were dropped.
                closed: path.is_ring(),
                elevation,
            },
            source_vertex_count: path.refs.len(),
            missing,
        })
    }
}

/// Elevation carried by the path's first `ele` tag, or 0.0 without one.
pub fn parse_elevation(path: &Path) -> Result<f64, PathError> {
    let Some(raw) = path.tag(ELEVATION_TAG) else {
        return Ok(0.0);
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PathError::InvalidElevation {
            path: path.id.clone(),
            value: raw.to_string(),
        }),
    }
}
