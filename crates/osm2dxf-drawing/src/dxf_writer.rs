//! DXF export backend
//!
//! Builds an in-memory `dxf::Drawing` and writes it out on [`DrawingWriter::save`].
//! Each polyline becomes an LWPOLYLINE: vertices carry x/y, the flat per-path
//! z becomes the entity elevation, and rings set the closed flag.

use crate::error::{DrawingError, DrawingResult};
use crate::DrawingWriter;
use dxf::entities::{Entity, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use dxf::tables::Layer;
use dxf::{Drawing, LwPolylineVertex};
use osm2dxf_core::{DxfVersion, Polyline};
use std::path::Path;
use tracing::debug;

/// Drawing writer producing DXF files
pub struct DxfDrawingWriter {
    drawing: Drawing,
    layers: Vec<String>,
    polylines: usize,
}

impl DxfDrawingWriter {
    pub fn new(version: DxfVersion) -> Self {
        let mut drawing = Drawing::new();
        drawing.header.version = acad_version(version);
        Self {
            drawing,
            layers: Vec::new(),
            polylines: 0,
        }
    }

    /// Names of the layers created so far, in creation order
    pub fn layer_names(&self) -> &[String] {
        &self.layers
    }

    /// Number of polylines added across all layers
    pub fn polyline_count(&self) -> usize {
        self.polylines
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }
}

impl Default for DxfDrawingWriter {
    fn default() -> Self {
        Self::new(DxfVersion::default())
    }
}

impl DrawingWriter for DxfDrawingWriter {
    fn create_layer(&mut self, name: &str) -> DrawingResult<()> {
        if self.layers.iter().any(|layer| layer == name) {
            return Err(DrawingError::DuplicateLayer(name.to_string()));
        }

        self.drawing.add_layer(Layer {
            name: name.to_string(),
            ..Default::default()
        });
        self.layers.push(name.to_string());
        debug!("Created layer {}", name);
        Ok(())
    }

    fn add_polyline(&mut self, layer: &str, polyline: &Polyline) -> DrawingResult<()> {
        if !self.layers.iter().any(|l| l == layer) {
            return Err(DrawingError::UnknownLayer(layer.to_string()));
        }

        let mut lwpolyline = LwPolyline::default();
        lwpolyline.vertices = polyline
            .vertices
            .iter()
            .map(|v| LwPolylineVertex {
                x: v.x,
                y: v.y,
                ..Default::default()
            })
            .collect();
        lwpolyline.set_is_closed(polyline.closed);

        let mut entity = Entity::new(EntityType::LwPolyline(lwpolyline));
        entity.common.layer = layer.to_string();
        entity.common.elevation = polyline.z();
        self.drawing.add_entity(entity);
        self.polylines += 1;
        Ok(())
    }

    fn save(&mut self, target: &Path) -> DrawingResult<()> {
        self.drawing
            .save_file(target)
            .map_err(|e| DrawingError::Save {
                path: target.to_path_buf(),
                message: e.to_string(),
            })?;
        debug!(
            "Saved {} layers, {} polylines to {}",
            self.layers.len(),
            self.polylines,
            target.display()
        );
        Ok(())
    }
}

fn acad_version(version: DxfVersion) -> AcadVersion {
    match version {
        DxfVersion::R14 => AcadVersion::R14,
        DxfVersion::R2000 => AcadVersion::R2000,
        DxfVersion::R2004 => AcadVersion::R2004,
        DxfVersion::R2007 => AcadVersion::R2007,
        DxfVersion::R2010 => AcadVersion::R2010,
        DxfVersion::R2013 => AcadVersion::R2013,
        DxfVersion::R2018 => AcadVersion::R2018,
    }
}
