//! Planar drawing geometry
//!
//! Output of the projection pipeline and input to drawing backends.

/// Projected, scaled and translated vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Polyline ready to be placed on a drawing layer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    /// Vertices in drawing order
    pub vertices: Vec<PlanarPoint>,
    /// Whether the last vertex connects back to the first
    pub closed: bool,
    /// Elevation read from the source, before unit conversion
    pub elevation: f64,
}

impl Polyline {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Flat z value shared by every vertex, if any
    pub fn z(&self) -> f64 {
        self.vertices.first().map(|v| v.z).unwrap_or(0.0)
    }
}
