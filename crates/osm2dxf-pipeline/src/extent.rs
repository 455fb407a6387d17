//! Extent and drawing frame
//!
//! The extent is the geographic bounding box of every point in the source,
//! regardless of which tag is being drawn. The drawing frame derived from it
//! fixes the uniform scale and the origin shared by all paths of a run.

use crate::error::{PipelineError, PipelineResult};
use crate::projection::project_latitude;
use osm2dxf_core::{GeoPoint, PlanarPoint, PointCache, ELEVATION_DIVISOR};
use std::fmt;

/// Geographic bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Extent {
    /// Bounding box of all points; an empty set has no extent.
    pub fn from_points(points: &PointCache) -> PipelineResult<Self> {
        let mut coords = points.values();
        let first = coords.next().ok_or(PipelineError::EmptyPointSet)?;

        let seed = Self {
            min_lon: first.lon,
            max_lon: first.lon,
            min_lat: first.lat,
            max_lat: first.lat,
        };

        Ok(coords.fold(seed, |acc, p| Self {
            min_lon: acc.min_lon.min(p.lon),
            max_lon: acc.max_lon.max(p.lon),
            min_lat: acc.min_lat.min(p.lat),
            max_lat: acc.max_lat.max(p.lat),
        }))
    }

    /// Longitude span in degrees
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.6}, {:.6}], [{:.6}, {:.6}]",
            self.min_lon, self.max_lon, self.min_lat, self.max_lat
        )
    }
}

/// Scale and origin mapping geographic coordinates onto the drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingFrame {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl DrawingFrame {
    /// Fit the extent's longitude span to `drawing_width` units.
    ///
    /// The x origin is the minimum longitude; the y origin is the projected
    /// minimum latitude.
    pub fn new(extent: &Extent, drawing_width: f64) -> PipelineResult<Self> {
        if !drawing_width.is_finite() || drawing_width <= 0.0 {
            return Err(PipelineError::InvalidDrawingWidth(drawing_width));
        }

        let scale = drawing_width / extent.width();
        if extent.width() <= 0.0 || !scale.is_finite() {
            return Err(PipelineError::DegenerateScale {
                longitude: extent.min_lon,
            });
        }

        Ok(Self {
            scale,
            origin_x: extent.min_lon,
            origin_y: project_latitude(extent.min_lat),
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Origin as (raw longitude, projected latitude)
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    pub fn planar_x(&self, lon: f64) -> f64 {
        (lon - self.origin_x) * self.scale
    }

    pub fn planar_y(&self, lat: f64) -> f64 {
        (project_latitude(lat) - self.origin_y) * self.scale
    }

    /// Planar vertex for a point at the given source elevation
    pub fn to_planar(&self, point: &GeoPoint, elevation: f64) -> PlanarPoint {
        PlanarPoint::new(
            self.planar_x(point.lon),
            self.planar_y(point.lat),
            elevation / ELEVATION_DIVISOR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osm2dxf_core::{NodeId, DEFAULT_DRAWING_WIDTH};

    fn cache(coords: &[(f64, f64)]) -> PointCache {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| (NodeId::new(i.to_string()), GeoPoint { lat, lon }))
            .collect()
    }

    #[test]
    fn test_extent_bounds() {
        let points = cache(&[(47.0, 8.2), (47.3, 8.0), (46.9, 8.5)]);
        let extent = Extent::from_points(&points).unwrap();
        assert_eq!(extent.min_lon, 8.0);
        assert_eq!(extent.max_lon, 8.5);
        assert_eq!(extent.min_lat, 46.9);
        assert_eq!(extent.max_lat, 47.3);
        assert_eq!(
            extent.to_string(),
            "[8.000000, 8.500000], [46.900000, 47.300000]"
        );
    }

    #[test]
    fn test_empty_point_set() {
        assert!(matches!(
            Extent::from_points(&PointCache::new()),
            Err(PipelineError::EmptyPointSet)
        ));
    }

    #[test]
    fn test_planar_x_spans_drawing_width() {
        let points = cache(&[(47.0, 8.0), (47.1, 8.5)]);
        let extent = Extent::from_points(&points).unwrap();
        let frame = DrawingFrame::new(&extent, DEFAULT_DRAWING_WIDTH).unwrap();

        assert_eq!(frame.planar_x(8.0), 0.0);
        assert_eq!(frame.planar_x(8.5), 500.0);
        assert_eq!(frame.scale(), 1000.0);
    }

    #[test]
    fn test_origin_uses_projected_latitude() {
        let points = cache(&[(47.0, 8.0), (47.1, 8.5)]);
        let extent = Extent::from_points(&points).unwrap();
        let frame = DrawingFrame::new(&extent, DEFAULT_DRAWING_WIDTH).unwrap();

        let (origin_x, origin_y) = frame.origin();
        assert_eq!(origin_x, 8.0);
        assert_eq!(origin_y, project_latitude(47.0));
        assert_eq!(frame.planar_y(47.0), 0.0);

        let expected = (project_latitude(47.1) - project_latitude(47.0)) * 1000.0;
        assert!((frame.planar_y(47.1) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_shared_longitude_is_degenerate() {
        let points = cache(&[(47.0, 8.0), (47.1, 8.0), (47.2, 8.0)]);
        let extent = Extent::from_points(&points).unwrap();
        assert!(matches!(
            DrawingFrame::new(&extent, DEFAULT_DRAWING_WIDTH),
            Err(PipelineError::DegenerateScale { longitude }) if longitude == 8.0
        ));
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let points = cache(&[(47.0, 8.0)]);
        let extent = Extent::from_points(&points).unwrap();
        assert!(DrawingFrame::new(&extent, DEFAULT_DRAWING_WIDTH).is_err());
    }

    #[test]
    fn test_invalid_width() {
        let points = cache(&[(47.0, 8.0), (47.1, 8.5)]);
        let extent = Extent::from_points(&points).unwrap();
        assert!(matches!(
            DrawingFrame::new(&extent, 0.0),
            Err(PipelineError::InvalidDrawingWidth(_))
        ));
    }

    #[test]
    fn test_elevation_divisor() {
        let points = cache(&[(47.0, 8.0), (47.1, 8.5)]);
        let extent = Extent::from_points(&points).unwrap();
        let frame = DrawingFrame::new(&extent, DEFAULT_DRAWING_WIDTH).unwrap();

        let vertex = frame.to_planar(&GeoPoint { lat: 47.0, lon: 8.0 }, 120.0);
        assert_eq!(vertex.z, 8.0);
    }
}
