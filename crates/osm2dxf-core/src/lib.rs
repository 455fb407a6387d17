//! # osm2dxf Core
//!
//! Core types shared by every osm2dxf crate:
//! - The source map model (points, paths, tags)
//! - Tag queries that select paths and name output layers
//! - Planar geometry handed from the pipeline to the drawing backends
//! - The core error type

pub mod constants;
pub mod error;
pub mod format;
pub mod model;
pub mod planar;
pub mod query;

pub use constants::{DEFAULT_DRAWING_WIDTH, ELEVATION_DIVISOR, ELEVATION_TAG, OUTPUT_EXTENSION};
pub use error::{Error, Result};
pub use format::DxfVersion;
pub use model::{GeoPoint, NodeId, Path, PointCache, Tag};
pub use planar::{PlanarPoint, Polyline};
pub use query::{parse_tag_list, TagQuery};
