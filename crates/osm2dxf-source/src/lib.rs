//! # osm2dxf Source
//!
//! Loads map extracts into the core model and answers tag queries over them.
//!
//! The [`SourceModel`] trait is the seam the conversion pipeline reads from;
//! [`OsmDocument`] implements it for OpenStreetMap XML files.

pub mod error;
pub mod osm;

pub use error::{SourceError, SourceResult};
pub use osm::OsmDocument;

use osm2dxf_core::{Path, PointCache, TagQuery};

/// Read access to a loaded map extract
pub trait SourceModel {
    /// Every point in the source, keyed by identifier
    fn points(&self) -> &PointCache;

    /// Paths carrying the query's key, in source order
    fn paths_with_tag(&self, query: &TagQuery) -> Vec<&Path>;
}
