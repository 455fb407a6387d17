//! Source map model
//!
//! Points (OSM nodes) and paths (OSM ways) as loaded from a map extract.
//! Paths reference points by identifier; coordinates are resolved through
//! a [`PointCache`] when a path is assembled.

use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Opaque point identifier, unique within one source
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point, rejecting coordinates the projection cannot handle.
    ///
    /// Latitude must lie strictly inside (-90, 90); the poles project to
    /// infinity. Longitude must lie within [-180, 180].
    pub fn new(id: &str, lat: f64, lon: f64) -> Result<Self> {
        let lat_ok = lat.is_finite() && lat > -90.0 && lat < 90.0;
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        if !lat_ok || !lon_ok {
            return Err(Error::InvalidCoordinate {
                id: id.to_string(),
                lat,
                lon,
            });
        }
        Ok(Self { lat, lon })
    }
}

/// Lookup from point identifier to coordinate
pub type PointCache = HashMap<NodeId, GeoPoint>;

/// Key/value annotation on a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered sequence of point references with tags (an OSM way)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    /// Source identifier of the path
    pub id: String,
    /// Point references in drawing order
    pub refs: Vec<NodeId>,
    /// Tags in source order
    pub tags: Vec<Tag>,
}

impl Path {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Value of the first tag with exactly this key
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
    }

    /// Whether any tag key equals `key`, ignoring ASCII case
    pub fn has_tag_key(&self, key: &str) -> bool {
        self.tags.iter().any(|tag| tag.key.eq_ignore_ascii_case(key))
    }

    /// Whether the first and last references name the same point.
    ///
    /// Compares the references as written in the source, before any
    /// coordinate lookup takes place.
    pub fn is_ring(&self) -> bool {
        match (self.refs.first(), self.refs.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}
