//! Tag queries
//!
//! A tag query selects every path carrying a given tag key (any value) and
//! names the output layer those paths are drawn on.

use crate::error::{Error, Result};
use crate::model::Path;
use std::fmt;
use tracing::warn;

/// Single requested tag key and the layer it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    key: String,
    layer_name: String,
}

impl TagQuery {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let layer_name = key.to_uppercase();
        Self { key, layer_name }
    }

    /// Tag key as requested
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Output layer name, always the upper-cased key
    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    /// Whether `path` carries this key, ignoring ASCII case
    pub fn matches(&self, path: &Path) -> bool {
        path.has_tag_key(&self.key)
    }
}

impl fmt::Display for TagQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Parse a comma-separated tag list into queries, preserving order.
///
/// Blank entries are ignored. Keys that map to a layer name already taken
/// keep only their first occurrence, so each layer is created once.
pub fn parse_tag_list(input: &str) -> Result<Vec<TagQuery>> {
    let mut queries: Vec<TagQuery> = Vec::new();

    for raw in input.split(',') {
        let key = raw.trim();
        if key.is_empty() {
            warn!("Ignoring empty tag entry in '{}'", input);
            continue;
        }
        let query = TagQuery::new(key);
        if let Some(first) = queries.iter().find(|q| q.layer_name == query.layer_name) {
            warn!(
                "Tag '{}' maps to layer {} already used by '{}', keeping the first",
                key, query.layer_name, first.key
            );
            continue;
        }
        queries.push(query);
    }

    if queries.is_empty() {
        return Err(Error::EmptyTagList {
            input: input.to_string(),
        });
    }

    Ok(queries)
}
