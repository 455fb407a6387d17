//! Error types for the source crate.
//!
//! Every variant is structural: a source that fails to load aborts the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a map extract.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source file could not be opened.
    #[error("Failed to open source '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The XML stream is malformed.
    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// A required attribute is absent from an element.
    #[error("<{element}> {id} is missing attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        id: String,
    },

    /// A numeric attribute could not be parsed.
    #[error("<{element}> {id} has non-numeric {attribute}='{value}'")]
    InvalidNumber {
        element: &'static str,
        attribute: &'static str,
        id: String,
        value: String,
    },

    /// A loaded value violates a model constraint.
    #[error(transparent)]
    Model(#[from] osm2dxf_core::Error),
}

/// Result type alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;
