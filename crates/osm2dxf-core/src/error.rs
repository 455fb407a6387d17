//! Error handling for the core model
//!
//! Errors raised while constructing model values from raw input.

use thiserror::Error;

/// Core model error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A point's coordinates are outside the projectable range
    #[error("Invalid coordinate for point {id}: lat={lat}, lon={lon}")]
    InvalidCoordinate {
        /// The offending point identifier.
        id: String,
        /// The latitude read from the source.
        lat: f64,
        /// The longitude read from the source.
        lon: f64,
    },

    /// The requested tag list contains no usable keys
    #[error("No tags requested in '{input}'")]
    EmptyTagList {
        /// The raw tag list as given by the caller.
        input: String,
    },
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
