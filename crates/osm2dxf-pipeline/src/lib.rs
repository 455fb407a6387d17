//! # osm2dxf Pipeline
//!
//! The geodata-to-drawing transformation:
//!
//! - **Projection**: latitude to planar y on a conformal cylindrical projection
//! - **Extent**: bounding box over every loaded point, plus the derived
//!   [`DrawingFrame`] holding scale and origin
//! - **Assembler**: resolves a path's point references into planar vertices,
//!   detects rings and attaches elevation
//! - **Grouper**: collects assembled paths for one tag into a layer
//! - **Converter**: drives the stages once per requested tag and hands each
//!   layer to a drawing writer

pub mod assembler;
pub mod converter;
pub mod error;
pub mod extent;
pub mod grouper;
pub mod projection;

pub use assembler::{AssembledPath, PathAssembler};
pub use converter::{ConversionOptions, ConversionSummary, Converter};
pub use error::{PathError, PipelineError, PipelineResult};
pub use extent::{DrawingFrame, Extent};
pub use grouper::{Layer, LayerGrouper, LayerReport};
pub use projection::project_latitude;
