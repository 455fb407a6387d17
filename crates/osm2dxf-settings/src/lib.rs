//! osm2dxf Settings Crate
//!
//! Handles configuration files: discovery, loading and validation.

pub mod config;
pub mod error;

pub use config::{Config, DrawingSettings, CONFIG_ENV_VAR};
pub use error::{SettingsError, SettingsResult};
