//! Configuration management for osm2dxf
//!
//! Configuration is optional. When present it is read from TOML or JSON,
//! chosen by file extension, and validated before use.
//!
//! Lookup order:
//! - the file named by the `OSM2DXF_CONFIG` environment variable
//! - `<config dir>/osm2dxf/config.toml`, if it exists
//! - built-in defaults

use crate::error::{SettingsError, SettingsResult};
use osm2dxf_core::{DxfVersion, DEFAULT_DRAWING_WIDTH};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "OSM2DXF_CONFIG";

/// Drawing output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Width in drawing units spanned by the longitude extent
    pub width: f64,
    /// DXF dialect written to the output file
    pub dxf_version: DxfVersion,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_DRAWING_WIDTH,
            dxf_version: DxfVersion::default(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub drawing: DrawingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-user config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("osm2dxf").join("config.toml"))
    }

    /// Load the configuration using the standard lookup order
    pub fn load() -> SettingsResult<Self> {
        match Self::resolve_path(std::env::var_os(CONFIG_ENV_VAR), Self::default_path()) {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Pick the config file to read, if any.
    ///
    /// An explicit path always wins, even if it does not exist, so that a
    /// mistyped path fails loudly instead of silently falling back.
    pub fn resolve_path(explicit: Option<OsString>, default: Option<PathBuf>) -> Option<PathBuf> {
        match explicit {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => default.filter(|path| path.is_file()),
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let width = self.drawing.width;
        if !width.is_finite() || width <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "drawing.width".to_string(),
                reason: format!("must be a finite number > 0, got {}", width),
            });
        }
        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.drawing.width, 500.0);
        assert_eq!(config.drawing.dxf_version, DxfVersion::R2018);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[drawing]\nwidth = 750.0\n").unwrap();
        assert_eq!(config.drawing.width, 750.0);
        assert_eq!(config.drawing.dxf_version, DxfVersion::R2018);

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_width() {
        let mut config = Config::new();
        config.drawing.width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { ref key, .. }) if key == "drawing.width"
        ));

        config.drawing.width = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let resolved = Config::resolve_path(
            Some(OsString::from("/etc/osm2dxf.toml")),
            Some(PathBuf::from("/nonexistent/config.toml")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/etc/osm2dxf.toml")));
    }

    #[test]
    fn test_resolve_skips_missing_default() {
        let resolved =
            Config::resolve_path(None, Some(PathBuf::from("/nonexistent/osm2dxf/config.toml")));
        assert_eq!(resolved, None);

        let resolved = Config::resolve_path(Some(OsString::new()), None);
        assert_eq!(resolved, None);
    }
}
