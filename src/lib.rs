//! # osm2dxf
//!
//! Converts OpenStreetMap XML extracts into layered DXF drawings that CAD
//! and CAM tools can import.
//!
//! ## Architecture
//!
//! osm2dxf is organized as a workspace with multiple crates:
//!
//! 1. **osm2dxf-core** - Geographic and planar model types, tag queries
//! 2. **osm2dxf-source** - OpenStreetMap XML loading
//! 3. **osm2dxf-pipeline** - Projection, extent, path assembly, layer grouping
//! 4. **osm2dxf-drawing** - DXF drawing output
//! 5. **osm2dxf-settings** - Optional configuration file
//! 6. **osm2dxf** - Command-line binary that integrates all crates
//!
//! Every requested tag becomes one upper-cased layer. Every way carrying the
//! tag becomes one polyline on that layer, projected onto a shared frame
//! whose longitude extent spans the configured drawing width.

use anyhow::Context;
use std::path::Path;
use tracing::info;

pub use osm2dxf_core::{parse_tag_list, DxfVersion, TagQuery};
pub use osm2dxf_drawing::{output_path_for, DrawingWriter, DxfDrawingWriter};
pub use osm2dxf_pipeline::{ConversionOptions, ConversionSummary, Converter, LayerReport};
pub use osm2dxf_settings::{Config, DrawingSettings};
pub use osm2dxf_source::{OsmDocument, SourceModel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, INFO when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Filter built from `RUST_LOG` directives, falling back to INFO when they
/// are unset, blank or unparseable
fn log_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Convert `source` into `<source>.dxf`, one layer per entry of `tags`.
///
/// `tags` is a comma-separated list of tag keys. Nothing is written when
/// any tag hits a structural error.
pub fn run(source: &Path, tags: &str, config: &Config) -> anyhow::Result<ConversionSummary> {
    config.validate().context("Invalid configuration")?;

    let queries = parse_tag_list(tags).context("Invalid tag list")?;
    let target = output_path_for(source);
    let keys: Vec<&str> = queries.iter().map(TagQuery::key).collect();
    info!(
        "generating {} from {} with tags {:?}...",
        target.display(),
        source.display(),
        keys
    );

    let document = OsmDocument::open(source)
        .with_context(|| format!("Failed to load {}", source.display()))?;

    let options = ConversionOptions {
        drawing_width: config.drawing.width,
    };
    let converter = Converter::new(&document, options);
    let mut writer = DxfDrawingWriter::new(config.drawing.dxf_version);

    let summary = converter
        .convert_to_file(&queries, &mut writer, &target)
        .with_context(|| format!("Failed to convert {}", source.display()))?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_bare_level() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }
}
