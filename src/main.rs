use clap::Parser;
use osm2dxf::{init_logging, run, Config, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::{debug, info};

/// Convert an OpenStreetMap XML extract into a layered DXF drawing
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// OpenStreetMap XML file; the drawing is written next to it as <SOURCE>.dxf
    source: PathBuf,

    /// Comma-separated tag keys, one layer each (e.g. "highway,building")
    tags: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging()?;
    debug!("osm2dxf {} (built {})", VERSION, BUILD_DATE);

    let config = Config::load()?;
    let summary = run(&args.source, &args.tags, &config)?;

    info!(
        "{} polylines written, {} paths skipped",
        summary.total_written(),
        summary.total_skipped()
    );

    Ok(())
}
