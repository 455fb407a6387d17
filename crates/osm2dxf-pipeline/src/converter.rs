//! Conversion driver
//!
//! Runs extent, assembly and grouping once per tag query, in the caller's
//! order, and hands every layer to a [`DrawingWriter`]. The drawing is only
//! saved after every tag succeeded, so a fatal error leaves no output file.

use crate::assembler::PathAssembler;
use crate::error::PipelineResult;
use crate::extent::{DrawingFrame, Extent};
use crate::grouper::{Layer, LayerGrouper, LayerReport};
use osm2dxf_core::{TagQuery, DEFAULT_DRAWING_WIDTH};
use osm2dxf_drawing::DrawingWriter;
use osm2dxf_source::SourceModel;
use std::path::Path;
use tracing::info;

/// Tunables for a conversion run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOptions {
    /// Width in drawing units spanned by the source's longitude extent
    pub drawing_width: f64,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            drawing_width: DEFAULT_DRAWING_WIDTH,
        }
    }
}

/// Outcome of a conversion, one report per requested tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub layers: Vec<LayerReport>,
}

impl ConversionSummary {
    pub fn total_written(&self) -> usize {
        self.layers.iter().map(|l| l.written).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.layers.iter().map(|l| l.skipped).sum()
    }

    pub fn layer(&self, name: &str) -> Option<&LayerReport> {
        self.layers.iter().find(|l| l.layer == name)
    }
}

/// Conversion context for one source
pub struct Converter<'a, S: SourceModel + ?Sized> {
    source: &'a S,
    options: ConversionOptions,
}

impl<'a, S: SourceModel + ?Sized> Converter<'a, S> {
    pub fn new(source: &'a S, options: ConversionOptions) -> Self {
        Self { source, options }
    }

    /// Frame derived from the extent of every point in the source.
    ///
    /// The extent is not narrowed to the paths of any tag, so every layer
    /// of a run shares the same scale and origin.
    pub fn frame(&self) -> PipelineResult<DrawingFrame> {
        let extent = Extent::from_points(self.source.points())?;
        info!("Rectangle: {}", extent);
        DrawingFrame::new(&extent, self.options.drawing_width)
    }

    /// Assemble the layer for one tag query
    pub fn build_layer(&self, query: &TagQuery) -> PipelineResult<Layer> {
        let frame = self.frame()?;
        let points = self.source.points();
        info!(
            "found {} nodes for {}, cached them",
            points.len(),
            query.layer_name()
        );

        let paths = self.source.paths_with_tag(query);
        info!("found {} paths", paths.len());

        let grouper = LayerGrouper::new(PathAssembler::new(&frame, points), points.len());
        Ok(grouper.group(query, &paths))
    }

    /// Build and write a layer for every query, in order.
    ///
    /// Stops at the first structural error.
    pub fn convert(
        &self,
        queries: &[TagQuery],
        writer: &mut dyn DrawingWriter,
    ) -> PipelineResult<ConversionSummary> {
        let mut summary = ConversionSummary::default();

        for query in queries {
            let layer = self.build_layer(query)?;
            layer.write_to(writer)?;

            let report = layer.report();
            info!("{}", report);
            summary.layers.push(report);
        }

        Ok(summary)
    }

    /// Convert every query, then save the drawing to `target`
    pub fn convert_to_file(
        &self,
        queries: &[TagQuery],
        writer: &mut dyn DrawingWriter,
        target: &Path,
    ) -> PipelineResult<ConversionSummary> {
        let summary = self.convert(queries, writer)?;

        info!("Saving file...");
        writer.save(target)?;
        info!("Done.");

        Ok(summary)
    }
}
