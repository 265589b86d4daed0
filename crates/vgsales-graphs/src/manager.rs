//! Graph manager rendering every dashboard chart for one set of datasets.

use crate::{
    CategoryBarChart, ChartKind, ChartRenderer, CriticScoreChart, GenreRegionChart, GraphConfig,
    SalesOverTimeChart, StyleConfig,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use vgsales_common::{Result, VgSalesError};
use vgsales_config::{GraphsConfig, ImageFormat};
use vgsales_data::ChartDatasets;

/// Where a rendered chart ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderedImage {
    /// PNG written to disk.
    File(PathBuf),
    /// SVG markup held in memory.
    Svg(String),
}

/// One chart of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedChart {
    /// Which chart this is.
    pub kind: ChartKind,
    /// The rendered output.
    pub image: RenderedImage,
}

/// Renders the five charts with a shared size and style.
#[derive(Debug, Clone)]
pub struct GraphManager {
    width: u32,
    height: u32,
    style: StyleConfig,
}

impl GraphManager {
    /// Creates a manager from the `graphs` configuration section.
    pub fn new(config: &GraphsConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            style: StyleConfig::from(config),
        }
    }

    /// Titles, labels and style of one chart.
    pub fn graph_config(&self, kind: ChartKind) -> GraphConfig {
        GraphConfig::for_chart(kind, self.width, self.height, self.style.clone())
    }

    /// Renders all charts in page order.
    ///
    /// PNG output is written into `out_dir`, which is created if missing;
    /// SVG output stays in memory and `out_dir` is unused.
    #[instrument(skip(self, datasets, out_dir), fields(out_dir = %out_dir.display()))]
    pub fn render_all(
        &self,
        datasets: &ChartDatasets,
        format: ImageFormat,
        out_dir: &Path,
    ) -> Result<Vec<RenderedChart>> {
        if format == ImageFormat::Png {
            fs::create_dir_all(out_dir).map_err(|e| {
                VgSalesError::graph_with_source(
                    format!("Failed to create output directory '{}'", out_dir.display()),
                    e,
                )
            })?;
        }

        let charts = ChartKind::ALL
            .into_iter()
            .map(|kind| {
                let image = self.render(kind, datasets, format, out_dir)?;
                Ok(RenderedChart { kind, image })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count = charts.len(), "Rendered dashboard charts");
        Ok(charts)
    }

    /// Renders a single chart from its dataset.
    pub fn render(
        &self,
        kind: ChartKind,
        datasets: &ChartDatasets,
        format: ImageFormat,
        out_dir: &Path,
    ) -> Result<RenderedImage> {
        match kind {
            ChartKind::SalesOverTime => self.output(
                kind,
                &SalesOverTimeChart,
                datasets.sales_over_time.as_slice(),
                format,
                out_dir,
            ),
            ChartKind::PlatformTotals => self.output(
                kind,
                &CategoryBarChart::platforms(),
                datasets.platform_totals.as_slice(),
                format,
                out_dir,
            ),
            ChartKind::GenreTotals => self.output(
                kind,
                &CategoryBarChart::genres(),
                datasets.genre_totals.as_slice(),
                format,
                out_dir,
            ),
            ChartKind::GenreByRegion => self.output(
                kind,
                &GenreRegionChart,
                datasets.genre_by_region.as_slice(),
                format,
                out_dir,
            ),
            ChartKind::CriticScores => self.output(
                kind,
                &CriticScoreChart,
                datasets.critic_scores.as_slice(),
                format,
                out_dir,
            ),
        }
    }

    fn output<R: ChartRenderer>(
        &self,
        kind: ChartKind,
        renderer: &R,
        data: &R::Data,
        format: ImageFormat,
        out_dir: &Path,
    ) -> Result<RenderedImage> {
        let config = self.graph_config(kind);
        match format {
            ImageFormat::Png => {
                let path = out_dir.join(format!("{}.png", kind.file_stem()));
                renderer.render_to_file(&config, data, &path)?;
                Ok(RenderedImage::File(path))
            }
            ImageFormat::Svg => Ok(RenderedImage::Svg(renderer.render_to_svg(&config, data)?)),
        }
    }
}

impl Default for GraphManager {
    fn default() -> Self {
        Self::new(&GraphsConfig::default())
    }
}
