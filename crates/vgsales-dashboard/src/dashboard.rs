//! The dashboard state and its selection event handler.

use crate::error::DashboardResult;
use crate::page::Page;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use vgsales_config::{Config, ImageFormat};
use vgsales_data::{
    AggregationManager, ChartDatasets, CsvLoader, FilterOptions, FilterSelection, SalesTable,
};
use vgsales_graphs::GraphManager;

/// File name of the rendered page inside the output directory.
pub const PAGE_FILE: &str = "index.html";

/// Everything the page shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    /// The selection that produced the datasets.
    pub selection: FilterSelection,
    /// Number of records passing the filter.
    pub matched_records: usize,
    /// Sum of global sales over the matching records.
    pub global_sales_total: f64,
    /// The five chart datasets.
    pub datasets: ChartDatasets,
}

/// Loaded data plus the derived sidebar options.
///
/// The table is loaded once; every selection change is handled by
/// [`Dashboard::handle`] against the same immutable table.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: SalesTable,
    options: FilterOptions,
    config: Config,
    aggregator: AggregationManager,
    graphs: GraphManager,
}

impl Dashboard {
    /// Builds the dashboard around an already loaded table.
    pub fn new(table: SalesTable, config: Config) -> Self {
        let options = FilterOptions::from_table(
            &table,
            &config.filters.default_platforms,
            &config.filters.default_genres,
        );
        let graphs = GraphManager::new(&config.graphs);

        Self {
            table,
            options,
            config,
            aggregator: AggregationManager::new(),
            graphs,
        }
    }

    /// Loads the dataset named by `config.data.path`.
    #[instrument(skip_all, fields(path = %config.data.path.display()))]
    pub fn load(config: Config) -> DashboardResult<Self> {
        let table = CsvLoader::load(&config.data.path)?;
        Ok(Self::new(table, config))
    }

    /// The loaded table.
    pub fn table(&self) -> &SalesTable {
        &self.table
    }

    /// Sidebar choices and presets.
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Recomputes everything for a new selection: filter, then aggregate.
    #[instrument(skip_all, fields(years = %selection.years))]
    pub fn handle(&self, selection: &FilterSelection) -> DashboardData {
        let view = self.table.filter(selection);
        let datasets = self.aggregator.aggregate_all(&view);

        DashboardData {
            selection: selection.clone(),
            matched_records: view.len(),
            global_sales_total: view.global_sales_total(),
            datasets,
        }
    }

    /// Handles `selection` and writes the page with its charts into `out_dir`.
    ///
    /// Returns the path of the written page.
    #[instrument(skip(self, selection, out_dir), fields(out_dir = %out_dir.display()))]
    pub fn render(
        &self,
        selection: &FilterSelection,
        format: ImageFormat,
        out_dir: &Path,
    ) -> DashboardResult<PathBuf> {
        let data = self.handle(selection);

        fs::create_dir_all(out_dir)?;
        let charts = self.graphs.render_all(&data.datasets, format, out_dir)?;

        let page = Page {
            options: &self.options,
            data: &data,
            charts: &charts,
            generated_at: Utc::now(),
        };
        let path = out_dir.join(PAGE_FILE);
        fs::write(&path, page.to_string())?;

        info!(
            path = %path.display(),
            matched = data.matched_records,
            "Rendered dashboard page"
        );
        Ok(path)
    }
}
