//! Group-by aggregations turning a filtered view into chart datasets.

use crate::FilteredView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};
use vgsales_common::{Region, SalesRecord};

/// Global sales summed over one release year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySales {
    /// Release year.
    pub year: i32,
    /// Sum of global sales released that year.
    pub global_sales: f64,
}

/// Global sales summed over one platform or genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    /// Platform code or genre name.
    pub name: String,
    /// Sum of global sales in the category.
    pub global_sales: f64,
}

/// Regional sales of one genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalGenreSales {
    /// Genre name.
    pub genre: String,
    /// North American sales summed over the genre.
    pub na_sales: f64,
    /// European sales summed over the genre.
    pub eu_sales: f64,
    /// Japanese sales summed over the genre.
    pub jp_sales: f64,
    /// Exactly `na_sales + eu_sales + jp_sales`.
    pub total_sales: f64,
}

impl RegionalGenreSales {
    /// Sales of one region.
    pub fn region(&self, region: Region) -> f64 {
        match region {
            Region::NorthAmerica => self.na_sales,
            Region::Europe => self.eu_sales,
            Region::Japan => self.jp_sales,
        }
    }
}

/// One reviewed release: critic score against global sales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticScorePoint {
    /// Critic score of the release.
    pub critic_score: f64,
    /// Global sales of the same release.
    pub global_sales: f64,
}

/// Trait for reducing a filtered view into one chart's data points
pub trait DataAggregator<T> {
    /// Reduce `view`; an empty view yields an empty result.
    fn aggregate(&self, view: &FilteredView<'_>) -> Vec<T>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Sums global sales per year, ascending by year.
#[derive(Debug, Default, Clone, Copy)]
pub struct SalesOverTimeAggregator;

impl DataAggregator<YearlySales> for SalesOverTimeAggregator {
    #[instrument(skip_all, name = "sales_over_time")]
    fn aggregate(&self, view: &FilteredView<'_>) -> Vec<YearlySales> {
        let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
        for record in view.iter() {
            *by_year.entry(record.year_of_release).or_default() += record.global_sales;
        }

        let result: Vec<_> = by_year
            .into_iter()
            .map(|(year, global_sales)| YearlySales { year, global_sales })
            .collect();

        debug!(aggregator = self.name(), "Aggregated {} yearly data points", result.len());
        result
    }

    fn name(&self) -> &'static str {
        "sales_over_time"
    }
}

/// Column a category total is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKey {
    /// Group by `Platform`.
    Platform,
    /// Group by `Genre`.
    Genre,
}

impl CategoryKey {
    fn of(self, record: &SalesRecord) -> Option<&str> {
        match self {
            Self::Platform => record.platform(),
            Self::Genre => record.genre(),
        }
    }
}

/// Sums global sales per platform or genre, descending by total.
///
/// Ties keep ascending name order.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTotalsAggregator {
    key: CategoryKey,
}

impl CategoryTotalsAggregator {
    /// Totals per platform.
    pub const fn platforms() -> Self {
        Self {
            key: CategoryKey::Platform,
        }
    }

    /// Totals per genre.
    pub const fn genres() -> Self {
        Self {
            key: CategoryKey::Genre,
        }
    }

}

impl DataAggregator<CategorySales> for CategoryTotalsAggregator {
    #[instrument(skip_all, fields(aggregator = self.name()))]
    fn aggregate(&self, view: &FilteredView<'_>) -> Vec<CategorySales> {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for record in view.iter() {
            if let Some(name) = self.key.of(record) {
                *totals.entry(name).or_default() += record.global_sales;
            }
        }

        let mut result: Vec<_> = totals
            .into_iter()
            .map(|(name, global_sales)| CategorySales {
                name: name.to_string(),
                global_sales,
            })
            .collect();
        result.sort_by(|a, b| b.global_sales.total_cmp(&a.global_sales));

        debug!(key = ?self.key, "Aggregated {} category totals", result.len());
        result
    }

    fn name(&self) -> &'static str {
        match self.key {
            CategoryKey::Platform => "platform_totals",
            CategoryKey::Genre => "genre_totals",
        }
    }
}

/// Sums NA, EU and JP sales per genre, descending by their total.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenreRegionAggregator;

impl DataAggregator<RegionalGenreSales> for GenreRegionAggregator {
    #[instrument(skip_all, name = "genre_by_region")]
    fn aggregate(&self, view: &FilteredView<'_>) -> Vec<RegionalGenreSales> {
        let mut sums: BTreeMap<&str, [f64; 3]> = BTreeMap::new();
        for record in view.iter() {
            if let Some(genre) = record.genre() {
                let entry = sums.entry(genre).or_default();
                for (slot, region) in entry.iter_mut().zip(Region::ALL) {
                    *slot += region.sales_of(record);
                }
            }
        }

        let mut result: Vec<_> = sums
            .into_iter()
            .map(|(genre, [na_sales, eu_sales, jp_sales])| RegionalGenreSales {
                genre: genre.to_string(),
                na_sales,
                eu_sales,
                jp_sales,
                total_sales: na_sales + eu_sales + jp_sales,
            })
            .collect();
        result.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));

        debug!(aggregator = self.name(), "Aggregated {} genre regional rows", result.len());
        result
    }

    fn name(&self) -> &'static str {
        "genre_by_region"
    }
}

/// Emits `(critic score, global sales)` for every reviewed record, unaggregated.
#[derive(Debug, Default, Clone, Copy)]
pub struct CriticScoreAggregator;

impl DataAggregator<CriticScorePoint> for CriticScoreAggregator {
    #[instrument(skip_all, name = "critic_scores")]
    fn aggregate(&self, view: &FilteredView<'_>) -> Vec<CriticScorePoint> {
        let result: Vec<_> = view
            .iter()
            .filter_map(|record| {
                record.critic_score.map(|critic_score| CriticScorePoint {
                    critic_score,
                    global_sales: record.global_sales,
                })
            })
            .collect();

        debug!(
            aggregator = self.name(),
            skipped = view.len() - result.len(),
            "Collected {} critic score points",
            result.len()
        );
        result
    }

    fn name(&self) -> &'static str {
        "critic_scores"
    }
}

/// The five datasets behind the dashboard charts, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDatasets {
    /// Yearly totals, ascending by year.
    pub sales_over_time: Vec<YearlySales>,
    /// Platform totals, descending.
    pub platform_totals: Vec<CategorySales>,
    /// Genre totals, descending.
    pub genre_totals: Vec<CategorySales>,
    /// Regional genre totals, descending by combined total.
    pub genre_by_region: Vec<RegionalGenreSales>,
    /// Raw (score, sales) pairs of reviewed releases.
    pub critic_scores: Vec<CriticScorePoint>,
}

impl ChartDatasets {
    /// Whether every dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.sales_over_time.is_empty()
            && self.platform_totals.is_empty()
            && self.genre_totals.is_empty()
            && self.genre_by_region.is_empty()
            && self.critic_scores.is_empty()
    }
}

/// Runs all five aggregators over one view.
#[derive(Debug, Default, Clone, Copy)]
pub struct AggregationManager;

impl AggregationManager {
    /// Create a new aggregation manager
    pub const fn new() -> Self {
        Self
    }

    /// Compute every chart dataset for `view`.
    #[instrument(skip_all, fields(rows = view.len()))]
    pub fn aggregate_all(&self, view: &FilteredView<'_>) -> ChartDatasets {
        ChartDatasets {
            sales_over_time: SalesOverTimeAggregator.aggregate(view),
            platform_totals: CategoryTotalsAggregator::platforms().aggregate(view),
            genre_totals: CategoryTotalsAggregator::genres().aggregate(view),
            genre_by_region: GenreRegionAggregator.aggregate(view),
            critic_scores: CriticScoreAggregator.aggregate(view),
        }
    }
}
