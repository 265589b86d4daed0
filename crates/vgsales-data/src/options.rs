//! Sidebar options derived from the loaded table.

use crate::{FilterSelection, SalesTable};
use serde::Serialize;
use vgsales_common::YearRange;

/// Range used when the table holds no years at all.
const NO_YEARS: YearRange = YearRange::new(0, -1);

/// Choices offered by the sidebar widgets and their initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Slider bounds: the observed min and max release year.
    pub year_bounds: Option<YearRange>,
    /// Every platform present, sorted.
    pub platforms: Vec<String>,
    /// Every genre present, sorted.
    pub genres: Vec<String>,
    /// Preset platforms that exist in the data, in preset order.
    pub default_platforms: Vec<String>,
    /// Preset genres that exist in the data, in preset order.
    pub default_genres: Vec<String>,
}

impl FilterOptions {
    /// Derives options from `table`, keeping only presets present in it.
    pub fn from_table(
        table: &SalesTable,
        preset_platforms: &[String],
        preset_genres: &[String],
    ) -> Self {
        let platforms = table.platforms();
        let genres = table.genres();

        Self {
            year_bounds: table.year_bounds(),
            default_platforms: present(preset_platforms, &platforms),
            default_genres: present(preset_genres, &genres),
            platforms,
            genres,
        }
    }

    /// The selection shown before any user input: full year range and presets.
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection::new(
            self.year_bounds.unwrap_or(NO_YEARS),
            self.default_platforms.iter().cloned(),
            self.default_genres.iter().cloned(),
        )
    }

    /// Resolves partial widget input: absent parts take their initial value.
    ///
    /// `Some(vec![])` for a multiselect means the user cleared it.
    pub fn resolve(
        &self,
        from: Option<i32>,
        to: Option<i32>,
        platforms: Option<Vec<String>>,
        genres: Option<Vec<String>>,
    ) -> FilterSelection {
        let bounds = self.year_bounds.unwrap_or(NO_YEARS);
        FilterSelection::new(
            YearRange::new(from.unwrap_or(bounds.start), to.unwrap_or(bounds.end)),
            platforms.unwrap_or_else(|| self.default_platforms.clone()),
            genres.unwrap_or_else(|| self.default_genres.clone()),
        )
    }
}

fn present(presets: &[String], available: &[String]) -> Vec<String> {
    presets
        .iter()
        .filter(|p| available.binary_search(*p).is_ok())
        .cloned()
        .collect()
}
