//! Filter stage: year range, platform and genre predicates.

use crate::SalesTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};
use vgsales_common::{SalesRecord, YearRange};

/// The sidebar state: one year range and two multiselects.
///
/// The three predicates combine with AND. An empty multiselect matches
/// nothing; there is no "select all" fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Inclusive release year bounds.
    pub years: YearRange,
    /// Platforms to keep.
    pub platforms: BTreeSet<String>,
    /// Genres to keep.
    pub genres: BTreeSet<String>,
}

impl FilterSelection {
    /// Builds a selection from any string collections.
    pub fn new<P, G>(years: YearRange, platforms: P, genres: G) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Self {
            years,
            platforms: platforms.into_iter().map(Into::into).collect(),
            genres: genres.into_iter().map(Into::into).collect(),
        }
    }

    /// Selection covering every year, platform and genre observed in `table`.
    pub fn everything(table: &SalesTable) -> Option<Self> {
        Some(Self::new(
            table.year_bounds()?,
            table.platforms(),
            table.genres(),
        ))
    }

    /// Same selection with a different year range.
    pub fn with_years(&self, years: YearRange) -> Self {
        Self {
            years,
            ..self.clone()
        }
    }

    /// Whether `record` passes all three predicates.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.years.contains(record.year_of_release)
            && record
                .platform()
                .is_some_and(|p| self.platforms.contains(p))
            && record.genre().is_some_and(|g| self.genres.contains(g))
    }

    /// Whether no record can possibly match.
    pub fn is_unsatisfiable(&self) -> bool {
        self.years.is_empty() || self.platforms.is_empty() || self.genres.is_empty()
    }
}

/// Records of a table that satisfy a selection, in source order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a SalesRecord>,
}

impl<'a> FilteredView<'a> {
    /// Matching records.
    pub fn records(&self) -> &[&'a SalesRecord] {
        &self.records
    }

    /// Iterates over matching records.
    pub fn iter(&self) -> impl Iterator<Item = &'a SalesRecord> + '_ {
        self.records.iter().copied()
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of `Global_Sales` over the view.
    pub fn global_sales_total(&self) -> f64 {
        self.iter().map(|r| r.global_sales).sum()
    }
}

impl<'a> FromIterator<&'a SalesRecord> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a SalesRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl SalesTable {
    /// Applies `selection` in a single pass over the table.
    #[instrument(skip_all, fields(years = %selection.years))]
    pub fn filter(&self, selection: &FilterSelection) -> FilteredView<'_> {
        if selection.is_unsatisfiable() {
            debug!("Selection cannot match any record");
            return FilteredView::default();
        }

        let view: FilteredView<'_> = self.iter().filter(|r| selection.matches(r)).collect();
        debug!(matched = view.len(), total = self.len(), "Filtered sales table");
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgsales_common::test_utils::sales_fixtures;

    fn catalog() -> SalesTable {
        SalesTable::new(sales_fixtures::mixed_catalog())
    }

    #[test]
    fn test_two_row_example_keeps_both_rows() {
        let table = SalesTable::new(sales_fixtures::two_row_example());
        let selection = FilterSelection::new(
            YearRange::new(2005, 2006),
            ["PS2", "X360"],
            ["Action", "Sports"],
        );

        assert_eq!(table.filter(&selection).len(), 2);
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let table = catalog();
        let everything = FilterSelection::everything(&table).unwrap();

        let view = table.filter(&everything.with_years(YearRange::new(2006, 2006)));

        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.year_of_release == 2006));
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let table = catalog();
        let selection = FilterSelection::new(YearRange::new(2000, 2010), ["PS2"], ["Sports"]);

        let view = table.filter(&selection);

        assert_eq!(view.len(), 1);
        assert_eq!(view.records()[0].year_of_release, 2001);
    }

    #[test]
    fn test_empty_platform_selection_matches_nothing() {
        let table = catalog();
        let selection =
            FilterSelection::new(YearRange::new(2000, 2010), Vec::<String>::new(), ["Action"]);

        assert!(table.filter(&selection).is_empty());
    }

    #[test]
    fn test_inverted_year_range_matches_nothing() {
        let table = catalog();
        let everything = FilterSelection::everything(&table).unwrap();

        assert!(table
            .filter(&everything.with_years(YearRange::new(2010, 2000)))
            .is_empty());
    }

    #[test]
    fn test_records_without_category_never_match() {
        let mut records = sales_fixtures::two_row_example();
        records[0].genre = None;
        let table = SalesTable::new(records);
        let selection = FilterSelection::new(
            YearRange::new(2005, 2006),
            ["PS2", "X360"],
            ["Action", "Sports"],
        );

        assert_eq!(table.filter(&selection).len(), 1);
    }

    #[test]
    fn test_everything_returns_whole_table() {
        let table = catalog();
        let everything = FilterSelection::everything(&table).unwrap();

        let view = table.filter(&everything);

        assert_eq!(view.len(), table.len());
        assert!(view
            .iter()
            .zip(table.iter())
            .all(|(a, b)| std::ptr::eq(a, b)));
    }
}
