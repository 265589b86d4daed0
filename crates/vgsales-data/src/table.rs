//! Immutable in-memory sales table.

use std::collections::BTreeSet;
use std::sync::Arc;
use vgsales_common::{SalesRecord, YearRange};

/// Loaded dataset, shared read-only by every stage.
///
/// Cloning is cheap: clones share the same records.
#[derive(Debug, Clone)]
pub struct SalesTable {
    records: Arc<[SalesRecord]>,
}

impl SalesTable {
    /// Wraps already parsed records.
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// All records in source order.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Iterates over the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest release year, `None` for an empty table.
    pub fn year_bounds(&self) -> Option<YearRange> {
        let mut years = self.records.iter().map(|r| r.year_of_release);
        let first = years.next()?;
        Some(years.fold(YearRange::new(first, first), YearRange::extend_to))
    }

    /// Distinct platforms present, sorted.
    pub fn platforms(&self) -> Vec<String> {
        distinct(self.records.iter().filter_map(SalesRecord::platform))
    }

    /// Distinct genres present, sorted.
    pub fn genres(&self) -> Vec<String> {
        distinct(self.records.iter().filter_map(SalesRecord::genre))
    }
}

impl Default for SalesTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<SalesRecord>> for SalesTable {
    fn from(records: Vec<SalesRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a SalesTable {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
