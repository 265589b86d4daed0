//! Common type definitions for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One game-platform release from the sales dataset.
///
/// Sales figures are in millions of units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Release year, always present after loading.
    pub year_of_release: i32,
    /// Platform code such as `PS2` or `X360`; absent in the source when blank.
    pub platform: Option<String>,
    /// Genre such as `Action` or `Sports`; absent in the source when blank.
    pub genre: Option<String>,
    /// North American sales.
    pub na_sales: f64,
    /// European sales.
    pub eu_sales: f64,
    /// Japanese sales.
    pub jp_sales: f64,
    /// Worldwide sales; not required to equal the regional sum.
    pub global_sales: f64,
    /// Aggregate critic score, when the release was reviewed.
    pub critic_score: Option<f64>,
}

impl SalesRecord {
    /// Platform as a string slice.
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// Genre as a string slice.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }
}

/// Inclusive range of release years.
///
/// A range whose `start` is after its `end` is legal and contains no year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    /// First year included.
    pub start: i32,
    /// Last year included.
    pub end: i32,
}

impl YearRange {
    /// Creates a range covering `start..=end`.
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Whether `year` falls inside the range, bounds included.
    pub const fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Whether the range contains no year at all.
    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Splits into `start..=at` and `at+1..=end`.
    ///
    /// Splitting at `i32::MAX` leaves the right half empty.
    pub const fn split_at(&self, at: i32) -> (Self, Self) {
        let right = match at.checked_add(1) {
            Some(next) => Self::new(next, self.end),
            None => Self::new(i32::MAX, i32::MIN),
        };
        (Self::new(self.start, at), right)
    }

    /// Smallest range covering both `self` and `year`.
    pub fn extend_to(self, year: i32) -> Self {
        Self::new(self.start.min(year), self.end.max(year))
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Sales regions shown in the regional breakdown, in stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// North America
    NorthAmerica,
    /// Europe
    Europe,
    /// Japan
    Japan,
}

impl Region {
    /// All regions in fixed stacking order.
    pub const ALL: [Self; 3] = [Self::NorthAmerica, Self::Europe, Self::Japan];

    /// Human readable region name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::Japan => "Japan",
        }
    }

    /// Sales of `record` in this region.
    pub fn sales_of(self, record: &SalesRecord) -> f64 {
        match self {
            Self::NorthAmerica => record.na_sales,
            Self::Europe => record.eu_sales,
            Self::Japan => record.jp_sales,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_is_inclusive() {
        let range = YearRange::new(2005, 2006);
        assert!(range.contains(2005));
        assert!(range.contains(2006));
        assert!(!range.contains(2004));
        assert!(!range.contains(2007));
    }

    #[test]
    fn test_inverted_year_range_is_empty() {
        let range = YearRange::new(2010, 2000);
        assert!(range.is_empty());
        assert!(!range.contains(2005));
    }

    #[test]
    fn test_split_at_partitions_the_range() {
        let (left, right) = YearRange::new(1990, 2000).split_at(1995);
        assert_eq!(left, YearRange::new(1990, 1995));
        assert_eq!(right, YearRange::new(1996, 2000));
    }

    #[test]
    fn test_split_at_extreme_years() {
        let (left, right) = YearRange::new(0, i32::MAX).split_at(i32::MAX);
        assert_eq!(left, YearRange::new(0, i32::MAX));
        assert!(right.is_empty());
        assert!(!right.contains(i32::MAX));

        let (left, right) = YearRange::new(i32::MIN, 0).split_at(i32::MIN);
        assert_eq!(left, YearRange::new(i32::MIN, i32::MIN));
        assert_eq!(right, YearRange::new(i32::MIN + 1, 0));
    }

    #[test]
    fn test_region_order_and_names() {
        let names: Vec<_> = Region::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, ["North America", "Europe", "Japan"]);
    }
}
