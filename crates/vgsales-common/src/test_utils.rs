//! Test utilities and shared test helpers.
//!
//! Fixtures, CSV writers and assertion helpers shared by the unit and
//! integration tests of every crate in the workspace.

use crate::SalesRecord;
use std::sync::Once;

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Header of the CSV files written by [`sales_csv`], in source column order.
pub const SALES_CSV_HEADER: [&str; 11] = [
    "Name",
    "Platform",
    "Year_of_Release",
    "Genre",
    "Publisher",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
    "Global_Sales",
    "Critic_Score",
];

/// Initialize logging for tests. Safe to call multiple times.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Builds a fully populated record.
#[allow(clippy::too_many_arguments)]
pub fn record(
    year: i32,
    platform: &str,
    genre: &str,
    na: f64,
    eu: f64,
    jp: f64,
    global: f64,
    critic: Option<f64>,
) -> SalesRecord {
    SalesRecord {
        year_of_release: year,
        platform: Some(platform.to_string()),
        genre: Some(genre.to_string()),
        na_sales: na,
        eu_sales: eu,
        jp_sales: jp,
        global_sales: global,
        critic_score: critic,
    }
}

/// Generate test data shaped like the historical sales dataset.
pub mod sales_fixtures {
    use super::record;
    use crate::SalesRecord;

    /// The two-row example: a reviewed PS2 action game and an unreviewed X360 sports game.
    pub fn two_row_example() -> Vec<SalesRecord> {
        vec![
            record(2005, "PS2", "Action", 1.0, 0.5, 0.2, 1.8, Some(80.0)),
            record(2006, "X360", "Sports", 2.0, 1.0, 0.1, 3.2, None),
        ]
    }

    /// A small multi-platform, multi-genre table spanning 2000-2010.
    pub fn mixed_catalog() -> Vec<SalesRecord> {
        vec![
            record(2000, "PS2", "Action", 0.5, 0.3, 0.1, 1.0, Some(71.0)),
            record(2001, "PS2", "Sports", 1.2, 0.6, 0.05, 2.0, Some(88.0)),
            record(2001, "GBA", "Platform", 0.9, 0.4, 0.8, 2.2, None),
            record(2003, "XB", "Shooter", 1.5, 0.5, 0.0, 2.1, Some(93.0)),
            record(2004, "PS2", "Racing", 2.9, 3.5, 0.3, 7.6, Some(91.0)),
            record(2005, "X360", "Action", 0.7, 0.4, 0.02, 1.2, Some(67.0)),
            record(2006, "Wii", "Sports", 41.4, 29.0, 3.8, 82.5, Some(76.0)),
            record(2006, "X360", "Sports", 2.0, 1.0, 0.1, 3.2, None),
            record(2008, "PS3", "Action", 3.3, 2.9, 0.5, 7.5, Some(97.0)),
            record(2010, "X360", "Shooter", 9.0, 3.1, 0.1, 13.7, Some(87.0)),
        ]
    }
}

/// Serializes records into CSV text with the dataset's full header.
///
/// Absent values are written as empty fields; `Name`, `Publisher` and
/// `Other_Sales` are filled with placeholders.
pub fn sales_csv(records: &[SalesRecord]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(SALES_CSV_HEADER)
        .expect("writing to memory cannot fail");

    for (idx, r) in records.iter().enumerate() {
        let row = [
            format!("Game {idx}"),
            r.platform.clone().unwrap_or_default(),
            r.year_of_release.to_string(),
            r.genre.clone().unwrap_or_default(),
            "Publisher".to_string(),
            r.na_sales.to_string(),
            r.eu_sales.to_string(),
            r.jp_sales.to_string(),
            "0".to_string(),
            r.global_sales.to_string(),
            r.critic_score.map(|s| s.to_string()).unwrap_or_default(),
        ];
        writer.write_record(&row).expect("writing to memory cannot fail");
    }

    let bytes = writer.into_inner().expect("flushing to memory cannot fail");
    String::from_utf8(bytes).expect("CSV output is UTF-8")
}

/// Writes `contents` to a temporary `.csv` file that is removed on drop.
#[cfg(feature = "tempfile")]
pub fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary CSV");
    file.flush().expect("Failed to flush temporary CSV");
    file
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}
