//! CSV dataset loader.

use crate::SalesTable;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument};
use vgsales_common::{Result, SalesRecord, VgSalesError};

/// Columns every dataset must provide. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Year_of_Release",
    "Platform",
    "Genre",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Global_Sales",
    "Critic_Score",
];

/// Field values treated as missing, matched exactly.
///
/// Any spelling of NaN, whatever its case or sign, is missing as well.
pub const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Position of each required column in the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    year: usize,
    platform: usize,
    genre: usize,
    na_sales: usize,
    eu_sales: usize,
    jp_sales: usize,
    global_sales: usize,
    critic_score: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                VgSalesError::data(format!("Missing required column '{name}'"))
            })
        };

        Ok(Self {
            year: find("Year_of_Release")?,
            platform: find("Platform")?,
            genre: find("Genre")?,
            na_sales: find("NA_Sales")?,
            eu_sales: find("EU_Sales")?,
            jp_sales: find("JP_Sales")?,
            global_sales: find("Global_Sales")?,
            critic_score: find("Critic_Score")?,
        })
    }
}

/// CSV loader for the sales dataset.
pub struct CsvLoader;

impl CsvLoader {
    /// Load the dataset at `path`.
    ///
    /// Rows without a release year are dropped and the year is truncated to
    /// an integer. A missing file, missing column or malformed value fails
    /// the whole load.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SalesTable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            VgSalesError::data_with_source(
                format!("Failed to open dataset '{}'", path.display()),
                e,
            )
        })?;
        Self::from_reader(file)
    }

    /// Load the dataset from any reader producing CSV text.
    pub fn from_reader<R: Read>(reader: R) -> Result<SalesTable> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(false)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (idx, result) in reader.records().enumerate() {
            let row = idx + 1;
            let raw = result?;
            match parse_row(&raw, columns, row)? {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }

        debug!(dropped, "Dropped rows without a release year");
        info!(rows = records.len(), dropped, "Loaded sales dataset");

        Ok(SalesTable::new(records))
    }
}

/// Parses one data row; `Ok(None)` when the release year is missing.
fn parse_row(raw: &StringRecord, columns: ColumnIndex, row: usize) -> Result<Option<SalesRecord>> {
    let field = |i: usize| raw.get(i).unwrap_or_default();

    let Some(year) = optional_number(field(columns.year), "Year_of_Release", row)? else {
        return Ok(None);
    };
    if year < f64::from(i32::MIN) || year > f64::from(i32::MAX) {
        return Err(VgSalesError::data_at_row(
            format!("Year_of_Release '{}' is out of range", field(columns.year)),
            row,
        ));
    }

    Ok(Some(SalesRecord {
        // Truncation toward zero, as an integer cast of a whole-number year.
        year_of_release: year.trunc() as i32,
        platform: optional_text(field(columns.platform)),
        genre: optional_text(field(columns.genre)),
        na_sales: required_number(field(columns.na_sales), "NA_Sales", row)?,
        eu_sales: required_number(field(columns.eu_sales), "EU_Sales", row)?,
        jp_sales: required_number(field(columns.jp_sales), "JP_Sales", row)?,
        global_sales: required_number(field(columns.global_sales), "Global_Sales", row)?,
        critic_score: optional_number(field(columns.critic_score), "Critic_Score", row)?,
    }))
}

fn is_missing(value: &str) -> bool {
    NA_TOKENS.contains(&value)
        || value
            .strip_prefix(['+', '-'])
            .unwrap_or(value)
            .eq_ignore_ascii_case("nan")
}

fn optional_text(value: &str) -> Option<String> {
    (!is_missing(value)).then(|| value.to_string())
}

fn optional_number(value: &str, column: &str, row: usize) -> Result<Option<f64>> {
    if is_missing(value) {
        return Ok(None);
    }
    let number = value.parse::<f64>().map_err(|_| {
        VgSalesError::data_at_row(format!("{column} value '{value}' is not a number"), row)
    })?;
    if !number.is_finite() {
        return Err(VgSalesError::data_at_row(
            format!("{column} value '{value}' is not a finite number"),
            row,
        ));
    }
    Ok(Some(number))
}

fn required_number(value: &str, column: &str, row: usize) -> Result<f64> {
    optional_number(value, column, row)?
        .ok_or_else(|| VgSalesError::data_at_row(format!("{column} is missing"), row))
}
