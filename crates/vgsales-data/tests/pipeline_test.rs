//! Integration tests for the load → filter → aggregate pipeline.

use proptest::prelude::*;
use std::collections::BTreeSet;
use vgsales_common::test_utils::{
    assert_approx_eq, init_test_logging, record, sales_csv, sales_fixtures, write_temp_csv,
};
use vgsales_common::{SalesRecord, YearRange};
use vgsales_data::{
    AggregationManager, CsvLoader, FilterOptions, FilterSelection, FilteredView, SalesTable,
};

const PLATFORMS: [&str; 4] = ["PS2", "X360", "Wii", "DS"];
const GENRES: [&str; 4] = ["Action", "Sports", "Puzzle", "Racing"];

fn identities(view: &FilteredView<'_>) -> BTreeSet<*const SalesRecord> {
    view.iter().map(|r| r as *const SalesRecord).collect()
}

fn arb_record() -> impl Strategy<Value = SalesRecord> {
    (
        1980i32..2017,
        0usize..PLATFORMS.len(),
        0usize..GENRES.len(),
        0.0f64..5.0,
        0.0f64..5.0,
        0.0f64..5.0,
        0.0f64..20.0,
        proptest::option::of(10.0f64..100.0),
    )
        .prop_map(|(year, p, g, na, eu, jp, global, critic)| {
            record(year, PLATFORMS[p], GENRES[g], na, eu, jp, global, critic)
        })
}

fn arb_table() -> impl Strategy<Value = SalesTable> {
    proptest::collection::vec(arb_record(), 1..60).prop_map(SalesTable::new)
}

#[test]
fn test_load_filter_aggregate_from_csv_file() {
    init_test_logging();
    let file = write_temp_csv(&sales_csv(&sales_fixtures::two_row_example()));

    let table = CsvLoader::load(file.path()).unwrap();
    let selection = FilterSelection::new(
        YearRange::new(2005, 2006),
        ["PS2", "X360"],
        ["Action", "Sports"],
    );
    let view = table.filter(&selection);
    let datasets = AggregationManager::new().aggregate_all(&view);

    assert_eq!(view.len(), 2);
    let years: Vec<_> = datasets
        .sales_over_time
        .iter()
        .map(|p| (p.year, p.global_sales))
        .collect();
    assert_eq!(years, [(2005, 1.8), (2006, 3.2)]);
    let critic: Vec<_> = datasets
        .critic_scores
        .iter()
        .map(|p| (p.critic_score, p.global_sales))
        .collect();
    assert_eq!(critic, [(80.0, 1.8)]);
}

#[test]
fn test_loaded_rows_without_year_are_dropped() {
    let csv = "Name,Platform,Year_of_Release,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales,Critic_Score,User_Score\n\
               Madden,PS2,2003,Sports,EA,2.0,0.1,0.0,0.2,2.3,91,8.5\n\
               Unknown,PS2,N/A,Sports,EA,0.5,0.1,0.0,0.0,0.6,,tbd\n";
    let file = write_temp_csv(csv);

    let table = CsvLoader::load(file.path()).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].critic_score, Some(91.0));
}

#[test]
fn test_empty_platform_list_yields_empty_aggregates() {
    let table = SalesTable::new(sales_fixtures::mixed_catalog());
    let options = FilterOptions::from_table(&table, &["PS2".to_string()], &["Action".to_string()]);
    let selection = options.resolve(None, None, Some(Vec::new()), None);

    let view = table.filter(&selection);
    let datasets = AggregationManager::new().aggregate_all(&view);

    assert!(view.is_empty());
    assert!(datasets.is_empty());
}

#[test]
fn test_genre_region_totals_exact_on_catalog() {
    let table = SalesTable::new(sales_fixtures::mixed_catalog());
    let view = table.filter(&FilterSelection::everything(&table).unwrap());

    for row in AggregationManager::new().aggregate_all(&view).genre_by_region {
        assert_eq!(row.total_sales, row.na_sales + row.eu_sales + row.jp_sales);
    }
}

proptest! {
    #[test]
    fn prop_year_range_split_is_consistent(
        table in arb_table(),
        a in 1980i32..2017,
        len in 1i32..37,
        offset in 0i32..36,
    ) {
        let b = a + len;
        let c = a + offset % len;
        let everything = FilterSelection::everything(&table).unwrap();

        let whole = identities(&table.filter(&everything.with_years(YearRange::new(a, b))));
        let (left, right) = YearRange::new(a, b).split_at(c);
        let mut parts = identities(&table.filter(&everything.with_years(left)));
        let right_ids = identities(&table.filter(&everything.with_years(right)));

        prop_assert!(parts.is_disjoint(&right_ids));
        parts.extend(right_ids);
        prop_assert_eq!(whole, parts);
    }

    #[test]
    fn prop_full_selection_returns_whole_table(table in arb_table()) {
        let view = table.filter(&FilterSelection::everything(&table).unwrap());

        prop_assert_eq!(view.len(), table.len());
        prop_assert!(view.iter().zip(table.iter()).all(|(a, b)| std::ptr::eq(a, b)));
    }

    #[test]
    fn prop_sales_over_time_conserves_global_sales(
        table in arb_table(),
        platforms in proptest::sample::subsequence(PLATFORMS.to_vec(), 0..=PLATFORMS.len()),
        genres in proptest::sample::subsequence(GENRES.to_vec(), 0..=GENRES.len()),
    ) {
        let years = table.year_bounds().unwrap();
        let view = table.filter(&FilterSelection::new(years, platforms, genres));

        let yearly: f64 = AggregationManager::new()
            .aggregate_all(&view)
            .sales_over_time
            .iter()
            .map(|p| p.global_sales)
            .sum();

        assert_approx_eq(yearly, view.global_sales_total(), 1e-9);
    }

    #[test]
    fn prop_genre_region_total_is_exact(table in arb_table()) {
        let view = table.filter(&FilterSelection::everything(&table).unwrap());

        for row in AggregationManager::new().aggregate_all(&view).genre_by_region {
            prop_assert_eq!(row.total_sales, row.na_sales + row.eu_sales + row.jp_sales);
        }
    }
}
