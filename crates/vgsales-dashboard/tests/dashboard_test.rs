//! End-to-end tests: config, CSV on disk, selection handling and page output.

use std::fs;
use vgsales_common::test_utils::{
    create_temp_dir, init_test_logging, sales_csv, sales_fixtures, write_temp_csv,
};
use vgsales_config::{Config, ConfigLoader, ImageFormat};
use vgsales_dashboard::{Dashboard, PAGE_FILE};
use vgsales_graphs::ChartKind;

fn catalog_dashboard() -> (tempfile::NamedTempFile, Dashboard) {
    let csv = write_temp_csv(&sales_csv(&sales_fixtures::mixed_catalog()));
    let mut config = Config::default();
    config.data.path = csv.path().to_path_buf();
    config.graphs.width = 480;
    config.graphs.height = 240;
    let dashboard = Dashboard::load(config).unwrap();
    (csv, dashboard)
}

#[test]
fn test_options_reflect_loaded_data() {
    init_test_logging();
    let (_csv, dashboard) = catalog_dashboard();
    let options = dashboard.options();

    assert_eq!(options.platforms, ["GBA", "PS2", "PS3", "Wii", "X360", "XB"]);
    assert_eq!(options.default_platforms, ["PS2", "X360"]);
    assert_eq!(options.default_genres, ["Action", "Sports"]);
}

#[test]
fn test_aggregate_json_has_all_datasets() {
    let (_csv, dashboard) = catalog_dashboard();
    let data = dashboard.handle(&dashboard.options().default_selection());

    let json = serde_json::to_value(&data).unwrap();

    for key in [
        "sales_over_time",
        "platform_totals",
        "genre_totals",
        "genre_by_region",
        "critic_scores",
    ] {
        assert!(json["datasets"][key].is_array(), "missing {key}");
    }
    assert_eq!(json["matched_records"], 4);
}

#[test]
fn test_render_png_page() {
    let (_csv, dashboard) = catalog_dashboard();
    let dir = create_temp_dir();

    let page = dashboard
        .render(
            &dashboard.options().default_selection(),
            ImageFormat::Png,
            dir.path(),
        )
        .unwrap();

    assert_eq!(page, dir.path().join(PAGE_FILE));
    let html = fs::read_to_string(&page).unwrap();
    for kind in ChartKind::ALL {
        let image = format!("{}.png", kind.file_stem());
        assert!(html.contains(&image));
        assert!(dir.path().join(image).exists());
    }
}

#[test]
fn test_render_svg_page_for_cleared_selection() {
    let (_csv, dashboard) = catalog_dashboard();
    let dir = create_temp_dir();
    let out_dir = dir.path().join("site");
    let selection = dashboard
        .options()
        .resolve(None, None, Some(Vec::new()), None);

    let page = dashboard
        .render(&selection, ImageFormat::Svg, &out_dir)
        .unwrap();

    let html = fs::read_to_string(page).unwrap();
    assert_eq!(html.matches("<svg").count(), ChartKind::ALL.len());
    assert!(html.contains("Critic Score vs Global Sales"));
}

#[test]
fn test_missing_dataset_fails_to_load() {
    let dir = create_temp_dir();
    let mut config = Config::default();
    config.data.path = dir.path().join("missing.csv");

    let error = Dashboard::load(config).unwrap_err();

    assert!(error.to_string().contains("missing.csv"));
}

#[test]
fn test_dashboard_from_yaml_config() {
    let csv = write_temp_csv(&sales_csv(&sales_fixtures::two_row_example()));
    let yaml = format!(
        "data:\n  path: {:?}\nfilters:\n  default_platforms: [X360]\n  default_genres: [Sports]\n",
        csv.path().display().to_string()
    );
    let config = ConfigLoader::parse(&yaml).unwrap();

    let dashboard = Dashboard::load(config).unwrap();
    let data = dashboard.handle(&dashboard.options().default_selection());

    assert_eq!(data.matched_records, 1);
    assert_eq!(data.datasets.platform_totals[0].name, "X360");
}
