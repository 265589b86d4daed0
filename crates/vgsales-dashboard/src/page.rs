//! Self-contained HTML page for one dashboard state.

use crate::dashboard::DashboardData;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;
use vgsales_common::{format_millions, format_timestamp};
use vgsales_data::FilterOptions;
use vgsales_graphs::{RenderedChart, RenderedImage};

/// Page heading.
pub const PAGE_TITLE: &str = "Video Game Sales Analysis Dashboard";

/// Introductory text under the heading.
pub const DESCRIPTION: &str = "This interactive dashboard allows you to explore global video game \
    sales trends across time, platforms, genres, and critic ratings, based on historical sales \
    data. Use the filters on the left to explore different segments of the market!";

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex}\
    aside{width:16rem;padding:1rem;background:#f0f2f6;min-height:100vh}\
    main{flex:1;padding:1rem 2rem}\
    li.selected{font-weight:bold}\
    li.unselected{color:#888}\
    section img,section svg{max-width:100%;height:auto}";

/// Renders to a full HTML document through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    /// Available sidebar choices.
    pub options: &'a FilterOptions,
    /// Selection and its aggregates.
    pub data: &'a DashboardData,
    /// Charts in page order.
    pub charts: &'a [RenderedChart],
    /// Timestamp shown in the footer.
    pub generated_at: DateTime<Utc>,
}

impl Page<'_> {
    fn write_sidebar(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selection = &self.data.selection;

        writeln!(f, "<aside>")?;
        writeln!(f, "<h2>Filter Options</h2>")?;

        writeln!(f, "<h3>Select Year Range</h3>")?;
        match self.options.year_bounds {
            Some(bounds) => writeln!(
                f,
                "<p>{} to {} <small>(available {})</small></p>",
                selection.years.start, selection.years.end, bounds
            )?,
            None => writeln!(f, "<p>No release years available</p>")?,
        }

        write_multiselect(f, "Select Platforms", &self.options.platforms, &selection.platforms)?;
        write_multiselect(f, "Select Genres", &self.options.genres, &selection.genres)?;

        writeln!(
            f,
            "<p>{} matching releases, {} units</p>",
            self.data.matched_records,
            format_millions(self.data.global_sales_total)
        )?;
        writeln!(f, "</aside>")
    }

    fn write_chart(&self, f: &mut fmt::Formatter<'_>, chart: &RenderedChart) -> fmt::Result {
        writeln!(f, "<section>")?;
        writeln!(f, "<h2>{}</h2>", escape(chart.kind.section_title()))?;
        match &chart.image {
            RenderedImage::File(path) => {
                let src = path
                    .file_name()
                    .map(|name| name.to_string_lossy())
                    .unwrap_or_else(|| path.to_string_lossy());
                writeln!(
                    f,
                    "<img src=\"{}\" alt=\"{}\">",
                    escape(&src),
                    escape(chart.kind.chart_title())
                )?;
            }
            RenderedImage::Svg(svg) => writeln!(f, "{svg}")?,
        }
        writeln!(f, "</section>")
    }
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(f, "<title>{PAGE_TITLE}</title>")?;
        writeln!(f, "<style>{STYLE}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;

        self.write_sidebar(f)?;

        writeln!(f, "<main>")?;
        writeln!(f, "<h1>\u{1F3AE} {PAGE_TITLE}</h1>")?;
        writeln!(f, "<p>{DESCRIPTION}</p>")?;
        for chart in self.charts {
            self.write_chart(f, chart)?;
        }
        writeln!(
            f,
            "<footer><small>Generated {}</small></footer>",
            format_timestamp(self.generated_at)
        )?;
        writeln!(f, "</main>")?;

        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn write_multiselect(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    available: &[String],
    selected: &BTreeSet<String>,
) -> fmt::Result {
    writeln!(f, "<h3>{heading}</h3>")?;
    if selected.is_empty() {
        writeln!(f, "<p><em>Nothing selected</em></p>")?;
    }
    writeln!(f, "<ul>")?;
    for option in available {
        let class = if selected.contains(option) {
            "selected"
        } else {
            "unselected"
        };
        writeln!(f, "<li class=\"{class}\">{}</li>", escape(option))?;
    }
    writeln!(f, "</ul>")
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dashboard;
    use std::path::PathBuf;
    use vgsales_common::test_utils::sales_fixtures;
    use vgsales_config::Config;
    use vgsales_data::SalesTable;
    use vgsales_graphs::ChartKind;

    fn placeholder_charts() -> Vec<RenderedChart> {
        ChartKind::ALL
            .into_iter()
            .map(|kind| {
                let path = PathBuf::from("out").join(format!("{}.png", kind.file_stem()));
                RenderedChart {
                    kind,
                    image: RenderedImage::File(path),
                }
            })
            .collect()
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let dashboard = Dashboard::new(
            SalesTable::new(sales_fixtures::mixed_catalog()),
            Config::default(),
        );
        let data = dashboard.handle(&dashboard.options().default_selection());
        let charts = placeholder_charts();

        let html = Page {
            options: dashboard.options(),
            data: &data,
            charts: &charts,
            generated_at: Utc::now(),
        }
        .to_string();

        let positions: Vec<usize> = ChartKind::ALL
            .iter()
            .map(|kind| html.find(&format!("<h2>{}</h2>", kind.section_title())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<img src=\"sales_over_time.png\""));
        assert!(html.contains("<li class=\"selected\">PS2</li>"));
        assert!(html.contains("<li class=\"unselected\">Wii</li>"));
        assert!(html.contains("Filter Options"));
    }

    #[test]
    fn test_empty_multiselect_is_flagged() {
        let dashboard = Dashboard::new(
            SalesTable::new(sales_fixtures::two_row_example()),
            Config::default(),
        );
        let selection = dashboard.options().resolve(None, None, Some(Vec::new()), None);
        let data = dashboard.handle(&selection);

        let html = Page {
            options: dashboard.options(),
            data: &data,
            charts: &[],
            generated_at: Utc::now(),
        }
        .to_string();

        assert!(html.contains("Nothing selected"));
        assert!(html.contains("0 matching releases"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Tom & Jerry <3 \"x\""), "Tom &amp; Jerry &lt;3 &quot;x&quot;");
    }
}
