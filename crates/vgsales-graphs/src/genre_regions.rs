//! Stacked regional sales per genre.

use crate::renderer::{
    category_bar, category_label, category_label_style, category_slots, sales_axis_max,
    ChartRenderer,
};
use crate::GraphConfig;
use plotters::coord::Shift;
use plotters::prelude::*;
use vgsales_common::{Region, Result};
use vgsales_data::RegionalGenreSales;

/// One bar per genre with North America, Europe and Japan stacked bottom to top.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreRegionChart;

impl GenreRegionChart {
    /// Creates the renderer.
    pub fn new() -> Self {
        Self
    }

    /// Bottom and top of each region's segment within one bar.
    fn segments(row: &RegionalGenreSales) -> [(Region, f64, f64); 3] {
        let mut bottom = 0.0;
        Region::ALL.map(|region| {
            let top = bottom + row.region(region);
            let segment = (region, bottom, top);
            bottom = top;
            segment
        })
    }
}

impl ChartRenderer for GenreRegionChart {
    type Data = [RegionalGenreSales];

    fn name(&self) -> &'static str {
        "genre_by_region"
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
        data: &Self::Data,
    ) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        let style = &config.style;
        let labels: Vec<String> = data.iter().map(|row| row.genre.clone()).collect();
        let slots = category_slots(data.len());
        let y_max = sales_axis_max(data.iter().map(|row| row.total_sales));

        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, style.title_font.text_style())
            .margin(style.margins.outer as i32)
            .x_label_area_size(style.margins.x_label_area as i32)
            .y_label_area_size(style.margins.y_label_area as i32)
            .build_cartesian_2d((0u32..slots).into_segmented(), 0.0..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len() + 1)
            .x_label_formatter(&|value: &SegmentValue<u32>| category_label(&labels, value))
            .x_label_style(category_label_style(config))
            .y_label_style(style.label_font.text_style())
            .x_desc(config.x_label.as_deref().unwrap_or(""))
            .y_desc(config.y_label.as_deref().unwrap_or(""))
            .axis_desc_style(style.label_font.text_style())
            .draw()?;

        let colors = self.get_colors(&style.color_scheme);
        let stacks: Vec<_> = data.iter().map(Self::segments).collect();

        for (layer, region) in Region::ALL.into_iter().enumerate() {
            let color = colors[layer % colors.len()];
            chart
                .draw_series(stacks.iter().enumerate().map(|(index, segments)| {
                    let (_, bottom, top) = segments[layer];
                    category_bar(index, bottom, top, color)
                }))?
                .label(region.display_name())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(style.label_font.text_style())
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }
}
