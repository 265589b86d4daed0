//! Bar charts of global sales per platform or per genre.

use crate::renderer::{
    category_bar, category_label, category_label_style, category_slots, sales_axis_max,
    ChartRenderer,
};
use crate::GraphConfig;
use plotters::coord::Shift;
use plotters::prelude::*;
use vgsales_common::Result;
use vgsales_data::CategorySales;

/// Vertical bars, one per category, in the order given.
///
/// The same renderer serves the platform and genre charts; only the
/// config (title and axis label) differs.
#[derive(Debug, Clone, Copy)]
pub struct CategoryBarChart {
    name: &'static str,
}

impl CategoryBarChart {
    /// Renderer for the platform totals chart.
    pub const fn platforms() -> Self {
        Self {
            name: "platform_totals",
        }
    }

    /// Renderer for the genre totals chart.
    pub const fn genres() -> Self {
        Self {
            name: "genre_totals",
        }
    }
}

impl ChartRenderer for CategoryBarChart {
    type Data = [CategorySales];

    fn name(&self) -> &'static str {
        self.name
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
        let labels: Vec<String> = data.iter().map(|c| c.name.clone()).collect();
        let slots = category_slots(data.len());
        let y_max = sales_axis_max(data.iter().map(|c| c.global_sales));

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

        let color = self.get_colors(&style.color_scheme)[0];
        chart.draw_series(
            data.iter()
                .enumerate()
                .map(|(index, category)| category_bar(index, 0.0, category.global_sales, color)),
        )?;

        Ok(())
    }
}
