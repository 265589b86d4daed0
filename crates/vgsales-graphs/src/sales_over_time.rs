//! Global sales over time line chart.

use crate::renderer::{sales_axis_max, ChartRenderer};
use crate::GraphConfig;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use vgsales_common::Result;
use vgsales_data::YearlySales;

/// Line chart of yearly global sales with a marker on each year.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesOverTimeChart;

impl SalesOverTimeChart {
    /// Creates the renderer.
    pub fn new() -> Self {
        Self
    }

    /// Year axis padded by one year on each side.
    fn year_range(data: &[YearlySales]) -> Range<i32> {
        let first = data.iter().map(|p| p.year).min();
        let last = data.iter().map(|p| p.year).max();
        match (first, last) {
            (Some(first), Some(last)) => first.saturating_sub(1)..last.saturating_add(1),
            _ => 0..1,
        }
    }
}

impl ChartRenderer for SalesOverTimeChart {
    type Data = [YearlySales];

    fn name(&self) -> &'static str {
        "sales_over_time"
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
        let y_max = sales_axis_max(data.iter().map(|p| p.global_sales));

        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, style.title_font.text_style())
            .margin(style.margins.outer as i32)
            .x_label_area_size(style.margins.x_label_area as i32)
            .y_label_area_size(style.margins.y_label_area as i32)
            .build_cartesian_2d(Self::year_range(data), 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_deref().unwrap_or(""))
            .y_desc(config.y_label.as_deref().unwrap_or(""))
            .label_style(style.label_font.text_style())
            .axis_desc_style(style.label_font.text_style())
            .draw()?;

        let color = self.get_colors(&style.color_scheme)[0];
        let points: Vec<(i32, f64)> = data.iter().map(|p| (p.year, p.global_sales)).collect();
        let radius = style.marker_size as i32;

        chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?;
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, radius, color.filled())),
        )?;

        Ok(())
    }
}
