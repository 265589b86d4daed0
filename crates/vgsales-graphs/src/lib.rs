//! # VGSales Graphs
//!
//! Chart rendering for the sales dashboard.
//!
//! Each chart implements [`ChartRenderer`] and draws onto any plotters
//! backend, so the same code produces PNG files and inline SVG markup.
//! [`GraphManager`] renders the five dashboard charts in display order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod category_bars;
pub mod critic_scatter;
pub mod genre_regions;
pub mod manager;
pub mod renderer;
pub mod sales_over_time;
pub mod types;

pub use category_bars::CategoryBarChart;
pub use critic_scatter::CriticScoreChart;
pub use genre_regions::GenreRegionChart;
pub use manager::*;
pub use renderer::ChartRenderer;
pub use sales_over_time::SalesOverTimeChart;
pub use types::*;
