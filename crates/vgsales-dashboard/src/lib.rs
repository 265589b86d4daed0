//! # VGSales Dashboard
//!
//! The presentation shell of the sales dashboard: a [`Dashboard`] owns the
//! loaded table and the sidebar options, and [`Dashboard::handle`] turns a
//! selection into the five chart datasets. The page writer and the command
//! line interface sit on top of that handler.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod dashboard;
pub mod error;
pub mod page;

pub use dashboard::{Dashboard, DashboardData, PAGE_FILE};
pub use error::{DashboardError, DashboardResult};
pub use page::Page;
