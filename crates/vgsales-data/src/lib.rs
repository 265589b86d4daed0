//! # VGSales Data
//!
//! Loading, filtering and aggregation of the historical video game sales
//! dataset.
//!
//! The pipeline is `load → filter → aggregate`: [`CsvLoader`] reads the CSV
//! once into an immutable [`SalesTable`], a [`FilterSelection`] narrows it to
//! a [`FilteredView`], and the aggregators in [`aggregator`] reduce the view
//! to the datasets drawn by the charts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod filter;
pub mod loader;
pub mod options;
pub mod table;

pub use aggregator::*;
pub use filter::*;
pub use loader::*;
pub use options::*;
pub use table::*;
