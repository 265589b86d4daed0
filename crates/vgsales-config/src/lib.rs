//! # VGSales Config
//!
//! Type-safe configuration management for the sales dashboard.
//!
//! This crate provides the YAML schema, its defaults, loading with
//! environment variable overrides, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;
