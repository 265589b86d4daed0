//! Application-wide error types using thiserror.

use vgsales_common::VgSalesError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    /// Loading, filtering or rendering failed.
    #[error(transparent)]
    Pipeline(#[from] VgSalesError),

    /// Writing the page failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the dashboard application.
pub type DashboardResult<T> = Result<T, DashboardError>;
