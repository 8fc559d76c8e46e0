//! Error types for dashboard data and formatting.

use thiserror::Error;

use crate::models::DateRange;


/// Errors raised while reading, formatting or selecting dashboard data.
///
/// All variants are fatal to the call that produced them only. Renderers
/// recover by drawing a "no data" placeholder for the affected item.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Metric or series value is NaN, infinite, or out of range
    #[error("invalid value: {0}")]
    InvalidValue(f64),

    /// Display format selector outside plain/currency/percentage
    #[error("unknown display format '{0}'")]
    UnknownFormat(String),

    /// Tab id outside the fixed set
    #[error("unknown tab '{0}' (expected one of: overview, period, comparison, monetization, gaming)")]
    UnknownTab(String),

    /// Metric or series key not known to the source
    #[error("unknown metric '{0}'")]
    UnknownMetric(String),

    /// Source has no period covering the requested range
    #[error("no data for '{name}' in {range}")]
    NoData { name: String, range: DateRange },
}


/// Result alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
