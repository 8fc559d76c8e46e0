//! Data source interface consumed by the dashboard.

use crate::error::DashboardResult;
use crate::models::{DateRange, Metric, PercentSeries, RetentionSeries};


/// Analytics metrics provider queried on every render.
pub trait MetricsSource {
    /// Scalar metric `name` for the window `range`.
    fn metric(&self, name: &str, range: &DateRange) -> DashboardResult<Metric>;

    /// Ordered percentage series `name` for the window `range`.
    fn series(&self, name: &str, range: &DateRange) -> DashboardResult<PercentSeries>;

    fn retention_series(&self, range: &DateRange) -> DashboardResult<RetentionSeries> {
        self.series("retention", range)
    }
}
