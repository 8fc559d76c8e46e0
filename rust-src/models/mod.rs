//! Data models for dashboard metrics.

mod catalog;
mod metric;
mod period;
mod series;

pub use catalog::{metric_spec, series_spec, SeriesSpec};
pub use metric::{DisplayFormat, Metric};
pub use period::DateRange;
pub use series::{PercentSeries, RetentionSeries, SeriesPoint};
