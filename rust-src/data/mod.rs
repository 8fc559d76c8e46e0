//! Data access layer for dashboard metrics.

mod snapshot;
mod source;

pub use snapshot::SnapshotSource;
pub use source::MetricsSource;
