//! Dashboard state and per-tab content.

mod content;
mod date_selector;
mod tabs;

pub use content::{
    CardValue, ComparisonRow, MetricCard, PercentChart, TabContent, ViewContext, NO_DATA,
};
pub use date_selector::DateSelector;
pub use tabs::{Tab, TabSelector};
