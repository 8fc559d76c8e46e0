//! Per-tab content descriptors built from a metrics source.
//!
//! Each [`TabContent`] variant supplies its own metric list and chart set.
//! Failures are contained per item: a metric or series that cannot be shown
//! becomes a "no data" placeholder and is logged, the rest of the panel
//! still renders.

use chrono::NaiveDate;
use tracing::warn;

use super::{DateSelector, Tab};
use crate::data::MetricsSource;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{metric_spec, series_spec, DateRange, DisplayFormat, Metric, PercentSeries, SeriesSpec};
use crate::visualization::{format_change, format_value, period_change, Delta};


/// Placeholder text for items that could not be loaded.
pub const NO_DATA: &str = "No data";

const OVERVIEW_PRIMARY: &[&str] = &["dau", "wau", "mau", "revenue"];
const OVERVIEW_SECONDARY: &[&str] = &["arpu", "arppu"];
const PERIOD_METRICS: &[&str] = &["new_users", "sessions", "avg_session_minutes", "revenue"];
const COMPARISON_METRICS: &[&str] = &["dau", "wau", "mau", "revenue", "arpu", "arppu"];
const MONETIZATION_METRICS: &[&str] = &["revenue", "arpu", "arppu", "paying_users", "conversion_rate"];
const GAMING_METRICS: &[&str] = &["matches_played", "levels_completed", "sessions_per_user", "avg_session_minutes"];


/// Inputs that decide which window of data a panel shows.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub date: DateSelector,
    pub today: NaiveDate,
}


impl ViewContext {
    pub fn new(date: DateSelector, today: NaiveDate) -> Self {
        Self { date, today }
    }

    /// Window ending on the selected date, or on today when none is selected.
    pub fn range(&self) -> DateRange {
        DateRange::week_ending(self.date.selected().unwrap_or(self.today))
    }
}


/// Formatted value of a card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardValue {
    Ready { text: String, delta: Option<Delta> },
    NoData,
}


/// One metric card, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: String,
    pub value: CardValue,
}


impl MetricCard {
    pub fn from_metric(metric: &Metric) -> DashboardResult<Self> {
        let text = format_value(metric.value, metric.format)?;
        let delta = metric.change_percent.map(format_change).transpose()?;

        Ok(Self {
            label: metric.label.clone(),
            value: CardValue::Ready { text, delta },
        })
    }

    pub fn placeholder(key: &str) -> Self {
        Self {
            label: default_label(key),
            value: CardValue::NoData,
        }
    }

    /// Value text, or the placeholder text.
    pub fn value_text(&self) -> &str {
        match &self.value {
            CardValue::Ready { text, .. } => text,
            CardValue::NoData => NO_DATA,
        }
    }

    pub fn delta(&self) -> Option<&Delta> {
        match &self.value {
            CardValue::Ready { delta, .. } => delta.as_ref(),
            CardValue::NoData => None,
        }
    }
}


/// One labelled bar of a percentage chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub value_text: String,
    /// Filled share of the bar in `[0, 1]`
    pub ratio: f64,
}


/// A percentage chart such as the retention curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentChart {
    pub title: String,
    pub description: String,
    /// `None` when the series could not be loaded
    pub rows: Option<Vec<ChartRow>>,
}


impl PercentChart {
    pub fn from_series(spec: &SeriesSpec, series: &PercentSeries) -> DashboardResult<Self> {
        let rows = series
            .points()
            .iter()
            .map(|point| {
                Ok(ChartRow {
                    label: spec.point_label(&point.label),
                    value_text: format_value(point.value, DisplayFormat::Percentage)?,
                    ratio: (point.value / 100.0).clamp(0.0, 1.0),
                })
            })
            .collect::<DashboardResult<Vec<_>>>()?;

        Ok(Self {
            title: spec.title.to_string(),
            description: spec.description.to_string(),
            rows: Some(rows),
        })
    }

    pub fn placeholder(key: &str) -> Self {
        let (title, description) = match series_spec(key) {
            Some(spec) => (spec.title.to_string(), spec.description.to_string()),
            None => (key.to_string(), String::new()),
        };

        Self {
            title,
            description,
            rows: None,
        }
    }
}


/// Current vs previous window for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label: String,
    pub current: Option<String>,
    pub previous: Option<String>,
    pub delta: Option<Delta>,
}


/// Everything one tab shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    Overview {
        date_label: String,
        cards: Vec<MetricCard>,
        secondary: Vec<MetricCard>,
        charts: Vec<PercentChart>,
    },
    Period {
        range_label: String,
        cards: Vec<MetricCard>,
        charts: Vec<PercentChart>,
    },
    Comparison {
        current_label: String,
        previous_label: String,
        rows: Vec<ComparisonRow>,
    },
    Monetization {
        range_label: String,
        cards: Vec<MetricCard>,
        charts: Vec<PercentChart>,
    },
    Gaming {
        range_label: String,
        cards: Vec<MetricCard>,
        charts: Vec<PercentChart>,
    },
}


impl TabContent {
    /// Build the content of `tab` from `source`.
    pub fn build(tab: Tab, source: &dyn MetricsSource, ctx: &ViewContext) -> Self {
        let range = ctx.range();

        match tab {
            Tab::Overview => Self::Overview {
                date_label: ctx.date.label(),
                cards: build_cards(source, OVERVIEW_PRIMARY, &range),
                secondary: build_cards(source, OVERVIEW_SECONDARY, &range),
                charts: vec![build_chart(source, "retention", &range)],
            },
            Tab::Period => Self::Period {
                range_label: range.label(),
                cards: build_cards(source, PERIOD_METRICS, &range),
                charts: vec![build_chart(source, "retention", &range)],
            },
            Tab::Comparison => {
                let previous = range.previous();
                Self::Comparison {
                    current_label: range.label(),
                    previous_label: previous.label(),
                    rows: COMPARISON_METRICS
                        .iter()
                        .map(|key| build_comparison(source, key, &range, &previous))
                        .collect(),
                }
            }
            Tab::Monetization => Self::Monetization {
                range_label: range.label(),
                cards: build_cards(source, MONETIZATION_METRICS, &range),
                charts: vec![build_chart(source, "purchase_mix", &range)],
            },
            Tab::Gaming => Self::Gaming {
                range_label: range.label(),
                cards: build_cards(source, GAMING_METRICS, &range),
                charts: vec![build_chart(source, "quest_completion", &range)],
            },
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Self::Overview { .. } => Tab::Overview,
            Self::Period { .. } => Tab::Period,
            Self::Comparison { .. } => Tab::Comparison,
            Self::Monetization { .. } => Tab::Monetization,
            Self::Gaming { .. } => Tab::Gaming,
        }
    }

    /// Subtitle shown under the panel title.
    pub fn subtitle(&self) -> String {
        match self {
            Self::Overview { date_label, .. } => format!("Data for: {}", date_label),
            Self::Comparison { current_label, previous_label, .. } => {
                format!("{} vs {}", current_label, previous_label)
            }
            Self::Period { range_label, .. }
            | Self::Monetization { range_label, .. }
            | Self::Gaming { range_label, .. } => range_label.clone(),
        }
    }

    /// All metric cards in display order.
    pub fn cards(&self) -> Vec<&MetricCard> {
        match self {
            Self::Overview { cards, secondary, .. } => cards.iter().chain(secondary).collect(),
            Self::Period { cards, .. }
            | Self::Monetization { cards, .. }
            | Self::Gaming { cards, .. } => cards.iter().collect(),
            Self::Comparison { .. } => Vec::new(),
        }
    }

    pub fn charts(&self) -> &[PercentChart] {
        match self {
            Self::Overview { charts, .. }
            | Self::Period { charts, .. }
            | Self::Monetization { charts, .. }
            | Self::Gaming { charts, .. } => charts,
            Self::Comparison { .. } => &[],
        }
    }
}


fn default_label(key: &str) -> String {
    metric_spec(key)
        .map(|spec| spec.label.to_string())
        .unwrap_or_else(|| key.to_string())
}


fn build_cards(source: &dyn MetricsSource, keys: &[&str], range: &DateRange) -> Vec<MetricCard> {
    keys.iter()
        .map(|key| {
            source
                .metric(key, range)
                .and_then(|metric| MetricCard::from_metric(&metric))
                .unwrap_or_else(|e| {
                    warn!(metric = %key, error = %e, "showing placeholder card");
                    MetricCard::placeholder(key)
                })
        })
        .collect()
}


fn build_chart(source: &dyn MetricsSource, key: &str, range: &DateRange) -> PercentChart {
    let chart = match series_spec(key) {
        Some(spec) => source
            .series(key, range)
            .and_then(|series| PercentChart::from_series(spec, &series)),
        None => Err(DashboardError::UnknownMetric(key.to_string())),
    };

    chart.unwrap_or_else(|e| {
        warn!(series = %key, error = %e, "showing placeholder chart");
        PercentChart::placeholder(key)
    })
}


fn build_comparison(
    source: &dyn MetricsSource,
    key: &str,
    current_range: &DateRange,
    previous_range: &DateRange,
) -> ComparisonRow {
    let load = |range: &DateRange| {
        source
            .metric(key, range)
            .and_then(|metric| Ok((format_value(metric.value, metric.format)?, metric)))
            .map_err(|e| warn!(metric = %key, range = %range, error = %e, "comparison value missing"))
            .ok()
    };

    let current = load(current_range);
    let previous = load(previous_range);

    let delta = match (&current, &previous) {
        (Some((_, cur)), Some((_, prev))) => period_change(cur.value, prev.value)
            .and_then(|change| format_change(change).ok()),
        _ => None,
    };
    let label = current
        .as_ref()
        .or(previous.as_ref())
        .map(|(_, metric)| metric.label.clone())
        .unwrap_or_else(|| default_label(key));

    ComparisonRow {
        label,
        current: current.map(|(text, _)| text),
        previous: previous.map(|(text, _)| text),
        delta,
    }
}
