//! Snapshot-backed metrics source.
//!
//! A snapshot is a list of periods, each holding metric readings and ordered
//! percentage series. It is either built in memory (the sample dataset) or
//! loaded from a JSON file of the same shape.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MetricsSource;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    metric_spec, series_spec, DateRange, DisplayFormat, Metric, PercentSeries, SeriesPoint,
};


/// Raw metric reading as stored in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReading {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    /// Overrides the catalog label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Overrides the catalog format (`plain`, `currency`, `percentage`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}


impl MetricReading {
    pub fn new(value: f64, change: Option<f64>) -> Self {
        Self {
            value,
            change,
            label: None,
            format: None,
        }
    }
}


/// Data for one window of dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodData {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub metrics: BTreeMap<String, MetricReading>,
    #[serde(default)]
    pub series: BTreeMap<String, Vec<SeriesPoint>>,
}


impl PeriodData {
    fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}


/// Serialized snapshot file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub periods: Vec<PeriodData>,
}


/// [`MetricsSource`] answering from an in-memory snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}


impl SnapshotSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;

        debug!(path = %path.display(), periods = snapshot.periods.len(), "loaded snapshot");
        Ok(Self::new(snapshot))
    }

    /// Write the snapshot as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&self.snapshot)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;

        Ok(())
    }

    /// Built-in sample dataset: the week ending `anchor` and the week before.
    pub fn sample(anchor: NaiveDate) -> Self {
        let current = DateRange::week_ending(anchor);
        let previous = current.previous();

        Self::new(Snapshot {
            periods: vec![sample_previous_week(previous), sample_current_week(current)],
        })
    }

    /// Period whose dates contain the end of `range`.
    fn period_for(&self, range: &DateRange) -> Option<&PeriodData> {
        self.snapshot
            .periods
            .iter()
            .find(|period| period.range().contains(range.end))
    }
}


impl MetricsSource for SnapshotSource {
    fn metric(&self, name: &str, range: &DateRange) -> DashboardResult<Metric> {
        let spec = metric_spec(name);
        let period = self.period_for(range);

        let reading = match period.and_then(|p| p.metrics.get(name)) {
            Some(reading) => reading,
            None if spec.is_none() => return Err(DashboardError::UnknownMetric(name.to_string())),
            None => {
                return Err(DashboardError::NoData {
                    name: name.to_string(),
                    range: *range,
                })
            }
        };

        let format = match &reading.format {
            Some(selector) => selector.parse::<DisplayFormat>()?,
            None => spec.map(|s| s.format).unwrap_or_default(),
        };
        let label = reading
            .label
            .clone()
            .or_else(|| spec.map(|s| s.label.to_string()))
            .unwrap_or_else(|| name.to_string());

        Metric::new(label, reading.value, reading.change, format)
    }

    fn series(&self, name: &str, range: &DateRange) -> DashboardResult<PercentSeries> {
        let points = match self.period_for(range).and_then(|p| p.series.get(name)) {
            Some(points) => points,
            None if series_spec(name).is_none() => {
                return Err(DashboardError::UnknownMetric(name.to_string()))
            }
            None => {
                return Err(DashboardError::NoData {
                    name: name.to_string(),
                    range: *range,
                })
            }
        };

        PercentSeries::from_pairs(points.iter().map(|p| (p.label.clone(), p.value)))
    }
}


fn series_points(pairs: &[(&str, f64)]) -> Vec<SeriesPoint> {
    pairs
        .iter()
        .map(|(label, value)| SeriesPoint {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}


fn readings(pairs: &[(&str, f64, f64)]) -> BTreeMap<String, MetricReading> {
    pairs
        .iter()
        .map(|(key, value, change)| (key.to_string(), MetricReading::new(*value, Some(*change))))
        .collect()
}


fn sample_current_week(range: DateRange) -> PeriodData {
    PeriodData {
        start: range.start,
        end: range.end,
        metrics: readings(&[
            ("dau", 12547.0, 8.2),
            ("wau", 45821.0, -2.1),
            ("mau", 156743.0, 12.5),
            ("revenue", 89420.0, 15.3),
            ("arpu", 5.68, 3.2),
            ("arppu", 24.50, -1.8),
            ("new_users", 3214.0, 4.6),
            ("sessions", 68930.0, 6.1),
            ("avg_session_minutes", 23.4, 1.9),
            ("paying_users", 3650.0, 9.4),
            ("conversion_rate", 2.9, 11.5),
            ("matches_played", 214380.0, 7.7),
            ("levels_completed", 48215.0, 5.2),
            ("sessions_per_user", 5.49, -0.7),
        ]),
        series: BTreeMap::from([
            ("retention".to_string(), series_points(&[("1", 78.5), ("3", 45.2), ("7", 28.7), ("30", 12.3)])),
            (
                "quest_completion".to_string(),
                series_points(&[
                    ("Daily quests", 64.2),
                    ("Weekly quests", 38.9),
                    ("Story quests", 52.7),
                    ("Event quests", 21.4),
                ]),
            ),
            (
                "purchase_mix".to_string(),
                series_points(&[
                    ("Starter packs", 42.0),
                    ("Battle pass", 31.5),
                    ("Gem bundles", 18.2),
                    ("Cosmetics", 8.3),
                ]),
            ),
        ]),
    }
}


fn sample_previous_week(range: DateRange) -> PeriodData {
    PeriodData {
        start: range.start,
        end: range.end,
        metrics: readings(&[
            ("dau", 11596.0, 3.1),
            ("wau", 46804.0, 1.4),
            ("mau", 139327.0, 6.8),
            ("revenue", 77555.0, 4.9),
            ("arpu", 5.50, 1.2),
            ("arppu", 24.95, 0.6),
            ("new_users", 3073.0, -2.4),
            ("sessions", 64968.0, 2.2),
            ("avg_session_minutes", 23.0, -0.9),
            ("paying_users", 3336.0, 3.8),
            ("conversion_rate", 2.6, 4.0),
            ("matches_played", 199053.0, 1.6),
            ("levels_completed", 45832.0, 2.7),
            ("sessions_per_user", 5.53, 0.4),
        ]),
        series: BTreeMap::from([
            ("retention".to_string(), series_points(&[("1", 76.9), ("3", 44.1), ("7", 27.5), ("30", 11.8)])),
            (
                "quest_completion".to_string(),
                series_points(&[
                    ("Daily quests", 61.0),
                    ("Weekly quests", 36.4),
                    ("Story quests", 50.3),
                    ("Event quests", 19.8),
                ]),
            ),
            (
                "purchase_mix".to_string(),
                series_points(&[
                    ("Starter packs", 44.8),
                    ("Battle pass", 29.1),
                    ("Gem bundles", 17.6),
                    ("Cosmetics", 8.5),
                ]),
            ),
        ]),
    }
}
