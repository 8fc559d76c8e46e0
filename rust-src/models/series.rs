//! Ordered percentage series (retention curves, quest completion).

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};


/// One labelled percentage in a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}


/// Labelled percentages kept in insertion order.
///
/// Values are finite and within `[0, 100]`. Order is whatever the source
/// provided and is never sorted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PercentSeries {
    points: Vec<SeriesPoint>,
}


/// Retention rate by day offset (`"1"`, `"3"`, `"7"`, `"30"`).
pub type RetentionSeries = PercentSeries;


impl PercentSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(label, value)` pairs, validating every value.
    pub fn from_pairs<I, S>(pairs: I) -> DashboardResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut series = Self::new();
        for (label, value) in pairs {
            series.push(label, value)?;
        }
        Ok(series)
    }

    /// Append a point at the end of the series.
    pub fn push(&mut self, label: impl Into<String>, value: f64) -> DashboardResult<()> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(DashboardError::InvalidValue(value));
        }
        self.points.push(SeriesPoint {
            label: label.into(),
            value,
        });
        Ok(())
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let series = PercentSeries::from_pairs([
            ("1", 78.5),
            ("3", 45.2),
            ("7", 28.7),
            ("30", 12.3),
        ])
        .unwrap();

        let labels: Vec<&str> = series.points().iter().map(|p| p.label.as_str()).collect();
        let values: Vec<f64> = series.points().iter().map(|p| p.value).collect();
        assert_eq!(labels, ["1", "3", "7", "30"]);
        assert_eq!(values, [78.5, 45.2, 28.7, 12.3]);
    }

    #[test]
    fn test_unsorted_input_kept() {
        let series = PercentSeries::from_pairs([("30", 12.3), ("1", 78.5)]).unwrap();
        assert_eq!(series.points()[0].label, "30");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            PercentSeries::from_pairs([("1", 100.5)]).unwrap_err(),
            DashboardError::InvalidValue(100.5)
        );
        assert!(PercentSeries::from_pairs([("1", -0.1)]).is_err());
        assert!(PercentSeries::from_pairs([("1", f64::NAN)]).is_err());
    }

    #[test]
    fn test_bounds_accepted() {
        let series = PercentSeries::from_pairs([("a", 0.0), ("b", 100.0)]).unwrap();
        assert_eq!(series.points().len(), 2);
    }
}
