//! Scalar metric model and display format selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};


/// How a metric value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// Thousands-grouped number
    #[default]
    Plain,
    /// `$` followed by the grouped number
    Currency,
    /// Number followed by `%`, no grouping
    Percentage,
}


impl DisplayFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Currency => "currency",
            Self::Percentage => "percentage",
        }
    }
}


impl FromStr for DisplayFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "number" => Ok(Self::Plain),
            "currency" => Ok(Self::Currency),
            "percentage" => Ok(Self::Percentage),
            _ => Err(DashboardError::UnknownFormat(s.to_string())),
        }
    }
}


impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// A single scalar metric with an optional week-over-week change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    pub change_percent: Option<f64>,
    pub format: DisplayFormat,
}


impl Metric {
    /// Build a metric, rejecting non-finite value or change.
    pub fn new(
        label: impl Into<String>,
        value: f64,
        change_percent: Option<f64>,
        format: DisplayFormat,
    ) -> DashboardResult<Self> {
        if !value.is_finite() {
            return Err(DashboardError::InvalidValue(value));
        }
        if let Some(change) = change_percent {
            if !change.is_finite() {
                return Err(DashboardError::InvalidValue(change));
            }
        }

        Ok(Self {
            label: label.into(),
            value,
            change_percent,
            format,
        })
    }
}
