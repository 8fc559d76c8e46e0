//! Known metric and series keys with their default presentation.

use super::DisplayFormat;


/// Default label and format for a metric key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub format: DisplayFormat,
}


/// How series point labels are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesLabels {
    /// Labels are day offsets, shown as `Day <n>`
    DayOffset,
    /// Labels are shown as given
    Verbatim,
}


/// Title and label style for a series key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub labels: SeriesLabels,
}


const METRICS: &[MetricSpec] = &[
    MetricSpec { key: "dau", label: "DAU (Daily Active Users)", format: DisplayFormat::Plain },
    MetricSpec { key: "wau", label: "WAU (Weekly Active Users)", format: DisplayFormat::Plain },
    MetricSpec { key: "mau", label: "MAU (Monthly Active Users)", format: DisplayFormat::Plain },
    MetricSpec { key: "revenue", label: "Daily Revenue", format: DisplayFormat::Currency },
    MetricSpec { key: "arpu", label: "ARPU (Avg Revenue Per User)", format: DisplayFormat::Currency },
    MetricSpec { key: "arppu", label: "ARPPU (Avg Revenue Per Paying User)", format: DisplayFormat::Currency },
    MetricSpec { key: "new_users", label: "New Users", format: DisplayFormat::Plain },
    MetricSpec { key: "sessions", label: "Sessions", format: DisplayFormat::Plain },
    MetricSpec { key: "avg_session_minutes", label: "Avg Session Length (min)", format: DisplayFormat::Plain },
    MetricSpec { key: "paying_users", label: "Paying Users", format: DisplayFormat::Plain },
    MetricSpec { key: "conversion_rate", label: "Payer Conversion", format: DisplayFormat::Percentage },
    MetricSpec { key: "matches_played", label: "Matches Played", format: DisplayFormat::Plain },
    MetricSpec { key: "levels_completed", label: "Levels Completed", format: DisplayFormat::Plain },
    MetricSpec { key: "sessions_per_user", label: "Sessions per User", format: DisplayFormat::Plain },
];


const SERIES: &[SeriesSpec] = &[
    SeriesSpec {
        key: "retention",
        title: "Retention Rate",
        description: "Share of players returning after N days",
        labels: SeriesLabels::DayOffset,
    },
    SeriesSpec {
        key: "quest_completion",
        title: "Quest Completion",
        description: "Share of started quests that were finished",
        labels: SeriesLabels::Verbatim,
    },
    SeriesSpec {
        key: "purchase_mix",
        title: "Purchase Mix",
        description: "Share of revenue by product line",
        labels: SeriesLabels::Verbatim,
    },
];


/// Look up the default presentation of a metric key.
pub fn metric_spec(key: &str) -> Option<&'static MetricSpec> {
    METRICS.iter().find(|spec| spec.key == key)
}


/// Look up the title and label style of a series key.
pub fn series_spec(key: &str) -> Option<&'static SeriesSpec> {
    SERIES.iter().find(|spec| spec.key == key)
}


impl SeriesSpec {
    /// Display label for one point of this series.
    pub fn point_label(&self, raw: &str) -> String {
        match self.labels {
            SeriesLabels::DayOffset => format!("Day {}", raw),
            SeriesLabels::Verbatim => raw.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_lookup() {
        let spec = metric_spec("revenue").unwrap();
        assert_eq!(spec.format, DisplayFormat::Currency);
        assert!(metric_spec("churn").is_none());
    }

    #[test]
    fn test_keys_unique() {
        for (i, a) in METRICS.iter().enumerate() {
            assert!(METRICS[i + 1..].iter().all(|b| b.key != a.key), "duplicate {}", a.key);
        }
    }

    #[test]
    fn test_point_labels() {
        assert_eq!(series_spec("retention").unwrap().point_label("7"), "Day 7");
        assert_eq!(series_spec("quest_completion").unwrap().point_label("Daily"), "Daily");
    }
}
