//! CLI command implementations.

pub mod dashboard;
pub mod export;
pub mod init;
pub mod show;
pub mod tabs;

use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::info;

use crate::cli::ViewArgs;
use crate::config::resolve_data_path;
use crate::dashboard::{DateSelector, TabContent, TabSelector, ViewContext};
use crate::data::{MetricsSource, SnapshotSource};


/// Local calendar date used for defaults and the sample dataset.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}


/// Open the snapshot file, or fall back to sample data anchored on `today`.
pub(crate) fn load_source(data: Option<&Path>, today: NaiveDate) -> Result<Box<dyn MetricsSource>> {
    match resolve_data_path(data) {
        Some(path) => {
            info!(path = %path.display(), "reading snapshot");
            Ok(Box::new(SnapshotSource::from_path(&path)?))
        }
        None => {
            info!("no snapshot file, using sample data");
            Ok(Box::new(SnapshotSource::sample(today)))
        }
    }
}


/// Tab and date selection requested on the command line.
pub(crate) fn initial_view(view: &ViewArgs, today: NaiveDate) -> Result<(TabSelector, DateSelector)> {
    let mut tabs = TabSelector::new();
    if let Some(id) = &view.tab {
        tabs.select_id(id)?;
    }

    let date = DateSelector::starting_at(Some(view.date.unwrap_or(today)));
    Ok((tabs, date))
}


/// Build the content of the requested tab once, for non-interactive output.
pub(crate) fn build_content(data: Option<&Path>, view: &ViewArgs) -> Result<TabContent> {
    let today = today();
    let source = load_source(data, today)?;
    let (tabs, date) = initial_view(view, today)?;

    let ctx = ViewContext::new(date, today);
    Ok(TabContent::build(tabs.active(), source.as_ref(), &ctx))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Tab;

    fn view(tab: Option<&str>, date: Option<NaiveDate>) -> ViewArgs {
        ViewArgs {
            tab: tab.map(str::to_string),
            date,
        }
    }

    #[test]
    fn test_initial_view_defaults() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let (tabs, date) = initial_view(&view(None, None), today).unwrap();
        assert_eq!(tabs.active(), Tab::Overview);
        assert_eq!(date.selected(), Some(today));
    }

    #[test]
    fn test_initial_view_with_tab_and_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let picked = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let (tabs, date) = initial_view(&view(Some("Gaming"), Some(picked)), today).unwrap();
        assert_eq!(tabs.active(), Tab::Gaming);
        assert_eq!(date.selected(), Some(picked));
    }

    #[test]
    fn test_initial_view_unknown_tab() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let err = initial_view(&view(Some("retention"), None), today).unwrap_err();
        assert!(err.to_string().contains("retention"));
    }

    #[test]
    fn test_load_source_missing_file() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let missing = std::env::temp_dir().join("gamedash-missing-snapshot.json");
        assert!(load_source(Some(&missing), today).is_err());
    }
}
