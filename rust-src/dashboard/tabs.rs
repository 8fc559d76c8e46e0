//! Tab identifiers and the active-tab state machine.

use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, DashboardResult};


/// One of the five fixed dashboard panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Period,
    Comparison,
    Monetization,
    Gaming,
}


impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Period,
        Tab::Comparison,
        Tab::Monetization,
        Tab::Gaming,
    ];

    /// Stable id used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Period => "period",
            Self::Comparison => "comparison",
            Self::Monetization => "monetization",
            Self::Gaming => "gaming",
        }
    }

    /// Title shown in the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Period => "Period Metrics",
            Self::Comparison => "Comparison",
            Self::Monetization => "Monetization",
            Self::Gaming => "Gaming Metrics",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Period => 1,
            Self::Comparison => 2,
            Self::Monetization => 3,
            Self::Gaming => 4,
        }
    }

    /// Cycle to next tab
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle to previous tab
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}


impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == wanted)
            .ok_or_else(|| DashboardError::UnknownTab(s.to_string()))
    }
}


impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}


/// Active tab of the dashboard. Starts on [`Tab::Overview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelector {
    active: Tab,
}


impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Make `tab` active. Total: every tab is reachable from every state.
    pub fn select(&mut self, tab: Tab) -> Tab {
        self.active = tab;
        self.active
    }

    /// Select by id. Unknown ids leave the state unchanged.
    pub fn select_id(&mut self, id: &str) -> DashboardResult<Tab> {
        let tab = id.parse::<Tab>()?;
        Ok(self.select(tab))
    }

    /// Select by zero-based position in the tab bar.
    pub fn select_index(&mut self, index: usize) -> DashboardResult<Tab> {
        let tab = Tab::ALL
            .get(index)
            .copied()
            .ok_or_else(|| DashboardError::UnknownTab(format!("#{}", index + 1)))?;
        Ok(self.select(tab))
    }

    pub fn next(&mut self) -> Tab {
        self.select(self.active.next())
    }

    pub fn prev(&mut self) -> Tab {
        self.select(self.active.prev())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(TabSelector::new().active(), Tab::Overview);
    }

    #[test]
    fn test_select_from_any_state() {
        for start in Tab::ALL {
            let mut selector = TabSelector::new();
            selector.select(start);
            assert_eq!(selector.select(Tab::Monetization), Tab::Monetization);
            assert_eq!(selector.active(), Tab::Monetization);
        }
    }

    #[test]
    fn test_select_id() {
        let mut selector = TabSelector::new();
        assert_eq!(selector.select_id("gaming").unwrap(), Tab::Gaming);
        assert_eq!(selector.select_id(" Comparison ").unwrap(), Tab::Comparison);
    }

    #[test]
    fn test_unknown_tab_keeps_state() {
        let mut selector = TabSelector::new();
        selector.select(Tab::Period);
        let err = selector.select_id("settings").unwrap_err();
        assert_eq!(err, DashboardError::UnknownTab("settings".to_string()));
        assert_eq!(selector.active(), Tab::Period);
    }

    #[test]
    fn test_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(tab.id().parse::<Tab>().unwrap(), tab);
        }
    }

    #[test]
    fn test_cycle() {
        let mut selector = TabSelector::new();
        assert_eq!(selector.prev(), Tab::Gaming);
        assert_eq!(selector.next(), Tab::Overview);
        assert_eq!(selector.next(), Tab::Period);
    }

    #[test]
    fn test_select_index() {
        let mut selector = TabSelector::new();
        assert_eq!(selector.select_index(3).unwrap(), Tab::Monetization);
        assert!(selector.select_index(5).is_err());
        assert_eq!(selector.active(), Tab::Monetization);
    }
}
