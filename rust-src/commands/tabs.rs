//! List the dashboard tabs.

use crate::dashboard::Tab;


/// Print one line per tab: number, id, title.
pub fn run() {
    for (i, tab) in Tab::ALL.iter().enumerate() {
        println!("{}  {:<13} {}", i + 1, tab.id(), tab.title());
    }
}
