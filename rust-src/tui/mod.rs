//! Interactive terminal dashboard built with ratatui.

mod app;
mod theme;
mod ui;

pub use app::{run_dashboard, App};
