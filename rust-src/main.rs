//! Game Analytics dashboard
//!
//! Terminal dashboard for gaming metrics: active users, revenue,
//! retention and quest completion.

mod cli;
mod commands;
mod config;
mod dashboard;
mod data;
mod error;
mod logging;
mod models;
mod tui;
mod visualization;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
