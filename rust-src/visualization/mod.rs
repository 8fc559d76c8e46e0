//! Visualization layer: value formatting, terminal output and image export.

mod export;
mod format;
mod terminal;

pub use export::{export_tab_png, export_tab_svg, open_file};
pub use format::{format_change, format_value, period_change, Delta, DeltaStyle};
pub use terminal::print_tab;
