//! Interactive dashboard command.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::{initial_view, load_source, today};
use crate::cli::ViewArgs;
use crate::config::get_export_dir;
use crate::tui::{run_dashboard, App};


/// Run the interactive dashboard until the user quits.
pub fn run(data: Option<&Path>, view: &ViewArgs) -> Result<()> {
    let today = today();
    let source = load_source(data, today)?;
    let (tabs, date) = initial_view(view, today)?;

    info!(tab = %tabs.active(), "starting dashboard");
    let app = App::new(source, tabs, date, today, get_export_dir());
    run_dashboard(app)
}
