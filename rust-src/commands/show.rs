//! Print a single tab to stdout.

use std::path::Path;

use anyhow::Result;

use super::build_content;
use crate::cli::ViewArgs;
use crate::visualization::print_tab;


/// Run the show command.
pub fn run(data: Option<&Path>, view: &ViewArgs, color: bool) -> Result<()> {
    let content = build_content(data, view)?;
    print_tab(&content, color);
    Ok(())
}
