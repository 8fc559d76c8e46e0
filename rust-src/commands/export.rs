//! Export command for tab images.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::build_content;
use crate::cli::ViewArgs;
use crate::config::get_export_dir;
use crate::visualization::{export_tab_png, export_tab_svg, open_file};


/// Run the export command.
pub fn run(
    data: Option<&Path>,
    view: &ViewArgs,
    svg: bool,
    should_open: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let content = build_content(data, view)?;

    // Determine format and output path
    let format_type = if svg { "svg" } else { "png" };
    let output_path = match output {
        Some(path) => path,
        None => get_export_dir().join(format!("gamedash-{}.{}", content.tab().id(), format_type)),
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    println!("Exporting {} tab to {}...", content.tab().title(), format_type.to_uppercase());
    if svg {
        export_tab_svg(&content, &output_path)?;
    } else {
        export_tab_png(&content, &output_path)?;
    }
    println!("Exported to: {}", output_path.display());

    if should_open {
        open_file(&output_path)?;
    }

    Ok(())
}
