//! Write the sample dataset to disk as a starting snapshot.

use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::info;

use super::today;
use crate::config::get_default_data_path;
use crate::data::SnapshotSource;


/// Run the init command.
pub fn run(output: Option<PathBuf>, force: bool) -> Result<()> {
    let path = output.unwrap_or_else(get_default_data_path);

    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let source = SnapshotSource::sample(today());
    source.save(&path)?;

    info!(path = %path.display(), "wrote sample snapshot");
    println!("Wrote sample snapshot to {}", path.display());
    println!("Edit it and run 'gamedash --data {}' to view your own numbers.", path.display());

    Ok(())
}
