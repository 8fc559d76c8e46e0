//! CLI definitions using clap.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::commands;
use crate::config::get_log_path;
use crate::logging;


/// Gaming analytics dashboard for the terminal
#[derive(Parser)]
#[command(name = "gamedash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Snapshot JSON file to read metrics from (default: built-in sample data)
    #[arg(long, global = true, env = "GAMEDASH_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}


/// Which tab and date to start on.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Tab id: overview, period, comparison, monetization, gaming
    #[arg(short, long)]
    pub tab: Option<String>,

    /// Selected date in YYYY-MM-DD format (default: today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}


#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Dashboard {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Print one tab to stdout
    Show {
        #[command(flatten)]
        view: ViewArgs,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Export one tab as PNG or SVG
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Export as SVG instead of PNG
        #[arg(long)]
        svg: bool,

        /// Open file after export
        #[arg(long)]
        open: bool,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the sample dataset as a snapshot file
    Init {
        /// Output file path (default: ~/.config/gamedash/snapshot.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List tab ids
    Tabs,
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let data = cli.data.as_deref();

    match cli.command.unwrap_or(Commands::Dashboard { view: ViewArgs::default() }) {
        Commands::Dashboard { view } => {
            logging::init_file(&get_log_path())?;
            commands::dashboard::run(data, &view)
        }
        Commands::Show { view, no_color } => {
            logging::init_stderr();
            commands::show::run(data, &view, !no_color)
        }
        Commands::Export { view, svg, open, output } => {
            logging::init_stderr();
            commands::export::run(data, &view, svg, open, output)
        }
        Commands::Init { output, force } => {
            logging::init_stderr();
            commands::init::run(output, force)
        }
        Commands::Tabs => {
            commands::tabs::run();
            Ok(())
        }
    }
}
