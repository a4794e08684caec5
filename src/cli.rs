use crate::commands;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "wdesk",
    version,
    about = "Track long-running writing projects and keep the registry in step with the files on disk"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan the projects directory for missing, new, and relocatable projects
    Scan {
        /// Also treat document-less directories as candidate series folders
        #[arg(long)]
        series: bool,
        /// Print the scan outcome as JSON instead of sections
        #[arg(long)]
        json: bool,
    },
    /// Print every registered project with its schedule projections
    Dump,
    /// Show the most pressing active projects
    Top {
        /// How many projects to show
        #[arg(short = 'n', long = "count", default_value_t = 4)]
        count: usize,
    },
    /// Open the document associated with a project
    Open {
        /// Project name; fuzzy matches are accepted when unambiguous
        name: String,
    },
    /// Record where a project's document lives now
    Link {
        /// Project name; fuzzy matches are accepted when unambiguous
        name: String,
        /// Path to the project's document
        location: PathBuf,
    },
    /// Write starter settings, registry, and stage files under the desk home
    Init {
        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Scan { series, json } => commands::scan::run(series, json),
        Command::Dump => commands::dump::run(),
        Command::Top { count } => commands::top::run(count),
        Command::Open { name } => commands::open_doc::run(&name),
        Command::Link { name, location } => commands::link::run(&name, &location),
        Command::Init { force } => commands::init::run(force),
    }
}
