use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lockmeta")]
#[command(about = "Inspect metadata of a project's locked dependencies")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about licenses of dependencies
    Licenses {
        /// Path to the installed snapshot or a directory containing it
        path: Option<PathBuf>,

        /// Format of the output: text or json
        #[arg(short, long)]
        format: Option<String>,

        /// Disables search in dev requirements
        #[arg(long)]
        no_dev: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
