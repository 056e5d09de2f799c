use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Licenses {
            path,
            format,
            no_dev,
            output,
        } => commands::handle_licenses(path, format, no_dev, output),
    }
}
