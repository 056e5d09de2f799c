use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use lockmeta::closure::{collect_all, required_closure};
use lockmeta::config::load_config;
use lockmeta::lockfile::{find_lockfile, parse_lockfile, LOCKFILE_NAME};
use lockmeta::output::render;

pub fn handle_licenses(
    path: Option<PathBuf>,
    format: Option<String>,
    no_dev: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config()?;

    // CLI arguments override config values
    let no_dev = no_dev || config.no_dev.unwrap_or(false);
    let format = format.or(config.format).unwrap_or_else(|| "text".to_string());

    let lock_path = match path {
        Some(path) if path.is_dir() => path.join(LOCKFILE_NAME),
        Some(path) => path,
        None => find_lockfile().ok_or_else(|| {
            anyhow::anyhow!(
                "No {} found in current directory or parent directories",
                LOCKFILE_NAME
            )
        })?,
    };
    let lock_file = parse_lockfile(&lock_path)?;

    let bucket = if no_dev {
        required_closure(&lock_file.packages, &lock_file.root)
    } else {
        collect_all(&lock_file.packages)
    };

    let rendered = render(&format, &lock_file.root, &bucket)?;

    match output {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{}", rendered),
    }

    Ok(())
}
