use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the installed snapshot written by installer tooling.
pub const LOCKFILE_NAME: &str = "installed.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct LockFile {
    pub version: u32,
    pub root: Package,
    #[serde(rename = "package", default)]
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    /// Display name as written by the installer
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub license: Vec<String>,
    pub source: Option<Source>,
    #[serde(default)]
    pub requires: BTreeMap<String, String>,
    #[serde(rename = "requires-dev", default)]
    pub requires_dev: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub reference: Option<String>,
}

impl Package {
    /// Lowercased identity used for requires lookups and bucket keys.
    pub fn normalized_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether the resolved version is a dev version (branch-like).
    pub fn is_dev(&self) -> bool {
        self.version.starts_with("dev-") || self.version.ends_with("-dev")
    }
}

/// Parse an installed snapshot file and return structured data
pub fn parse_lockfile<P: AsRef<Path>>(path: P) -> Result<LockFile> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Err(anyhow::anyhow!("snapshot not found: {}", path_ref.display()));
    }

    let content = std::fs::read_to_string(path_ref)
        .with_context(|| format!("Failed to read snapshot: {}", path_ref.display()))?;

    if content.trim().is_empty() {
        return Err(anyhow::anyhow!("snapshot is empty: {}", path_ref.display()));
    }

    let lock_file: LockFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse snapshot as TOML: {}\nThis might indicate a corrupted or incompatible {} file.",
            path_ref.display(),
            LOCKFILE_NAME
        )
    })?;

    if lock_file.packages.is_empty() {
        eprintln!("Warning: snapshot contains no packages: {}", path_ref.display());
    }

    Ok(lock_file)
}

/// Find the snapshot in the current directory or parent directories
pub fn find_lockfile() -> Option<PathBuf> {
    let current = std::env::current_dir().ok()?;
    find_lockfile_from(&current)
}

/// Find the snapshot walking up from `start` through parent directories
pub fn find_lockfile_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let lock_path = current.join(LOCKFILE_NAME);
        if lock_path.exists() {
            match std::fs::metadata(&lock_path) {
                Ok(metadata) if metadata.len() > 0 => return Some(lock_path),
                Ok(_) => {
                    eprintln!(
                        "Warning: Found empty {} at {}, continuing search...",
                        LOCKFILE_NAME,
                        lock_path.display()
                    );
                }
                Err(_) => {
                    eprintln!(
                        "Warning: Found {} at {} but cannot read metadata, continuing search...",
                        LOCKFILE_NAME,
                        lock_path.display()
                    );
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
