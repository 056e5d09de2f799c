use crate::lockfile::Package;

/// Human-readable version string for a package.
///
/// Stable versions are returned as-is. Dev versions resolved from a git or
/// hg source carry the source reference, truncated to 7 characters when it
/// is a 40-character hash.
pub fn format_version(package: &Package) -> String {
    if !package.is_dev() {
        return package.version.clone();
    }

    let source = match &package.source {
        Some(source) if source.kind == "git" || source.kind == "hg" => source,
        _ => return package.version.clone(),
    };

    match source.reference.as_deref() {
        Some(reference) if reference.len() == 40 => {
            format!("{} {}", package.version, &reference[..7])
        }
        Some(reference) if !reference.is_empty() => {
            format!("{} {}", package.version, reference)
        }
        _ => package.version.clone(),
    }
}
