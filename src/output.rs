use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::closure::Bucket;
use crate::lockfile::Package;
use crate::version::format_version;

#[derive(Serialize)]
struct LicenseReport<'a> {
    name: &'a str,
    version: String,
    license: &'a [String],
    dependencies: IndexMap<&'a str, DependencyEntry<'a>>,
}

#[derive(Serialize)]
struct DependencyEntry<'a> {
    version: String,
    license: &'a [String],
}

/// Render the license report for the root package and its dependency bucket.
///
/// The whole report is built in memory before anything is written, so an
/// unsupported format fails without producing partial output.
pub fn render(format: &str, root: &Package, bucket: &Bucket) -> Result<String> {
    match format {
        "text" => Ok(render_text(root, bucket)),
        "json" => render_json(root, bucket),
        other => anyhow::bail!("Unsupported format \"{}\". Supported formats: text, json.", other),
    }
}

fn render_text(root: &Package, bucket: &Bucket) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name: {}\n", root.name));
    output.push_str(&format!("Version: {}\n", format_version(root)));
    output.push_str(&format!("Licenses: {}\n", join_licenses(&root.license)));
    output.push_str("Dependencies:\n\n");

    let rows: Vec<[String; 3]> = bucket
        .values()
        .map(|package| {
            [
                package.name.clone(),
                format_version(package),
                join_licenses(&package.license),
            ]
        })
        .collect();

    output.push_str(&format_table(["Name", "Version", "License"], &rows));
    output
}

fn render_json(root: &Package, bucket: &Bucket) -> Result<String> {
    let mut dependencies = IndexMap::new();
    for package in bucket.values() {
        dependencies.insert(
            package.name.as_str(),
            DependencyEntry {
                version: format_version(package),
                license: &package.license,
            },
        );
    }

    let report = LicenseReport {
        name: &root.name,
        version: format_version(root),
        license: &root.license,
        dependencies,
    };

    let mut rendered = serde_json::to_string_pretty(&report)?;
    rendered.push('\n');
    Ok(rendered)
}

fn join_licenses(licenses: &[String]) -> String {
    if licenses.is_empty() {
        "none".to_string()
    } else {
        licenses.join(", ")
    }
}

fn format_table(headers: [&str; 3], rows: &[[String; 3]]) -> String {
    let mut widths = [headers[0].len(), headers[1].len(), headers[2].len()];
    for row in rows {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &widths, [headers[0], headers[1], headers[2]]);
    for row in rows {
        push_row(&mut output, &widths, [&row[0], &row[1], &row[2]]);
    }
    output
}

fn push_row(output: &mut String, widths: &[usize; 3], cells: [&str; 3]) {
    // Last column stays unpadded so rows carry no trailing whitespace.
    output.push_str(&format!(
        "{:<name_w$}  {:<version_w$}  {}\n",
        cells[0],
        cells[1],
        cells[2],
        name_w = widths[0],
        version_w = widths[1],
    ));
}
