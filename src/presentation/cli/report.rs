//! Findings rendering
//!
//! Table and JSON output for the `audit` command, plus the exit status the
//! binary reports.

use crate::domain::entities::Finding;
use console::style;
use std::path::{self, Path};

/// Exit status for a clean dataset
pub const EXIT_CLEAN: u8 = 0;
/// Exit status when at least one finding was reported
pub const EXIT_FINDINGS: u8 = 1;
/// Exit status when the audit itself could not run
pub const EXIT_FAILURE: u8 = 2;

const HEADERS: [&str; 5] = [
    "File Path (Relative)",
    "Checker",
    "Issue Type",
    "Severity",
    "Description",
];

pub fn exit_code(findings: &[Finding]) -> u8 {
    if findings.is_empty() {
        EXIT_CLEAN
    } else {
        EXIT_FINDINGS
    }
}

/// Shows `file_path` relative to the audited root when it lies beneath it
pub fn display_path(file_path: &str, base: &Path) -> String {
    let (Ok(file), Ok(base)) = (path::absolute(file_path), path::absolute(base)) else {
        return file_path.to_string();
    };

    match file.strip_prefix(&base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => file_path.to_string(),
    }
}

/// Renders findings as a titled, column-aligned table
pub fn render_table(findings: &[Finding], base: &Path) -> String {
    let rows: Vec<[String; 5]> = findings
        .iter()
        .map(|f| {
            [
                display_path(f.file_path(), base),
                f.checker_name().to_string(),
                f.issue_type().to_string(),
                f.severity().to_string(),
                f.message().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule_len = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w))
        .collect();

    let mut out = format!("{}\n", style("Dataset Integrity Issues").bold());
    out.push_str(&format!("{}\n", style(header.join(" | ").trim_end()).bold()));
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for row in &rows {
        let cells = [
            style(pad(&row[0], widths[0])).cyan().to_string(),
            style(pad(&row[1], widths[1])).green().to_string(),
            style(pad(&row[2], widths[2])).magenta().to_string(),
            style(pad(&row[3], widths[3])).red().to_string(),
            row[4].clone(),
        ];
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }

    out
}

/// Renders findings as a pretty-printed JSON array
pub fn render_json(findings: &[Finding]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(findings)
}

fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}
