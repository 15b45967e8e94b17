//! Length-stats report assembly and serialization
//!
//! Scans JSONL files matching a glob, summarizes the text-length samples
//! per file and overall, and renders a deterministic TOML report. The
//! overall summary is always computed from the concatenation of every
//! file's raw samples, never from the per-file summaries.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use glob::glob;
use log::{info, warn};

use crate::error::PrepError;
use crate::jsonl::text_lengths;
use crate::stats::{Summary, summarize};

/// Per-file and overall length statistics.
#[derive(Debug)]
pub struct Report {
    pub overall: Summary,
    /// Keyed by filename; BTreeMap ordering keeps the rendered sections in
    /// ascending lexical order regardless of filesystem enumeration order.
    pub files: BTreeMap<String, Summary>,
}

impl Report {
    /// Render the report as TOML text.
    ///
    /// Identical inputs produce byte-identical output: section order is
    /// fixed, key order is fixed, and number formatting is exact.
    pub fn to_toml_string(&self) -> String {
        let mut lines = vec!["[overall]".to_string()];
        push_section(&mut lines, &self.overall);

        for (fname, stats) in &self.files {
            lines.push(format!("[files.\"{}\"]", fname));
            push_section(&mut lines, stats);
        }

        lines.join("\n")
    }
}

// Key order is fixed: count, min, max, mean, std, p25, p50, p75.
fn push_section(lines: &mut Vec<String>, stats: &Summary) {
    lines.push(format!("count = {}", stats.count));
    let floats = [
        ("min", stats.min),
        ("max", stats.max),
        ("mean", stats.mean),
        ("std", stats.std),
        ("p25", stats.p25),
        ("p50", stats.p50),
        ("p75", stats.p75),
    ];
    for (key, value) in floats {
        lines.push(format!("{} = {}", key, fmt_stat(value)));
    }
    lines.push(String::new());
}

/// Format a statistic for the report: two decimal places with trailing
/// zeros and a trailing decimal point stripped (`12.50` -> `12.5`,
/// `12.00` -> `12`). NaN renders as the TOML float literal `nan`.
fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0');
    s.trim_end_matches('.').to_string()
}

/// Scan every file matching `pattern` and build the report.
///
/// A file that cannot be read is logged and skipped; the report contains
/// every file that was successfully read plus the overall aggregate.
pub fn build_report(pattern: &str, field: &str) -> Result<Report, PrepError> {
    let mut files = Vec::new();
    for entry in glob(pattern)? {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => warn!("glob match error: {}", e),
        }
    }

    if files.is_empty() {
        warn!("No files matched pattern: {}", pattern);
    } else {
        info!("Found {} file(s) for pattern {}", files.len(), pattern);
    }

    let mut file_stats = BTreeMap::new();
    let mut all_lengths: Vec<usize> = Vec::new();

    for path in &files {
        let lengths = match text_lengths(path, field) {
            Ok(lengths) => lengths,
            Err(e) => {
                warn!("skip {}: {}", path.display(), e);
                continue;
            }
        };

        let fname = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        file_stats.insert(fname, summarize(&lengths));
        all_lengths.extend(lengths);
    }

    Ok(Report {
        overall: summarize(&all_lengths),
        files: file_stats,
    })
}

/// Write the rendered report, creating parent directories as needed.
pub fn write_report(report: &Report, out_path: &Path) -> Result<(), PrepError> {
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, report.to_toml_string())?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
