//! Raw dataset download and JSONL export
//!
//! Retrieves the per-subset CSV files over HTTPS and rewrites them as
//! line-delimited JSON. Rows that fail their subset transform are counted
//! and skipped; a download failure skips the whole subset/split unit.

pub mod subset;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PrepError;

pub use subset::{RawRecord, Row, Subset};

/// Dataset splits published for every subset.
pub const SPLITS: [&str; 3] = ["train", "test", "test_hard"];

/// Rows written vs. rows skipped for one subset/split export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportCounts {
    pub ok: usize,
    pub skipped: usize,
}

/// URL of one subset/split CSV file.
pub fn csv_url(base_url: &str, subset: Subset, split: &str) -> String {
    format!("{}/{}/{}.csv", base_url.trim_end_matches('/'), subset, split)
}

/// Download a CSV file, returning its decoded text.
///
/// Non-2xx responses are errors. Invalid UTF-8 in the body is replaced
/// rather than failing the download.
pub fn download_csv(url: &str) -> Result<String, PrepError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.text()?)
}

/// Rewrite one split's CSV text as JSONL at `out_path`.
///
/// The CSV header row drives column lookup, so quoted commas and embedded
/// newlines survive intact. An unreadable header row fails the whole
/// split; rows that fail to decode or fail the subset transform are
/// counted as skipped and the export keeps going.
pub fn export_split(
    csv_text: &str,
    subset: Subset,
    split: &str,
    out_path: &Path,
) -> Result<ExportCounts, PrepError> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    reader.headers()?;

    let file = File::create(out_path)?;
    let mut writer = BufWriter::new(file);

    let mut counts = ExportCounts { ok: 0, skipped: 0 };

    for result in reader.deserialize::<Row>() {
        let row = match result {
            Ok(row) => row,
            Err(_) => {
                counts.skipped += 1;
                continue;
            }
        };

        match subset.select(split, &row) {
            Ok(record) => {
                serde_json::to_writer(&mut writer, &record)?;
                writer.write_all(b"\n")?;
                counts.ok += 1;
            }
            Err(_) => counts.skipped += 1,
        }
    }

    writer.flush()?;
    Ok(counts)
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod fetch_tests;
