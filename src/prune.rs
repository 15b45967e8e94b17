//! Length-based record filtering
//!
//! Drops JSONL records whose text field, after trimming, exceeds a
//! character cutoff. Survivors are written line-for-line to a separate
//! directory; malformed lines are skipped silently, same as the reporter.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::PrepError;
use crate::jsonl::{open_lines, parse_record};

/// Records kept vs. dropped while pruning one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneOutcome {
    pub kept: usize,
    pub dropped: usize,
}

/// Whether a record survives pruning.
///
/// A record is kept when it has a string `field` whose trimmed character
/// count (Unicode scalar values) is at or below `cutoff`. Records without
/// a string field are dropped.
pub fn keep(record: &Value, field: &str, cutoff: usize) -> bool {
    let Some(text) = record.get(field).and_then(Value::as_str) else {
        return false;
    };
    text.trim().chars().count() <= cutoff
}

/// Prune one JSONL file into `outdir`, preserving the filename.
///
/// Surviving lines are written as read (after lossy decoding), so the
/// output stays byte-comparable with the input. Returns the output path
/// and the kept/dropped counts.
pub fn prune_file(
    inpath: &Path,
    outdir: &Path,
    field: &str,
    cutoff: usize,
) -> Result<(PathBuf, PruneOutcome), PrepError> {
    let file_name = inpath.file_name().unwrap_or_default();
    let outpath = outdir.join(file_name);

    fs::create_dir_all(outdir)?;
    let mut writer = BufWriter::new(File::create(&outpath)?);

    let mut outcome = PruneOutcome { kept: 0, dropped: 0 };

    for line in open_lines(inpath)? {
        let line = line?;
        let Some(record) = parse_record(&line) else {
            continue;
        };

        if keep(&record, field, cutoff) {
            writer.write_all(line.trim().as_bytes())?;
            writer.write_all(b"\n")?;
            outcome.kept += 1;
        } else {
            outcome.dropped += 1;
        }
    }

    writer.flush()?;
    Ok((outpath, outcome))
}

#[cfg(test)]
#[path = "prune_tests.rs"]
mod prune_tests;
