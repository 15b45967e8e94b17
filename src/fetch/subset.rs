//! Per-subset row transforms
//!
//! Each ETHICS subset ships CSV with its own column shape. A `Subset` pairs
//! the subset name with a pure transform from one CSV row to one normalized
//! output record; every transform shares the same skip-and-count error
//! contract via `RowError`.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::RowError;

/// One CSV row, keyed by header. Missing optional columns read as empty
/// strings, matching how the upstream files omit values.
pub type Row = HashMap<String, String>;

/// The five ETHICS dataset subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subset {
    Commonsense,
    Deontology,
    Justice,
    Utilitarianism,
    Virtue,
}

impl Subset {
    pub const ALL: [Subset; 5] = [
        Subset::Commonsense,
        Subset::Deontology,
        Subset::Justice,
        Subset::Utilitarianism,
        Subset::Virtue,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subset::Commonsense => "commonsense",
            Subset::Deontology => "deontology",
            Subset::Justice => "justice",
            Subset::Utilitarianism => "utilitarianism",
            Subset::Virtue => "virtue",
        }
    }

    /// Transform one CSV row into the subset's output record.
    ///
    /// A row whose columns are all empty, or whose label is missing,
    /// unparseable, or outside 0..=5, is a `RowError`; callers count it
    /// and move on.
    pub fn select(&self, split: &str, row: &Row) -> Result<RawRecord, RowError> {
        if row.values().all(|v| v.is_empty()) {
            return Err(RowError::EmptyRow);
        }

        let subset = self.name();
        let split = split.to_string();

        match self {
            Subset::Commonsense => Ok(RawRecord::Commonsense {
                subset,
                split,
                text: first_non_empty(row, &["input", "text", "scenario"]),
                label: label(row)?,
            }),
            Subset::Deontology => Ok(RawRecord::Deontology {
                subset,
                split,
                scenario: first_non_empty(row, &["scenario", "text"]),
                label: label(row)?,
                excuse: column(row, "excuse"),
            }),
            Subset::Justice => Ok(RawRecord::Justice {
                subset,
                split,
                scenario: first_non_empty(row, &["scenario", "text"]),
                label: label(row)?,
            }),
            // headers: baseline,less_pleasant
            Subset::Utilitarianism => Ok(RawRecord::Utilitarianism {
                subset,
                split,
                baseline: column(row, "baseline"),
                less_pleasant: column(row, "less_pleasant"),
            }),
            Subset::Virtue => Ok(RawRecord::Virtue {
                subset,
                split,
                scenario: first_non_empty(row, &["scenario", "text"]),
                label: label(row)?,
            }),
        }
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One normalized output record. Untagged: each variant serializes as a
/// plain object with `subset` and `split` leading.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawRecord {
    Commonsense {
        subset: &'static str,
        split: String,
        text: String,
        label: i64,
    },
    Deontology {
        subset: &'static str,
        split: String,
        scenario: String,
        label: i64,
        excuse: String,
    },
    Justice {
        subset: &'static str,
        split: String,
        scenario: String,
        label: i64,
    },
    Utilitarianism {
        subset: &'static str,
        split: String,
        baseline: String,
        less_pleasant: String,
    },
    Virtue {
        subset: &'static str,
        split: String,
        scenario: String,
        label: i64,
    },
}

fn column(row: &Row, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

fn first_non_empty(row: &Row, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|k| row.get(*k))
        .find(|v| !v.is_empty())
        .cloned()
        .unwrap_or_default()
}

/// Parse and range-check the label column. Labels in these subsets are
/// small non-negative class ids; anything outside 0..=5 marks a broken row.
fn label(row: &Row) -> Result<i64, RowError> {
    let raw = row.get("label").ok_or(RowError::MissingLabel)?;
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| RowError::BadLabel(raw.clone()))?;
    if !(0..=5).contains(&value) {
        return Err(RowError::LabelOutOfRange(value));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "subset_tests.rs"]
mod subset_tests;
