use thiserror::Error;

/// Errors surfaced by the preparation utilities.
///
/// Record-level problems (malformed JSONL lines, bad rows) are never
/// represented here; they are skipped and counted at the call site.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV decode failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encode failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Per-row failures during a fetch transform. Rows that fail are counted
/// as skipped and omitted from the output; the fetch itself continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("row has no non-empty columns")]
    EmptyRow,

    #[error("label column missing")]
    MissingLabel,

    #[error("label not an integer: {0:?}")]
    BadLabel(String),

    #[error("label out of range: {0}")]
    LabelOutOfRange(i64),
}
