//! Line-delimited JSON input plumbing
//!
//! Shared by the length-stats reporter and the pruner: a lossy line reader
//! that tolerates invalid UTF-8, and the text-length extraction used to
//! build sample sets.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::error::PrepError;

/// Iterator over the lines of a reader, decoding each line lossily.
///
/// Raw dataset files occasionally contain byte sequences that are not valid
/// UTF-8; those bytes are replaced rather than failing the whole file.
/// Trailing `\n` / `\r\n` are stripped from each yielded line.
pub struct LossyLines<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                if self.buffer.last() == Some(&b'\n') {
                    self.buffer.pop();
                    if self.buffer.last() == Some(&b'\r') {
                        self.buffer.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buffer).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Open a file as a lossy line iterator.
pub fn open_lines(path: &Path) -> Result<LossyLines<BufReader<File>>, PrepError> {
    let file = File::open(path)?;
    Ok(LossyLines::new(BufReader::new(file)))
}

/// Parse a single JSONL line into a JSON object, or `None` when the line
/// should be skipped (blank or unparseable). Malformed lines are expected
/// noise in the raw files and never surface as errors.
pub fn parse_record(line: &str) -> Option<Value> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

/// Collect the character lengths of a string field across a JSONL file.
///
/// Lengths count Unicode scalar values (`chars().count()`), not bytes, and
/// the field value is not trimmed. Records where the field is absent or not
/// a string are skipped, as are blank and malformed lines.
pub fn text_lengths(path: &Path, field: &str) -> Result<Vec<usize>, PrepError> {
    let mut out = Vec::new();

    for line in open_lines(path)? {
        let line = line?;
        let Some(record) = parse_record(&line) else {
            continue;
        };
        if let Some(text) = record.get(field).and_then(Value::as_str) {
            out.push(text.chars().count());
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod jsonl_tests;
