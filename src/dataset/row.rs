//! Labeled color table parsing
//!
//! Rows have the layout `R,G,B,Label`. Extra columns are ignored. Numeric
//! channels outside [0, 255] are clamped; non-numeric channels, missing
//! columns and empty labels make the row malformed.

use serde::Serialize;

use crate::color::RgbSample;
use crate::{NamingError, Result};

/// One labeled color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetRow {
    pub sample: RgbSample,
    pub label: String,
}

impl DatasetRow {
    pub fn new(sample: RgbSample, label: impl Into<String>) -> Self {
        Self {
            sample,
            label: label.into(),
        }
    }
}

/// Parse a single table line. `line` is the 1-based line number used in errors.
pub fn parse_row(line: usize, text: &str, delimiter: char) -> Result<DatasetRow> {
    let columns: Vec<&str> = text.trim_end_matches(['\r', '\n']).split(delimiter).collect();
    if columns.len() < 4 {
        return Err(NamingError::malformed(
            line,
            format!("expected 4 columns, found {}", columns.len()),
        ));
    }

    let channel = |index: usize, name: &str| -> Result<i64> {
        let raw = columns[index].trim();
        raw.parse::<i64>().map_err(|_| {
            NamingError::malformed(line, format!("non-numeric {} channel '{}'", name, raw))
        })
    };

    let r = channel(0, "red")?;
    let g = channel(1, "green")?;
    let b = channel(2, "blue")?;

    let label = columns[3].trim();
    if label.is_empty() {
        return Err(NamingError::malformed(line, "empty label"));
    }

    Ok(DatasetRow::new(RgbSample::from_clamped(r, g, b), label))
}

/// Parse every non-blank line of a table.
///
/// Yields one result per row so callers can skip and report malformed
/// rows without stopping.
pub fn parse_rows(
    text: &str,
    delimiter: char,
    has_header: bool,
) -> impl Iterator<Item = Result<DatasetRow>> + '_ {
    text.lines()
        .enumerate()
        .skip(usize::from(has_header))
        .filter(|(_, line)| !line.trim().is_empty())
        .map(move |(index, line)| parse_row(index + 1, line, delimiter))
}

/// Make a label safe to use as a directory and file name.
///
/// Whitespace and path separators become `separator`. A label made only of
/// dots has its dots replaced too, so it cannot name `.` or `..`. If the
/// result is still only dots (a `.` separator), it is returned empty.
pub fn sanitize_label(label: &str, separator: &str) -> String {
    let mut sanitized = String::with_capacity(label.len());
    for ch in label.trim().chars() {
        if ch.is_whitespace() || ch == '/' || ch == '\\' {
            sanitized.push_str(separator);
        } else {
            sanitized.push(ch);
        }
    }

    if !sanitized.is_empty() && sanitized.chars().all(|c| c == '.') {
        sanitized = sanitized.replace('.', separator);
        if sanitized.chars().all(|c| c == '.') {
            sanitized.clear();
        }
    }
    sanitized
}
