//! Row validation: raw cells in, typed [`Record`]s or rejections out.
//!
//! Rejection is silent by design: historical spreadsheets carry rows with
//! missing dates or unparsed scores, and the tolerance policy is to exclude
//! them from the replay rather than fail the batch.

use chrono::NaiveDate;
use podium_types::{ColumnMap, Record};

/// Parse a decimal score, accepting `,` as the decimal separator.
///
/// Empty or unparsable input yields `None`.
#[must_use]
pub fn parse_score(value: &str) -> Option<f64> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }
    v.replace(',', ".").parse::<f64>().ok()
}

/// Parse a date in the fixed `DD/MM/YYYY` spreadsheet format.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d/%m/%Y").ok()
}

/// Fetch a 1-based cell, if the row is long enough.
fn cell<'a>(row: &'a [String], col: usize) -> Option<&'a str> {
    if col == 0 {
        return None;
    }
    row.get(col - 1).map(String::as_str)
}

fn aux_score(row: &[String], col: Option<usize>) -> Option<f64> {
    col.and_then(|c| cell(row, c)).and_then(parse_score)
}

/// Normalize one raw row into a [`Record`].
///
/// Returns `None` when the row is shorter than the mandatory columns, or when
/// the score or date cell fails to parse. Auxiliary fields (link, event
/// splits, bonus, photo flag) are filled when present and left empty
/// otherwise; they never gate validity.
///
/// Pure function of `(seq, row, columns)`.
#[must_use]
pub fn normalize_row(seq: usize, row: &[String], columns: &ColumnMap) -> Option<Record> {
    if row.len() < columns.min_len() {
        #[cfg(feature = "tracing")]
        tracing::debug!(seq, len = row.len(), "row shorter than mandatory columns");
        return None;
    }
    let score = cell(row, columns.score).and_then(parse_score)?;
    let date = cell(row, columns.date).and_then(parse_date)?;

    let player = cell(row, columns.player).unwrap_or("").trim().to_string();
    let link = cell(row, columns.link).unwrap_or("").trim().to_string();
    let photo = columns
        .photo
        .and_then(|c| cell(row, c))
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("y"));

    Some(Record {
        seq,
        player,
        score,
        date,
        link,
        photo,
        event_scores: [
            aux_score(row, columns.events[0]),
            aux_score(row, columns.events[1]),
            aux_score(row, columns.events[2]),
        ],
        bonus: aux_score(row, columns.bonus),
    })
}
