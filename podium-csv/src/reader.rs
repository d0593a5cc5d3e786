use std::fs::File;
use std::io::Read;
use std::path::Path;

use podium_core::normalize::normalize_row;
use podium_types::{ColumnMap, PodiumError, Record};

/// Read all data rows from a CSV source, skipping the header row.
///
/// Rows may have differing lengths (spreadsheet exports often truncate
/// trailing empty cells), so the reader is flexible. Cells are trimmed.
///
/// # Errors
/// Returns `PodiumError::Csv` if the underlying reader fails.
pub fn rows_from_reader<R: Read>(source: R) -> Result<Vec<Vec<String>>, PodiumError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| PodiumError::csv(e.to_string()))?;
        rows.push(row.iter().map(|c| c.trim().to_string()).collect());
    }
    Ok(rows)
}

/// Normalize CSV data rows into records.
///
/// Sequence indices are 1-based in file order over the data rows and survive
/// filtering, so they remain a stable tie-break even when invalid rows are
/// dropped in between.
///
/// # Errors
/// Returns `PodiumError::Csv` if the underlying reader fails. Row-level
/// validation failures are not errors; those rows are silently dropped.
pub fn records_from_reader<R: Read>(
    source: R,
    columns: &ColumnMap,
) -> Result<Vec<Record>, PodiumError> {
    let rows = rows_from_reader(source)?;
    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let seq = i + 1;
        match normalize_row(seq, row, columns) {
            Some(record) => records.push(record),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(seq, "dropping row without a valid score and date");
            }
        }
    }
    Ok(records)
}

/// Load and normalize one leaderboard's CSV file.
///
/// # Errors
/// Returns `PodiumError::Io` if the file cannot be opened and
/// `PodiumError::Csv` if it cannot be parsed.
pub fn load_records(path: &Path, columns: &ColumnMap) -> Result<Vec<Record>, PodiumError> {
    let file = File::open(path)
        .map_err(|e| PodiumError::io(format!("{}: {e}", path.display())))?;
    records_from_reader(file, columns)
}
