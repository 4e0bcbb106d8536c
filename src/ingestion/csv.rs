//! CSV loading of the launch record.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::dates::{parse_date, parse_time};
use crate::error::{LoadError, LoadResult};
use crate::types::{Column, LaunchRecord, LaunchTable, MissionStatus};

/// Counters for cells that could not be typed and were kept as missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialDataCounts {
    /// Rows whose date was empty or unparseable.
    pub undated_rows: usize,
    /// Rows whose price was empty or unparseable.
    pub unpriced_rows: usize,
}

/// Load a CSV file into an in-memory [`LaunchTable`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain every column in [`Column::REQUIRED`] (order can differ). `Time` is optional.
/// - Unparseable dates, times and prices become missing values; the row is kept.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> LoadResult<LaunchTable> {
    load_csv_with_counts(path).map(|(table, _)| table)
}

/// Like [`load_csv_from_path`], also returning how many cells were absorbed as missing.
pub fn load_csv_with_counts(path: impl AsRef<Path>) -> LoadResult<(LaunchTable, PartialDataCounts)> {
    // Open separately so a missing file surfaces as `LoadError::Io`.
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    load_csv_from_reader_with_counts(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<LaunchTable> {
    load_csv_from_reader_with_counts(rdr).map(|(table, _)| table)
}

fn load_csv_from_reader_with_counts<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> LoadResult<(LaunchTable, PartialDataCounts)> {
    let headers = rdr.headers()?.clone();

    // Map columns -> CSV indexes (allows re-ordered columns).
    let mut col_idxs: HashMap<Column, usize> = HashMap::with_capacity(Column::REQUIRED.len() + 1);
    for column in Column::REQUIRED {
        match headers.iter().position(|h| h.trim() == column.header()) {
            Some(idx) => {
                col_idxs.insert(column, idx);
            }
            None => {
                return Err(LoadError::MissingColumn {
                    message: format!(
                        "missing required column '{}'. headers={:?}",
                        column.header(),
                        headers.iter().collect::<Vec<_>>()
                    ),
                });
            }
        }
    }
    if let Some(idx) = headers.iter().position(|h| h.trim() == Column::Time.header()) {
        col_idxs.insert(Column::Time, idx);
    }

    let mut counts = PartialDataCounts::default();
    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let cell = |column: Column| cell_at(&row, &col_idxs, column);

        let launch_date = parse_date(cell(Column::Date));
        if launch_date.is_none() {
            counts.undated_rows += 1;
        }
        let price = parse_price(cell(Column::Price));
        if price.is_none() {
            counts.unpriced_rows += 1;
        }

        records.push(LaunchRecord::new(
            cell(Column::Company),
            cell(Column::Location),
            launch_date,
            parse_time(cell(Column::Time)),
            cell(Column::Rocket),
            cell(Column::Mission),
            cell(Column::RocketStatus),
            price,
            MissionStatus::parse(cell(Column::MissionStatus)),
        ));
    }

    tracing::debug!(
        rows = records.len(),
        undated_rows = counts.undated_rows,
        unpriced_rows = counts.unpriced_rows,
        "loaded launch records"
    );

    Ok((LaunchTable::new(records), counts))
}

fn cell_at<'r>(row: &'r csv::StringRecord, col_idxs: &HashMap<Column, usize>, column: Column) -> &'r str {
    col_idxs
        .get(&column)
        .and_then(|&idx| row.get(idx))
        .map(str::trim)
        .unwrap_or("")
}

/// Prices may carry thousands separators (`"5,000.0"`).
fn parse_price(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}
