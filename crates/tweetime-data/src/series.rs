//! CSV time-series loading.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};
use tweetime_models::TimeSeriesPoint;

use crate::error::{DataError, Result};

/// Header of the date column.
pub const DATE_COLUMN: &str = "Date (PST)";

/// Header of the minutes column.
pub const MINUTES_COLUMN: &str = "Time Spent on Tweeting (mins)";

/// Format of values in the date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loads the daily history from a CSV file.
///
/// Rows are returned in file order. The loader does not sort or deduplicate;
/// it rejects a table that is empty, out of chronological order, or that
/// holds a negative or non-finite minutes value.
///
/// # Errors
/// `ResourceNotFound` if the file cannot be opened or read,
/// `MalformedData` if a required column is missing or a row does not parse.
pub fn load_time_series(path: impl AsRef<Path>) -> Result<Vec<TimeSeriesPoint>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let date_idx = column_index(path, &headers, DATE_COLUMN)?;
    let minutes_idx = column_index(path, &headers, MINUTES_COLUMN)?;

    let mut points: Vec<TimeSeriesPoint> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let raw_date = record.get(date_idx).unwrap_or_default();
        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT).map_err(|e| {
            DataError::malformed(path, format!("line {}: invalid date {:?}: {}", line, raw_date, e))
        })?;

        let raw_minutes = record.get(minutes_idx).unwrap_or_default();
        let minutes_spent: f64 = raw_minutes.parse().map_err(|_| {
            DataError::malformed(path, format!("line {}: invalid minutes {:?}", line, raw_minutes))
        })?;

        let point = TimeSeriesPoint::new(date, minutes_spent);
        if !point.is_valid() {
            return Err(DataError::malformed(
                path,
                format!("line {}: minutes must be finite and non-negative", line),
            ));
        }
        if let Some(prev) = points.last() {
            if prev.date > point.date {
                return Err(DataError::malformed(
                    path,
                    format!("line {}: {} is earlier than {}", line, point.date, prev.date),
                ));
            }
        }
        points.push(point);
    }

    if points.is_empty() {
        return Err(DataError::malformed(path, "no data rows"));
    }

    debug!(
        first = %points[0].date,
        last = %points[points.len() - 1].date,
        "Time series span"
    );
    info!(path = %path.display(), rows = points.len(), "Loaded time series");
    Ok(points)
}

fn column_index(path: &Path, headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataError::malformed(path, format!("missing column {:?}", name)))
}

fn csv_error(path: &Path, err: csv::Error) -> DataError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DataError::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => DataError::malformed(path, reason),
    }
}
