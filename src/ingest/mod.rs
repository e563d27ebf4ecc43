//! CSV ingestion of timekeeping exports.

mod parse;
mod raw;

use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use chrono::NaiveDate;
use raw::{RawRecord, check_headers};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Load every record of the CSV at `path`, in file order.
pub fn load_records(path: &Path, delimiter: char) -> AppResult<Vec<TimeRecord>> {
    if !path.exists() {
        return Err(AppError::DataFileNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let records = read_records(file, delimiter)?;

    info!(path = %path.display(), records = records.len(), "timekeeping data loaded");
    Ok(records)
}

/// Parse records from any reader. The first line must be the header and
/// name every required column.
pub fn read_records<R: Read>(reader: R, delimiter: char) -> AppResult<Vec<TimeRecord>> {
    if !delimiter.is_ascii() {
        return Err(AppError::Config(format!(
            "CSV delimiter must be an ASCII character, got '{delimiter}'"
        )));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .trim(csv::Trim::All)
        .from_reader(reader);

    check_headers(rdr.headers()?)?;

    let mut records = Vec::new();

    for (i, row) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = row?;
        records.push(raw.validate(i + 1)?);
    }

    debug!(rows = records.len(), "CSV rows parsed");
    Ok(records)
}

/// Keep the records whose pay period ends inside `bounds` (inclusive).
pub fn filter_by_end_date(
    records: Vec<TimeRecord>,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<TimeRecord> {
    match bounds {
        None => records,
        Some((first, last)) => {
            let before = records.len();
            let kept: Vec<TimeRecord> = records
                .into_iter()
                .filter(|r| r.end_date >= first && r.end_date <= last)
                .collect();
            debug!(%first, %last, before, after = kept.len(), "range filter applied");
            kept
        }
    }
}
