//! Record loader for member CSV files.
//!
//! The file is opened, read fully and closed within a single call; nothing is
//! cached between loads.

use std::{fs::File, path::Path};

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::LoadError;
use crate::models::{FIELD_FIRST_NAME, FIELD_LAST_NAME, MemberRecord};

/// Header columns every member file must carry.
pub const REQUIRED_COLUMNS: [&str; 2] = [FIELD_FIRST_NAME, FIELD_LAST_NAME];

/// Default member file name, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "members.csv";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Loads every data row of the CSV file at `path`, header excluded, and
/// requires the [`REQUIRED_COLUMNS`] in the header.
///
/// # Errors
/// Returns `LoadError` if the file is missing, empty, unreadable, lacks the
/// required columns, or is not valid UTF-8 CSV.
pub fn load_members(path: impl AsRef<Path>) -> Result<Vec<MemberRecord>, LoadError> {
    parse_members(path.as_ref(), &REQUIRED_COLUMNS)
}

/// Reads every data row of the CSV file at `path` without checking which
/// columns the header carries.
///
/// # Errors
/// Returns `LoadError` if the file is missing, empty, unreadable, or is not
/// valid UTF-8 CSV.
pub fn read_members(path: impl AsRef<Path>) -> Result<Vec<MemberRecord>, LoadError> {
    parse_members(path.as_ref(), &[])
}

fn parse_members(path: &Path, required: &[&str]) -> Result<Vec<MemberRecord>, LoadError> {
    let file = File::open(path).map_err(|err| LoadError::from_io(path.to_path_buf(), &err))?;
    let metadata = file
        .metadata()
        .map_err(|err| LoadError::from_io(path.to_path_buf(), &err))?;
    if metadata.len() == 0 {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = read_headers(path, &mut reader)?;
    check_required_columns(&headers, required)?;

    let mut members = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|err| LoadError::from_csv(path.to_path_buf(), &err))?;
        if row.len() > headers.len() {
            debug!(
                row = index + 2,
                surplus = row.len() - headers.len(),
                "dropping values beyond the header"
            );
        }
        members.push(build_record(&headers, &row));
    }

    debug!(path = %path.display(), count = members.len(), "loaded member records");
    Ok(members)
}

fn read_headers<R: std::io::Read>(
    path: &Path,
    reader: &mut csv::Reader<R>,
) -> Result<Vec<String>, LoadError> {
    let record = reader
        .headers()
        .map_err(|err| LoadError::from_csv(path.to_path_buf(), &err))?;
    if record.is_empty() {
        return Err(LoadError::HeaderError);
    }

    Ok(record
        .iter()
        .enumerate()
        .map(|(index, name)| {
            if index == 0 {
                name.trim_start_matches(BYTE_ORDER_MARK).to_string()
            } else {
                name.to_string()
            }
        })
        .collect())
}

fn check_required_columns(headers: &[String], required: &[&str]) -> Result<(), LoadError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .map(|column| (*column).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns {
            missing,
            available: headers.to_vec(),
        })
    }
}

fn build_record(headers: &[String], row: &StringRecord) -> MemberRecord {
    headers
        .iter()
        .zip(row.iter())
        .map(|(name, value)| (name.as_str(), value))
        .collect()
}
