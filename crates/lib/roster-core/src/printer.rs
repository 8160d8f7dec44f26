//! Name printer for the `display-names` utility.

use std::io::{self, Write};
use std::path::Path;

use crate::error::LoadError;
use crate::loader::load_members;
use crate::models::MemberRecord;

/// One rendered line of a name listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLine {
    Name(String),
    /// A row with neither a first nor a last name. Holds the 1-based file row,
    /// counting the header as row 1.
    EmptyName { row: usize },
}

/// Names rendered from a loaded member set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameListing {
    pub lines: Vec<NameLine>,
    pub displayed: usize,
}

impl NameListing {
    #[must_use]
    pub fn from_records(records: &[MemberRecord]) -> Self {
        let mut listing = Self::default();
        for (index, record) in records.iter().enumerate() {
            let first_name = record.first_name().unwrap_or_default().trim();
            let last_name = record.last_name().unwrap_or_default().trim();

            if first_name.is_empty() && last_name.is_empty() {
                listing.lines.push(NameLine::EmptyName { row: index + 2 });
            } else {
                listing
                    .lines
                    .push(NameLine::Name(format!("{first_name} {last_name}")));
                listing.displayed += 1;
            }
        }
        listing
    }

    /// Writes every line followed by the displayed total.
    ///
    /// # Errors
    /// Returns any error raised by `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            match line {
                NameLine::Name(name) => writeln!(out, "{name}")?,
                NameLine::EmptyName { row } => {
                    writeln!(out, "Warning: Empty name found at row {row}")?;
                }
            }
        }
        writeln!(out, "\nTotal members displayed: {}", self.displayed)
    }
}

/// Loads `path` and prints its member names to `out`.
///
/// Returns the number of names displayed.
///
/// # Errors
/// Returns `LoadError` if loading fails or `out` cannot be written.
pub fn print_names<W: Write>(path: impl AsRef<Path>, out: &mut W) -> Result<usize, LoadError> {
    let records = load_members(path)?;
    let listing = NameListing::from_records(&records);
    listing
        .write_to(out)
        .map_err(|err| LoadError::Unexpected(err.to_string()))?;
    Ok(listing.displayed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(first: &str, last: &str) -> MemberRecord {
        [("first_name", first), ("last_name", last)]
            .into_iter()
            .collect()
    }

    #[test]
    fn trims_names_and_flags_blank_rows_by_file_row() {
        let records = vec![
            record("  Ada ", "Lovelace"),
            record(" ", ""),
            record("", "Hopper"),
        ];

        let listing = NameListing::from_records(&records);

        assert_eq!(listing.displayed, 2);
        assert_eq!(
            listing.lines,
            vec![
                NameLine::Name("Ada Lovelace".to_string()),
                NameLine::EmptyName { row: 3 },
                NameLine::Name(" Hopper".to_string()),
            ]
        );
    }

    #[test]
    fn writes_total_after_a_blank_line() {
        let listing = NameListing::from_records(&[record("Ada", "Lovelace")]);
        let mut out = Vec::new();
        listing.write_to(&mut out).expect("write to vec");

        let text = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(text, "Ada Lovelace\n\nTotal members displayed: 1\n");
    }
}
