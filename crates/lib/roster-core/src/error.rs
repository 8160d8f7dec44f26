use std::{error::Error, fmt, io, path::PathBuf};

/// Failure while loading a member CSV file.
#[derive(Debug)]
pub enum LoadError {
    FileNotFound(PathBuf),
    EmptyFile(PathBuf),
    HeaderError,
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },
    EncodingError,
    PermissionError(PathBuf),
    Parse(String),
    Unexpected(String),
}

impl LoadError {
    /// Classifies an I/O error raised while opening or reading `path`.
    pub(crate) fn from_io(path: PathBuf, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionError(path),
            io::ErrorKind::InvalidData => Self::EncodingError,
            _ => Self::Unexpected(err.to_string()),
        }
    }

    /// Classifies an error reported by the CSV reader.
    pub(crate) fn from_csv(path: PathBuf, err: &csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Utf8 { .. } => Self::EncodingError,
            csv::ErrorKind::Io(io_err) => Self::from_io(path, io_err),
            _ => Self::Parse(err.to_string()),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File '{}' not found.", path.display()),
            Self::EmptyFile(path) => write!(f, "File '{}' is empty.", path.display()),
            Self::HeaderError => write!(f, "Could not read CSV headers."),
            Self::MissingColumns { missing, available } => write!(
                f,
                "Missing required columns: {}\nAvailable columns: {}",
                missing.join(", "),
                available.join(", ")
            ),
            Self::EncodingError => write!(f, "File encoding issue. Try a different encoding."),
            Self::PermissionError(path) => {
                write!(f, "Permission denied to read '{}'.", path.display())
            }
            Self::Parse(message) => write!(f, "CSV parsing error - {message}"),
            Self::Unexpected(message) => write!(f, "Unexpected error - {message}"),
        }
    }
}

impl Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> PathBuf {
        PathBuf::from("members.csv")
    }

    #[test]
    fn io_errors_are_classified_by_kind() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let missing = io::Error::from(io::ErrorKind::NotFound);
        let other = io::Error::other("disk on fire");

        let err = LoadError::from_io(path(), &denied);
        assert!(matches!(err, LoadError::PermissionError(_)));
        assert_eq!(err.to_string(), "Permission denied to read 'members.csv'.");
        assert!(matches!(
            LoadError::from_io(path(), &missing),
            LoadError::FileNotFound(_)
        ));
        assert_eq!(
            LoadError::from_io(path(), &other).to_string(),
            "Unexpected error - disk on fire"
        );
    }

    #[test]
    fn csv_io_errors_keep_their_io_classification() {
        let err = csv::Error::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(
            LoadError::from_csv(path(), &err),
            LoadError::PermissionError(_)
        ));
    }

    #[test]
    fn structural_csv_errors_are_parse_errors() {
        let mut reader = csv::ReaderBuilder::new().from_reader("a,b\n1\n".as_bytes());
        let err = reader
            .records()
            .next()
            .expect("one row")
            .expect_err("row is shorter than the header");

        let classified = LoadError::from_csv(path(), &err);
        assert!(matches!(classified, LoadError::Parse(_)));
        assert!(classified.to_string().starts_with("CSV parsing error - "));
    }
}
