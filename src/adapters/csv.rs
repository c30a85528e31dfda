//! CSV adapter: Implementation of DatasetSource.
//!
//! Reads the cleaned Nigerian medical-insurance dataset. The file must carry
//! a header row with at least the columns age, gender, state, bmi, children,
//! smoker, hospital_bill; column order is irrelevant. Bill values are Naira.

use std::path::{Path, PathBuf};

use crate::domain::DatasetRow;
use crate::ports::DatasetSource;

/// Error type for dataset operations.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed row at line {line}: {message}")]
    Parse { line: u64, message: String },
}

/// CSV-backed dataset source.
pub struct CsvDataset {
    path: PathBuf,
}

impl CsvDataset {
    /// Create a dataset source for the given CSV file.
    ///
    /// The file is not opened until [`DatasetSource::load`] is called.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvDataset {
    type Error = DatasetError;

    fn load(&self) -> Result<Vec<DatasetRow>, Self::Error> {
        let file = std::fs::File::open(&self.path)?;
        let mut reader = ::csv::Reader::from_reader(file);

        let mut rows = Vec::new();
        for result in reader.deserialize::<DatasetRow>() {
            match result {
                Ok(row) => rows.push(row),
                Err(e) => {
                    let line = e.position().map_or(0, |p| p.line());
                    return Err(DatasetError::Parse {
                        line,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!("Loaded {} dataset rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::domain::{SmokerStatus, State};

    const HEADER: &str = "age,gender,state,bmi,children,smoker,hospital_bill";

    fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
        writeln!(file, "{HEADER}").expect("Should write header");
        for line in lines {
            writeln!(file, "{line}").expect("Should write row");
        }
        file
    }

    #[test]
    fn test_load_preserves_file_order() {
        let file = write_csv(&[
            "45,Male,Lagos,28.4,2,Yes,220500.75",
            "23,Female,Edo,19.1,0,No,43200.00",
            "61,Female,Kano,31.0,4,No,152300.50",
        ]);

        let rows = CsvDataset::new(file.path()).load().expect("Should load");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].age, 45);
        assert_eq!(rows[0].smoker, SmokerStatus::Yes);
        assert_eq!(rows[1].state, State::Edo);
        assert_eq!(rows[2].children, 4);
        assert!((rows[1].hospital_bill - 43_200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvDataset::new("/nonexistent/insurance.csv")
            .load()
            .expect_err("Should fail");
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let file = write_csv(&[
            "45,Male,Lagos,28.4,2,Yes,220500.75",
            "not-a-number,Male,Lagos,28.4,2,Yes,100.0",
        ]);

        let err = CsvDataset::new(file.path()).load().expect_err("Should fail");
        match err {
            DatasetError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_domain_smoker_rejected() {
        let file = write_csv(&["45,Male,Lagos,28.4,2,Sometimes,220500.75"]);
        let err = CsvDataset::new(file.path()).load().expect_err("Should fail");
        assert!(matches!(err, DatasetError::Parse { .. }));
    }
}
