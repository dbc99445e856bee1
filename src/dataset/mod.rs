// Tabular loader for the psychological assessments CSV
// Header row + all-numeric matrix; columns are addressed by exact header name

use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Assessments file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read assessments file: {0}")]
    Read(#[from] csv::Error),

    #[error("Column '{0}' not found in assessments table")]
    MissingColumn(String),

    #[error("Row {row}, column '{column}': invalid number '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Assessments table is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, DatasetError>;

/// In-memory assessments table: one row per participant, numeric cells only
#[derive(Debug, Clone)]
pub struct AssessmentTable {
    header: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl AssessmentTable {
    /// Load a header + numeric matrix CSV
    ///
    /// Every data cell must parse as a number; the stage files consumed by
    /// the hypnogram builder do not satisfy this and have their own reader.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|_| DatasetError::FileNotFound(path.display().to_string()))?;
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

        let header: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record?;
            let mut row = Vec::with_capacity(header.len());
            for (j, field) in record.iter().enumerate() {
                let value: f64 = field.trim().parse().map_err(|_| {
                    DatasetError::InvalidNumber {
                        row: i + 1,
                        column: header.get(j).cloned().unwrap_or_else(|| j.to_string()),
                        value: field.trim().to_string(),
                    }
                })?;
                row.push(value);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        log::debug!("loaded {} rows, {} columns", rows.len(), header.len());
        Ok(Self { header, rows })
    }

    /// Number of participants (data rows)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// All values of a named column, in row order
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Row-aligned (before, after) pairs from two named columns
    pub fn paired(&self, before: &str, after: &str) -> Result<Vec<(f64, f64)>> {
        let b = self.column_index(before)?;
        let a = self.column_index(after)?;
        Ok(self.rows.iter().map(|row| (row[b], row[a])).collect())
    }

    fn column_index(&self, name: &str) -> Result<usize> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    }
}
