// Stage-file parsing for hypnogram rendering
//
// Stage files are read directly row-by-row rather than through the dataset
// loader: their stage column is text, not numeric, so the header + matrix
// loader does not apply.

use crate::models::{classify_label, LabelClass, Timeline};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// 0-based field holding the 1-based epoch index
const EPOCH_FIELD: usize = 0;
/// 0-based field holding the stage label
const STAGE_FIELD: usize = 4;

#[derive(Error, Debug)]
pub enum HypnogramError {
    #[error("Stage file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read stage file: {0}")]
    Read(#[from] csv::Error),

    #[error("Stage file line {line}: expected at least 5 fields, found {found}")]
    ShortRow { line: usize, found: usize },

    #[error("Stage file line {line}: invalid epoch index '{value}'")]
    InvalidEpochIndex { line: usize, value: String },

    #[error("Stage file line {line}: unrecognized sleep stage '{label}'")]
    UnrecognizedStage { line: usize, label: String },
}

pub type Result<T> = std::result::Result<T, HypnogramError>;

/// Build the time-indexed stage sequence for one subject's recording.
///
/// The header row is skipped. For each data row the stage label (field 4)
/// is classified: scored stages are retained in row order with their hour
/// offset derived from the epoch index (field 0); "NS" and blank labels are
/// disconnect/noise epochs and are dropped without comment; any other label
/// means the file is corrupt and aborts the build.
///
/// The returned timeline may be empty. That is a legitimate terminal state,
/// not an error: callers report it for the subject and skip rendering.
pub fn build(path: &Path, subject_id: u32) -> Result<Timeline> {
    let file = File::open(path)
        .map_err(|_| HypnogramError::FileNotFound(path.display().to_string()))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut timeline = Timeline::new();
    let mut excluded = 0usize;

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based file line, counting the header
        let line = i + 2;

        if record.len() <= STAGE_FIELD {
            return Err(HypnogramError::ShortRow {
                line,
                found: record.len(),
            });
        }

        let label = record.get(STAGE_FIELD).unwrap_or("");
        let stage = match classify_label(label) {
            LabelClass::Stage(stage) => stage,
            LabelClass::Excluded => {
                excluded += 1;
                continue;
            }
            LabelClass::Unrecognized => {
                return Err(HypnogramError::UnrecognizedStage {
                    line,
                    label: label.trim().to_string(),
                });
            }
        };

        let raw_index = record.get(EPOCH_FIELD).unwrap_or("").trim();
        let epoch_index: u32 = raw_index.parse().ok().filter(|&e| e > 0).ok_or_else(|| {
            HypnogramError::InvalidEpochIndex {
                line,
                value: raw_index.to_string(),
            }
        })?;

        timeline.push(epoch_index, stage);
    }

    log::debug!(
        "subject {}: {} scored epochs, {} excluded",
        subject_id,
        timeline.len(),
        excluded
    );

    Ok(timeline)
}
