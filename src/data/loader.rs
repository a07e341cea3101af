use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Sample, SampleTable};

/// Required header names of the fixed input layout.
pub const X_COLUMN: &str = "X";
pub const Y_COLUMN: &str = "F(X)";

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Failures of the table loader. `FileNotFound` is checked before any
/// parsing is attempted; everything else is a parse condition.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("opening '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {source}")]
    Parse {
        /// 1-based data row number (header excluded).
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One deserialized data row. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "F(X)")]
    y: f64,
}

/// Load the sample table from a CSV file with `X` and `F(X)` columns.
pub fn load_table(path: &Path) -> Result<SampleTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader.headers().map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    for required in [X_COLUMN, Y_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut samples = Vec::new();
    for (i, result) in reader.deserialize::<Row>().enumerate() {
        let row = result.map_err(|source| LoadError::Parse { row: i + 1, source })?;
        samples.push(Sample { x: row.x, y: row.y });
    }

    Ok(SampleTable::from_samples(samples))
}
