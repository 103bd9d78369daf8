use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::model::SimilarityRecord;

use super::error::DatasetError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Remove `.txt` from document identifiers.
    pub strip_txt_extension: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Row {
    Object(SimilarityRecord),
    Tuple(String, String, String, f64),
}

impl From<Row> for SimilarityRecord {
    fn from(row: Row) -> Self {
        match row {
            Row::Object(record) => record,
            Row::Tuple(source, comparison, domain, score) => {
                SimilarityRecord::new(source, comparison, domain, score)
            }
        }
    }
}

/// Parses a JSON table, preserving row order.
pub fn parse_records(
    json: &str,
    options: LoadOptions,
) -> Result<Vec<SimilarityRecord>, DatasetError> {
    let rows: Vec<Row> = serde_json::from_str(json)?;

    Ok(rows
        .into_iter()
        .map(SimilarityRecord::from)
        .map(|record| {
            if options.strip_txt_extension {
                record.without_txt_extension()
            } else {
                record
            }
        })
        .collect())
}

pub fn load_records(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<Vec<SimilarityRecord>, DatasetError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&json, options)?;
    debug!(path = %path.display(), records = records.len(), "Loaded dataset");
    Ok(records)
}
