use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::domain::RawRecord;
use crate::error::{PipelineError, Result};

/// Read all rows from the raw annotations file into an ordered list of
/// records, one per data row. The first row is the header; each record's
/// keys are exactly the header's column names.
pub fn read_raw_annotations(input_path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(input_path).map_err(|e| PipelineError::InputNotFound {
        path: input_path.to_path_buf(),
        source: e,
    })?;

    // flexible: rows shorter than the header are legal and just lack the
    // trailing fields.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();

    let mut annotations = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields: HashMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        annotations.push(RawRecord::new(fields));
    }

    debug!(
        rows = annotations.len(),
        input = %input_path.display(),
        "loaded raw annotations"
    );

    Ok(annotations)
}
