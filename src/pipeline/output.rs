use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::domain::{AgreedSample, Disagreement};
use crate::error::{PipelineError, Result};

fn write_error(path: &Path, source: std::io::Error) -> PipelineError {
    PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Serialize both result sets to their destinations. Any open, write, or
/// flush failure aborts the run; a truncated file is never reported as
/// success.
pub fn write_outputs(
    agreed_samples: &[AgreedSample],
    disagreements: &[Disagreement],
    clean_path: &Path,
    disagreements_path: &Path,
) -> Result<()> {
    write_clean_dataset(agreed_samples, clean_path)?;
    write_disagreements_report(disagreements, disagreements_path)?;
    Ok(())
}

/// Write the clean training dataset: one compact JSON object per line,
/// exactly the fields `text` and `label`, no array wrapper.
pub fn write_clean_dataset(samples: &[AgreedSample], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| write_error(path, e))?;
    let mut writer = BufWriter::new(file);

    for sample in samples {
        let line = serde_json::to_string(sample)?;
        writeln!(writer, "{line}").map_err(|e| write_error(path, e))?;
    }

    writer.flush().map_err(|e| write_error(path, e))?;
    debug!(samples = samples.len(), output = %path.display(), "wrote clean dataset");
    Ok(())
}

/// Write the human-readable disagreements report, one fixed-format line
/// per conflicting text: `TEXT: <text> | LABELS: <l1>, <l2>, ...` with
/// labels sorted lexicographically.
pub fn write_disagreements_report(disagreements: &[Disagreement], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| write_error(path, e))?;
    let mut writer = BufWriter::new(file);

    for disagreement in disagreements {
        let label_list = disagreement
            .labels
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(writer, "TEXT: {} | LABELS: {}", disagreement.text, label_list)
            .map_err(|e| write_error(path, e))?;
    }

    writer.flush().map_err(|e| write_error(path, e))?;
    debug!(disagreements = disagreements.len(), output = %path.display(), "wrote disagreements report");
    Ok(())
}
