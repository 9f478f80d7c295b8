use std::path::Path;

use rand::Rng;
use tracing::debug;

use crate::constants::{ANNOTATOR_ID_COLUMN, CONFIDENCE_COLUMN, LABEL_COLUMN, TEXT_COLUMN};
use crate::error::Result;

/// Sample texts with a primary label and a plausible rival label, so a
/// generated batch contains both unanimous groups and disagreements.
const SAMPLE_TEXTS: &[(&str, &str, &str)] = &[
    ("the battery lasts all day", "pos", "neu"),
    ("screen cracked within a week", "neg", "neu"),
    ("does what it says on the box", "neu", "pos"),
    ("shipping took almost a month", "neg", "neu"),
    ("absolutely love the keyboard feel", "pos", "neu"),
    ("support never answered my ticket", "neg", "pos"),
    ("works fine after the update", "neu", "pos"),
    ("best purchase I made this year", "pos", "neu"),
];

/// Write a randomized demo annotations CSV: several annotators per text,
/// mostly agreeing labels with occasional conflicts, confidence scores
/// spread across the threshold, and a few malformed scores so QC1 has
/// something to drop.
pub fn write_demo_annotations(output_path: &Path, rows: usize) -> Result<()> {
    let mut rng = rand::thread_rng();

    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        TEXT_COLUMN,
        ANNOTATOR_ID_COLUMN,
        LABEL_COLUMN,
        CONFIDENCE_COLUMN,
    ])?;

    for _ in 0..rows {
        let (text, primary, rival) = SAMPLE_TEXTS[rng.gen_range(0..SAMPLE_TEXTS.len())];
        let annotator = format!("ann_{:02}", rng.gen_range(1..=8));

        // 1 in 5 judgments picks the rival label
        let label = if rng.gen_bool(0.2) { rival } else { primary };

        // 1 in 20 scores is malformed and will fail QC1 parsing
        let confidence = if rng.gen_bool(0.05) {
            "n/a".to_string()
        } else {
            format!("{:.2}", rng.gen_range(0.5..1.0))
        };

        writer.write_record([text, annotator.as_str(), label, confidence.as_str()])?;
    }

    writer.flush()?;
    debug!(rows, output = %output_path.display(), "wrote demo annotations");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::loader::read_raw_annotations;

    #[test]
    fn demo_file_round_trips_through_the_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw_annotations.csv");

        write_demo_annotations(&path, 16).unwrap();

        let records = read_raw_annotations(&path).unwrap();
        assert_eq!(records.len(), 16);
        for record in &records {
            assert!(record.get(TEXT_COLUMN).is_some());
            assert!(record.get(LABEL_COLUMN).is_some());
            assert!(record.get(CONFIDENCE_COLUMN).is_some());
        }
    }
}
