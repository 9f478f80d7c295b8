/// Column and file name constants to ensure consistency across the codebase.
/// The input schema is defined by the crowd-sourcing export: one row per
/// individual annotator judgment.

// Input columns
pub const TEXT_COLUMN: &str = "text";
pub const ANNOTATOR_ID_COLUMN: &str = "annotator_id";
pub const LABEL_COLUMN: &str = "label";
pub const CONFIDENCE_COLUMN: &str = "confidence_score";

// Default file locations (overridable via config file or CLI flags)
pub const DEFAULT_INPUT_FILE: &str = "raw_annotations.csv";
pub const DEFAULT_CLEAN_OUTPUT_FILE: &str = "clean_training_dataset.jsonl";
pub const DEFAULT_DISAGREEMENTS_FILE: &str = "disagreements.log";

/// Minimum acceptable confidence score, inclusive: a judgment scored
/// exactly at the threshold passes QC1.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.8;
