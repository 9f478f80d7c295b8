use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants;
use crate::error::{PipelineError, Result};

/// Runtime configuration for one pipeline run.
///
/// Every field has a fixed default, so a bare invocation needs no
/// arguments. Values from a TOML config file override the defaults, and
/// CLI flags override both.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub clean_output_path: PathBuf,
    pub disagreements_output_path: PathBuf,
    pub confidence_threshold: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(constants::DEFAULT_INPUT_FILE),
            clean_output_path: PathBuf::from(constants::DEFAULT_CLEAN_OUTPUT_FILE),
            disagreements_output_path: PathBuf::from(constants::DEFAULT_DISAGREEMENTS_FILE),
            confidence_threshold: constants::DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file. Fields absent from the file
    /// keep their defaults.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            PipelineError::Config(format!(
                "failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: PipelineConfig = toml::from_str(&config_content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_fixed_file_names() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_path, PathBuf::from("raw_annotations.csv"));
        assert_eq!(
            config.clean_output_path,
            PathBuf::from("clean_training_dataset.jsonl")
        );
        assert_eq!(
            config.disagreements_output_path,
            PathBuf::from("disagreements.log")
        );
        assert_eq!(config.confidence_threshold, 0.8);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let parsed: PipelineConfig =
            toml::from_str("confidence_threshold = 0.65\ninput_path = \"batch_7.csv\"").unwrap();
        assert_eq!(parsed.input_path, PathBuf::from("batch_7.csv"));
        assert_eq!(parsed.confidence_threshold, 0.65);
        assert_eq!(
            parsed.clean_output_path,
            PathBuf::from("clean_training_dataset.jsonl")
        );
    }

    #[test]
    fn load_reports_missing_config_file() {
        let err = PipelineConfig::load(Path::new("no_such_config.toml")).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }
}
