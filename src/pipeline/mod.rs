pub mod agreement;
pub mod grouping;
pub mod loader;
pub mod output;
pub mod quality_gate;

use serde::Serialize;
use tracing::{info, instrument};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline::quality_gate::{DropCounts, ThresholdGate};

/// Result of a complete pipeline run.
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub total_records: usize,
    pub accepted: usize,
    pub dropped: DropCounts,
    pub unique_texts: usize,
    pub agreed: usize,
    pub disagreements: usize,
    pub clean_output_file: String,
    pub disagreements_output_file: String,
}

pub struct Pipeline;

impl Pipeline {
    /// Run the complete QC pass: load → confidence filter → group by
    /// text → agreement check → write outputs.
    ///
    /// Fails fast on the first I/O error; per-record data problems are
    /// dropped and counted, never fatal.
    #[instrument(skip(config), fields(input = %config.input_path.display()))]
    pub fn run(config: &PipelineConfig) -> Result<PipelineResult> {
        info!("starting annotation QC pipeline");

        // Step 1: Load raw annotations
        println!("📥 Step 1: Reading raw annotations...");
        let raw_annotations = loader::read_raw_annotations(&config.input_path)?;
        info!(total = raw_annotations.len(), "loaded raw annotations");
        println!("   Total raw annotations loaded: {}", raw_annotations.len());

        // Step 2: Quality Check 1 (Confidence)
        println!("🔍 Step 2: Applying confidence filter...");
        let gate = ThresholdGate::new(config.confidence_threshold);
        let qc1 = quality_gate::filter_by_confidence(&raw_annotations, &gate);
        info!(
            accepted = qc1.accepted.len(),
            dropped = qc1.dropped.total(),
            threshold = config.confidence_threshold,
            "confidence filter applied"
        );
        println!(
            "   Annotations after QC1 (confidence >= {}): {} ({} dropped)",
            config.confidence_threshold,
            qc1.accepted.len(),
            qc1.dropped.total()
        );

        // Step 3: Group by text
        let accepted_count = qc1.accepted.len();
        let dropped = qc1.dropped;
        let grouped = grouping::group_by_text(qc1.accepted);
        info!(unique_texts = grouped.len(), "grouped annotations by text");
        println!("   Unique texts after QC1: {}", grouped.len());

        // Step 4: Quality Check 2 (Agreement)
        println!("⚖️  Step 3: Checking for agreement/disagreements...");
        let qc2 = agreement::apply_agreement_check(&grouped);
        info!(
            agreed = qc2.agreed.len(),
            disagreements = qc2.disagreements.len(),
            "agreement check complete"
        );
        println!("   Texts with agreement: {}", qc2.agreed.len());
        println!("   Texts with disagreements: {}", qc2.disagreements.len());

        // Step 5: Write outputs
        println!("💾 Step 4: Writing outputs...");
        output::write_outputs(
            &qc2.agreed,
            &qc2.disagreements,
            &config.clean_output_path,
            &config.disagreements_output_path,
        )?;
        info!(
            clean = %config.clean_output_path.display(),
            report = %config.disagreements_output_path.display(),
            "outputs written"
        );

        Ok(PipelineResult {
            total_records: raw_annotations.len(),
            accepted: accepted_count,
            dropped,
            unique_texts: grouped.len(),
            agreed: qc2.agreed.len(),
            disagreements: qc2.disagreements.len(),
            clean_output_file: config.clean_output_path.display().to_string(),
            disagreements_output_file: config.disagreements_output_path.display().to_string(),
        })
    }
}
