use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;

use anno_qc::config::PipelineConfig;
use anno_qc::pipeline::{Pipeline, PipelineResult};
use anno_qc::{constants, demo, logging};

#[derive(Parser)]
#[command(name = "anno_qc")]
#[command(about = "Batch quality control for crowd-sourced text annotations")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the QC pipeline (the default when no subcommand is given)
    Run {
        /// Raw annotations CSV to read
        #[arg(long)]
        input: Option<PathBuf>,

        /// Destination for the clean training dataset (JSONL)
        #[arg(long)]
        clean_output: Option<PathBuf>,

        /// Destination for the disagreements report
        #[arg(long)]
        disagreements_output: Option<PathBuf>,

        /// Minimum acceptable confidence score, inclusive
        #[arg(long)]
        threshold: Option<f64>,

        /// TOML config file; CLI flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write a randomized demo annotations CSV to experiment with
    Sample {
        /// Destination path for the generated CSV
        #[arg(long, default_value = constants::DEFAULT_INPUT_FILE)]
        output: PathBuf,

        /// Number of data rows to generate
        #[arg(long, default_value_t = 24)]
        rows: usize,
    },
}

fn print_summary(result: &PipelineResult) {
    println!("\n📊 Pipeline Results:");
    println!("   Raw annotations: {}", result.total_records);
    println!("   Accepted after QC1: {}", result.accepted);
    println!(
        "   Dropped by QC1: {} (below threshold: {}, invalid confidence: {}, missing confidence: {}, missing text: {}, missing label: {})",
        result.dropped.total(),
        result.dropped.below_threshold,
        result.dropped.invalid_confidence,
        result.dropped.missing_confidence,
        result.dropped.missing_text,
        result.dropped.missing_label,
    );
    println!("   Unique texts: {}", result.unique_texts);
    println!("   Texts with agreement: {}", result.agreed);
    println!("   Texts with disagreements: {}", result.disagreements);
    println!("\n✔ Clean training dataset: {}", result.clean_output_file);
    println!("✔ Disagreements log: {}", result.disagreements_output_file);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Run {
        input: None,
        clean_output: None,
        disagreements_output: None,
        threshold: None,
        config: None,
    });

    match command {
        Commands::Run {
            input,
            clean_output,
            disagreements_output,
            threshold,
            config,
        } => {
            let mut pipeline_config = match config {
                Some(path) => PipelineConfig::load(&path)?,
                None => PipelineConfig::default(),
            };
            if let Some(path) = input {
                pipeline_config.input_path = path;
            }
            if let Some(path) = clean_output {
                pipeline_config.clean_output_path = path;
            }
            if let Some(path) = disagreements_output {
                pipeline_config.disagreements_output_path = path;
            }
            if let Some(value) = threshold {
                pipeline_config.confidence_threshold = value;
            }

            println!("🚀 Running annotation QC pipeline...");
            match Pipeline::run(&pipeline_config) {
                Ok(result) => {
                    print_summary(&result);
                }
                Err(e) => {
                    error!("Pipeline failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::Sample { output, rows } => {
            println!("🎲 Generating demo annotations...");
            demo::write_demo_annotations(&output, rows)?;
            println!("✔ Wrote {} demo annotations to {}", rows, output.display());
        }
    }

    Ok(())
}
