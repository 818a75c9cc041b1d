//! Score command implementation

use crate::error::{CliError, CliResult};
use crate::input::{resolve_path, FileReader};
use crate::output::{JsonFormatter, OutputFormatter};
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use tagscore_core::{LabelDecoder, MetricsReport, ScoreComputer};

/// Arguments for scoring predicted tags against ground truth
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// File with predicted tags
    #[arg(short, long, value_name = "FILE")]
    pub predictions: PathBuf,

    /// File with ground-truth tags
    #[arg(short, long, value_name = "FILE")]
    pub labels: PathBuf,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ScoreArgs {
    /// Execute the score command, printing the report to stdout
    pub fn execute(&self) -> CliResult<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting scoring");
        log::debug!("Arguments: {:?}", self);

        let stdout = io::stdout();
        self.run(stdout.lock())?;
        Ok(())
    }

    /// Read, decode and score both files, writing the JSON report to `writer`
    pub fn run<W: Write>(&self, writer: W) -> Result<MetricsReport> {
        let predictions = resolve_path(&self.predictions)?;
        let labels = resolve_path(&self.labels)?;

        let preds_text = FileReader::read_text(&predictions)?;
        let labels_text = FileReader::read_text(&labels)?;

        let preds = LabelDecoder::decode(&preds_text)
            .map_err(|e| CliError::ScoringError(e.to_string()))
            .with_context(|| format!("Invalid predictions file: {}", predictions.display()))?;
        let truth = LabelDecoder::decode(&labels_text)
            .map_err(|e| CliError::ScoringError(e.to_string()))
            .with_context(|| format!("Invalid labels file: {}", labels.display()))?;
        log::info!("Decoded {} predicted and {} true tags", preds.len(), truth.len());

        let report = ScoreComputer::new()
            .compute_decoded(&preds, &truth)
            .map_err(|e| CliError::ScoringError(e.to_string()))?;

        let mut formatter = JsonFormatter::new(writer);
        formatter.write_report(&report)?;

        Ok(report)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("Failed to initialize logging")?;
        }

        Ok(())
    }
}
