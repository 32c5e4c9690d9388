use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spectral_common::{DedupCandidate, IntakeConfig, ScoringInput};
use spectral_intake::{find_duplicates_cancellable, validate_scorer_configuration, QualityGate};

#[derive(Parser)]
#[command(name = "spectral-intake", about = "Offline quality gate and duplicate detection over JSON batches")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the rejection filter and scorer over a JSON array of scoring inputs
    Assess {
        file: PathBuf,
    },
    /// Find near-duplicates in a JSON array of dedup candidates
    Dedup {
        file: PathBuf,
        /// Fill missing state/country from place names and text before blocking
        #[arg(long)]
        infer_regions: bool,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn main() -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("spectral=info".parse()?);
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().with_env_filter(filter).json().with_writer(std::io::stderr).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    validate_scorer_configuration().context("Scorer configuration is invalid")?;
    let config = IntakeConfig::from_env()?;
    config.log_summary();

    let cli = Cli::parse();
    let output = match cli.command {
        Command::Assess { file } => {
            let inputs: Vec<ScoringInput> = read_json(&file)?;
            let mut gate = QualityGate::new(&config)?;
            let now = Utc::now();
            let assessments: Vec<_> = inputs.iter().map(|input| gate.assess_quality(input, now)).collect();

            let passed = assessments.iter().filter(|a| a.passed).count();
            info!(total = assessments.len(), passed, rejected = assessments.len() - passed, "Assessment complete");
            serde_json::to_string_pretty(&assessments)?
        }
        Command::Dedup { file, infer_regions } => {
            let mut candidates: Vec<DedupCandidate> = read_json(&file)?;
            if infer_regions {
                candidates = candidates.into_iter().map(DedupCandidate::with_inferred_region).collect();
            }
            let matches = find_duplicates_cancellable(&candidates, &AtomicBool::new(false)).into_result()?;
            serde_json::to_string_pretty(&matches)?
        }
    };

    println!("{output}");
    Ok(())
}
