use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid weight {weight} for dimension {dimension}")]
    InvalidWeight { dimension: String, weight: f64 },

    #[error("Status thresholds out of order: approve={approve} review={review}")]
    UnorderedThresholds { approve: f64, review: f64 },

    #[error("Pattern source error: {0}")]
    PatternSource(String),

    #[error("Batch cancelled with {skipped} of {total} buckets unprocessed")]
    Cancelled { skipped: usize, total: usize },
}
