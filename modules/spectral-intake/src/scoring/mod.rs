//! Ten-dimension quality scorer.
//!
//! `score` is pure apart from the `graded_at` stamp: identical input yields an
//! equal `QualityReport`.

mod dimensions;
pub mod source;
mod vocab;

use chrono::Utc;
use spectral_common::{
    DimensionScore, Grade, IntakeError, QualityDimension, QualityReport, ScoringInput,
    MAX_RAW_SCORE, SCORER_VERSION,
};
use tracing::debug;

use crate::status::{status_from_score, CANONICAL_THRESHOLDS};

type DimensionFn = fn(&ScoringInput) -> DimensionScore;

/// One scorer per dimension, in `QualityDimension::ALL` order.
const SCORERS: [(QualityDimension, DimensionFn); 10] = [
    (QualityDimension::EvidenceStrength, dimensions::evidence_strength),
    (QualityDimension::WitnessCredibility, dimensions::witness_credibility),
    (QualityDimension::DescriptionDetail, dimensions::description_detail),
    (QualityDimension::LocationSpecificity, dimensions::location_specificity),
    (QualityDimension::TemporalPrecision, dimensions::temporal_precision),
    (QualityDimension::SourceReliability, dimensions::source_reliability),
    (QualityDimension::CorroborationPotential, dimensions::corroboration_potential),
    (QualityDimension::NarrativeCoherence, dimensions::narrative_coherence),
    (QualityDimension::ContentOriginality, dimensions::content_originality),
    (QualityDimension::DataCompleteness, dimensions::data_completeness),
];

/// Score every dimension and fold them into a report.
pub fn score(input: &ScoringInput) -> QualityReport {
    let dimensions: Vec<DimensionScore> = SCORERS.iter().map(|(_, scorer)| scorer(input)).collect();
    let composite = composite(&dimensions);
    let grade = Grade::from_composite(composite);
    let recommended_status = status_from_score(composite);

    debug!(
        title = input.title.as_str(),
        composite,
        %grade,
        status = %recommended_status,
        "Scored report"
    );

    QualityReport {
        composite,
        grade,
        recommended_status,
        dimensions,
        scorer_version: SCORER_VERSION.to_string(),
        graded_at: Utc::now(),
    }
}

/// 100 * sum(weighted) / (sum(weights) * 10). Empty input scores 0.
pub fn composite(dimensions: &[DimensionScore]) -> f64 {
    let weights: f64 = dimensions.iter().map(|d| d.weight).sum();
    if weights <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = dimensions.iter().map(|d| d.weighted).sum();
    (100.0 * weighted / (weights * MAX_RAW_SCORE)).clamp(0.0, 100.0)
}

/// Startup check: every dimension has a positive weight and a scorer, and
/// the status thresholds are ordered. A misconfigured scorer corrupts every
/// publication decision downstream, so callers should refuse to start on `Err`.
pub fn validate_scorer_configuration() -> Result<(), IntakeError> {
    for (i, dimension) in QualityDimension::ALL.iter().enumerate() {
        let weight = dimension.weight();
        if !(weight.is_finite() && weight > 0.0) {
            return Err(IntakeError::InvalidWeight {
                dimension: dimension.to_string(),
                weight,
            });
        }
        if SCORERS[i].0 != *dimension {
            return Err(IntakeError::Config(format!(
                "scorer table out of order at {dimension}"
            )));
        }
    }
    CANONICAL_THRESHOLDS.validate()
}
