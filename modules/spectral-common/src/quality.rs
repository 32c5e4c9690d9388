use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tag stamped on every report so a stored grade can be reproduced later.
pub const SCORER_VERSION: &str = "dimensional-v2";

/// The ten independently scored quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QualityDimension {
    EvidenceStrength,
    WitnessCredibility,
    DescriptionDetail,
    LocationSpecificity,
    TemporalPrecision,
    SourceReliability,
    CorroborationPotential,
    NarrativeCoherence,
    ContentOriginality,
    DataCompleteness,
}

impl QualityDimension {
    pub const ALL: [QualityDimension; 10] = [
        QualityDimension::EvidenceStrength,
        QualityDimension::WitnessCredibility,
        QualityDimension::DescriptionDetail,
        QualityDimension::LocationSpecificity,
        QualityDimension::TemporalPrecision,
        QualityDimension::SourceReliability,
        QualityDimension::CorroborationPotential,
        QualityDimension::NarrativeCoherence,
        QualityDimension::ContentOriginality,
        QualityDimension::DataCompleteness,
    ];

    /// Fixed weight. Changing these breaks longitudinal comparison of grades,
    /// so bump `SCORER_VERSION` if you do.
    pub const fn weight(self) -> f64 {
        match self {
            QualityDimension::EvidenceStrength => 1.2,
            QualityDimension::WitnessCredibility => 1.0,
            QualityDimension::DescriptionDetail => 1.3,
            QualityDimension::LocationSpecificity => 1.1,
            QualityDimension::TemporalPrecision => 0.9,
            QualityDimension::SourceReliability => 1.1,
            QualityDimension::CorroborationPotential => 0.8,
            QualityDimension::NarrativeCoherence => 1.0,
            QualityDimension::ContentOriginality => 0.8,
            QualityDimension::DataCompleteness => 0.8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityDimension::EvidenceStrength => "evidence_strength",
            QualityDimension::WitnessCredibility => "witness_credibility",
            QualityDimension::DescriptionDetail => "description_detail",
            QualityDimension::LocationSpecificity => "location_specificity",
            QualityDimension::TemporalPrecision => "temporal_precision",
            QualityDimension::SourceReliability => "source_reliability",
            QualityDimension::CorroborationPotential => "corroboration_potential",
            QualityDimension::NarrativeCoherence => "narrative_coherence",
            QualityDimension::ContentOriginality => "content_originality",
            QualityDimension::DataCompleteness => "data_completeness",
        }
    }
}

impl std::fmt::Display for QualityDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper bound of every raw dimension score.
pub const MAX_RAW_SCORE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DimensionScore {
    pub dimension: QualityDimension,
    /// 0-10, clamped
    pub raw: f64,
    pub weight: f64,
    /// raw * weight
    pub weighted: f64,
    /// Audit trail only; never read by control flow.
    pub rationale: String,
}

impl DimensionScore {
    pub fn new(dimension: QualityDimension, raw: f64, rationale: impl Into<String>) -> Self {
        let raw = if raw.is_finite() { raw.clamp(0.0, MAX_RAW_SCORE) } else { 0.0 };
        let weight = dimension.weight();
        Self {
            dimension,
            raw,
            weight,
            weighted: raw * weight,
            rationale: rationale.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Banded on the 0-100 composite: A >= 80, B >= 65, C >= 50, D >= 35.
    pub fn from_composite(composite: f64) -> Self {
        match composite {
            c if c >= 80.0 => Grade::A,
            c if c >= 65.0 => Grade::B,
            c if c >= 50.0 => Grade::C,
            c if c >= 35.0 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Publication state recommended for a scored report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    Approved,
    PendingReview,
    Rejected,
}

impl std::fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicationStatus::Approved => write!(f, "approved"),
            PublicationStatus::PendingReview => write!(f, "pending_review"),
            PublicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Derived, recomputable quality assessment of one report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QualityReport {
    /// 0-100
    pub composite: f64,
    pub grade: Grade,
    pub recommended_status: PublicationStatus,
    pub dimensions: Vec<DimensionScore>,
    pub scorer_version: String,
    pub graded_at: DateTime<Utc>,
}

impl QualityReport {
    pub fn dimension(&self, dimension: QualityDimension) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }
}

// Two reports for the same input are equal no matter when they were graded.
impl PartialEq for QualityReport {
    fn eq(&self, other: &Self) -> bool {
        self.composite == other.composite
            && self.grade == other.grade
            && self.recommended_status == other.recommended_status
            && self.dimensions == other.dimensions
            && self.scorer_version == other.scorer_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_ten() {
        let total: f64 = QualityDimension::ALL.iter().map(|d| d.weight()).sum();
        assert!((total - 10.0).abs() < 1e-9);
    }

    #[test]
    fn dimension_score_clamps_raw() {
        let high = DimensionScore::new(QualityDimension::EvidenceStrength, 14.0, "");
        assert_eq!(high.raw, 10.0);
        assert!((high.weighted - 12.0).abs() < 1e-9);

        let low = DimensionScore::new(QualityDimension::DataCompleteness, -3.0, "");
        assert_eq!(low.raw, 0.0);

        let nan = DimensionScore::new(QualityDimension::DataCompleteness, f64::NAN, "");
        assert_eq!(nan.raw, 0.0);
    }

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_composite(80.0), Grade::A);
        assert_eq!(Grade::from_composite(79.9), Grade::B);
        assert_eq!(Grade::from_composite(65.0), Grade::B);
        assert_eq!(Grade::from_composite(50.0), Grade::C);
        assert_eq!(Grade::from_composite(35.0), Grade::D);
        assert_eq!(Grade::from_composite(34.9), Grade::F);
        assert_eq!(Grade::from_composite(f64::NAN), Grade::F);
    }

    #[test]
    fn report_equality_ignores_grading_time() {
        let report = QualityReport {
            composite: 42.0,
            grade: Grade::D,
            recommended_status: PublicationStatus::PendingReview,
            dimensions: vec![],
            scorer_version: SCORER_VERSION.to_string(),
            graded_at: Utc::now(),
        };
        let later = QualityReport {
            graded_at: report.graded_at + chrono::Duration::hours(3),
            ..report.clone()
        };
        assert_eq!(report, later);
    }
}
