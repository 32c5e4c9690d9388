//! The intake boundary: rejection filter, then scorer, then status.

use chrono::{DateTime, Utc};
use serde::Serialize;
use spectral_common::{IntakeConfig, IntakeError, QualityReport, ScoringInput};
use tracing::debug;

use crate::phenomena::{infer_category, BuiltinPatterns, PatternSource, PhenomenonCache};
use crate::rejection::{RejectionFilter, Verdict};
use crate::scoring::{score, validate_scorer_configuration};

/// What the orchestrator gets back for one candidate. `reason` is set when
/// the filter turned it away, `report` when it passed.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<QualityReport>,
    /// Category guessed from the text when the candidate arrived without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inferred_category: Option<String>,
}

pub struct QualityGate {
    filter: RejectionFilter,
    patterns: PhenomenonCache,
    source: Box<dyn PatternSource>,
}

impl QualityGate {
    /// Fails when the compiled-in scorer configuration is inconsistent.
    pub fn new(config: &IntakeConfig) -> Result<Self, IntakeError> {
        Self::with_source(config, Box::new(BuiltinPatterns))
    }

    pub fn with_source(config: &IntakeConfig, source: Box<dyn PatternSource>) -> Result<Self, IntakeError> {
        config.validate()?;
        validate_scorer_configuration()?;
        Ok(Self {
            filter: RejectionFilter::new(config),
            patterns: PhenomenonCache::from_config(config),
            source,
        })
    }

    pub fn assess_quality(&mut self, input: &ScoringInput, now: DateTime<Utc>) -> Assessment {
        if let Verdict::Reject(rejection) = self.filter.classify(&input.title, &input.description) {
            debug!(title = input.title.as_str(), reason = %rejection, "Rejected candidate");
            return Assessment {
                passed: false,
                reason: Some(rejection.to_string()),
                report: None,
                inferred_category: None,
            };
        }

        let inferred_category = match input.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => None,
            _ => {
                let patterns = self.patterns.get(now, self.source.as_ref());
                infer_category(patterns, &input.title, &input.description).map(str::to_string)
            }
        };

        Assessment {
            passed: true,
            reason: None,
            report: Some(score(input)),
            inferred_category,
        }
    }

    /// Drops the cached phenomenon patterns so the next assessment reloads them.
    pub fn invalidate_patterns(&mut self) {
        self.patterns.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "Around 11 pm my husband and I watched a silent black triangle with three white lights \
        glide over the reservoir, then it stopped, hovered for about two minutes and shot off to the north.";

    #[test]
    fn rejected_candidate_has_reason_and_no_report() {
        let mut gate = QualityGate::new(&IntakeConfig::default()).unwrap();
        let input = ScoringInput::builder().title("hi").description("[deleted]").build();
        let a = gate.assess_quality(&input, Utc::now());
        assert!(!a.passed);
        assert!(a.reason.unwrap().starts_with("removed_placeholder"));
        assert!(a.report.is_none());
    }

    #[test]
    fn passing_candidate_gets_report_and_category() {
        let mut gate = QualityGate::new(&IntakeConfig::default()).unwrap();
        let input = ScoringInput::builder().title("Triangle over the reservoir").description(BODY).build();
        let a = gate.assess_quality(&input, Utc::now());
        assert!(a.passed);
        assert!(a.report.is_some());
        assert_eq!(a.inferred_category.as_deref(), Some("ufo"));
    }

    #[test]
    fn existing_category_is_not_overridden() {
        let mut gate = QualityGate::new(&IntakeConfig::default()).unwrap();
        let input = ScoringInput::builder()
            .title("Triangle over the reservoir")
            .description(BODY)
            .category("ufo")
            .build();
        assert_eq!(gate.assess_quality(&input, Utc::now()).inferred_category, None);
    }

    #[test]
    fn invalid_config_fails_fast() {
        let config = IntakeConfig {
            min_body_chars: 0,
            ..IntakeConfig::default()
        };
        assert!(QualityGate::new(&config).is_err());
    }
}
