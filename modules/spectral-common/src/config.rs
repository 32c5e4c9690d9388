use std::env;
use std::str::FromStr;

use tracing::info;

use crate::error::IntakeError;

pub const DEFAULT_MIN_BODY_CHARS: usize = 100;
pub const DEFAULT_LOW_EFFORT_BODY_CHARS: usize = 300;
pub const DEFAULT_PATTERN_TTL_SECS: i64 = 600;

/// Runtime-tunable knobs of the intake gate.
///
/// Scoring weights, grade bands and status thresholds are deliberately not
/// here: they are compiled in so grades stay comparable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Bodies shorter than this are rejected before any pattern runs.
    pub min_body_chars: usize,
    /// Low-effort heuristics only apply below this body length.
    pub low_effort_body_chars: usize,
    /// How long the phenomenon pattern list is trusted before a reload.
    pub pattern_ttl_secs: i64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            min_body_chars: DEFAULT_MIN_BODY_CHARS,
            low_effort_body_chars: DEFAULT_LOW_EFFORT_BODY_CHARS,
            pattern_ttl_secs: DEFAULT_PATTERN_TTL_SECS,
        }
    }
}

impl IntakeConfig {
    /// Load configuration from environment variables, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, IntakeError> {
        let defaults = Self::default();
        let config = Self {
            min_body_chars: optional_env("INTAKE_MIN_BODY_CHARS", defaults.min_body_chars)?,
            low_effort_body_chars: optional_env(
                "INTAKE_LOW_EFFORT_CHARS",
                defaults.low_effort_body_chars,
            )?,
            pattern_ttl_secs: optional_env("INTAKE_PATTERN_TTL_SECS", defaults.pattern_ttl_secs)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), IntakeError> {
        if self.min_body_chars == 0 {
            return Err(IntakeError::Config(
                "INTAKE_MIN_BODY_CHARS must be greater than zero".to_string(),
            ));
        }
        if self.pattern_ttl_secs < 0 {
            return Err(IntakeError::Config(
                "INTAKE_PATTERN_TTL_SECS must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn log_summary(&self) {
        info!(
            min_body_chars = self.min_body_chars,
            low_effort_body_chars = self.low_effort_body_chars,
            pattern_ttl_secs = self.pattern_ttl_secs,
            "Intake config"
        );
    }
}

fn optional_env<T: FromStr>(key: &str, default: T) -> Result<T, IntakeError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| IntakeError::Config(format!("{key} must be a number, got {raw:?}"))),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(IntakeConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_min_length_is_rejected() {
        let config = IntakeConfig {
            min_body_chars: 0,
            ..IntakeConfig::default()
        };
        assert!(matches!(config.validate(), Err(IntakeError::Config(_))));
    }

    #[test]
    fn optional_env_falls_back_when_unset() {
        let value: usize = optional_env("SPECTRAL_TEST_SURELY_UNSET_VAR", 7).unwrap();
        assert_eq!(value, 7);
    }
}
