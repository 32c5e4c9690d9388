//! Phenomenon category inference backed by an explicitly owned TTL cache.
//!
//! The pattern list can come from anywhere (a database table, a file); the
//! cache holds it for `ttl` and only reloads when asked with a `now` past
//! expiry or after `invalidate()`. Callers own the clock, so tests control
//! staleness directly.

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use spectral_common::{IntakeConfig, IntakeError};
use tracing::{debug, warn};

use crate::text::{self, term_regex};

#[derive(Debug, Clone)]
pub struct PhenomenonPattern {
    pub category: String,
    pub matcher: Regex,
}

impl PhenomenonPattern {
    pub fn from_terms(category: impl Into<String>, terms: &[&str]) -> Self {
        Self {
            category: category.into(),
            matcher: term_regex(terms),
        }
    }

    /// Distinct trigger terms found; title hits count double.
    fn strength(&self, title: &str, body: &str) -> usize {
        2 * text::distinct_hits(&self.matcher, title) + text::distinct_hits(&self.matcher, body)
    }
}

pub trait PatternSource: Send + Sync {
    fn load(&self) -> Result<Vec<PhenomenonPattern>, IntakeError>;
    fn name(&self) -> &str;
}

/// The compiled-in pattern list. Also the fallback when another source fails.
pub struct BuiltinPatterns;

impl PatternSource for BuiltinPatterns {
    fn load(&self) -> Result<Vec<PhenomenonPattern>, IntakeError> {
        Ok(builtin_patterns())
    }

    fn name(&self) -> &str {
        "builtin"
    }
}

// More specific categories first: ties go to the earlier entry.
pub fn builtin_patterns() -> Vec<PhenomenonPattern> {
    vec![
        PhenomenonPattern::from_terms(
            "shadow_figure",
            &["shadow figure", "shadow person", "shadow people", "hat man", "shadowy figure", "dark figure"],
        ),
        PhenomenonPattern::from_terms(
            "poltergeist",
            &["poltergeist", "objects moved", "thrown across", "doors slammed", "cabinets opened", "flew off the shelf"],
        ),
        PhenomenonPattern::from_terms(
            "cryptid",
            &["bigfoot", "sasquatch", "skunk ape", "dogman", "chupacabra", "mothman", "wendigo", "cryptid", "yeti", "ape-like"],
        ),
        PhenomenonPattern::from_terms(
            "ufo",
            &["ufo", "uap", "flying saucer", "spacecraft", "craft", "orb", "orbs", "triangle", "disc", "cigar shaped", "tic tac", "alien", "abduction"],
        ),
        PhenomenonPattern::from_terms(
            "ghost",
            &["ghost", "ghosts", "apparition", "spirit", "haunted", "haunting", "specter", "spectre", "full-bodied", "phantom"],
        ),
        PhenomenonPattern::from_terms(
            "unexplained_sound",
            &["disembodied voice", "knocking", "footsteps", "whispering", "screams", "wood knocks", "humming", "the hum"],
        ),
        PhenomenonPattern::from_terms(
            "time_slip",
            &["time slip", "lost time", "missing time", "glitch in the matrix", "déjà vu"],
        ),
    ]
}

/// Best-matching category, or `None` when no trigger fires.
pub fn infer_category<'a>(patterns: &'a [PhenomenonPattern], title: &str, body: &str) -> Option<&'a str> {
    let mut best: Option<(&PhenomenonPattern, usize)> = None;
    for pattern in patterns {
        let strength = pattern.strength(title, body);
        if strength > 0 && best.map_or(true, |(_, s)| strength > s) {
            best = Some((pattern, strength));
        }
    }
    best.map(|(p, _)| p.category.as_str())
}

pub struct PhenomenonCache {
    ttl: Duration,
    loaded_at: Option<DateTime<Utc>>,
    patterns: Vec<PhenomenonPattern>,
}

impl PhenomenonCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            loaded_at: None,
            patterns: Vec::new(),
        }
    }

    pub fn from_config(config: &IntakeConfig) -> Self {
        // Duration::seconds panics past i64::MAX / 1000
        Self::new(Duration::seconds(config.pattern_ttl_secs.clamp(0, i64::MAX / 1_000)))
    }

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match self.loaded_at {
            None => true,
            Some(at) => now.signed_duration_since(at) >= self.ttl,
        }
    }

    /// Patterns valid at `now`, reloading from `source` if stale. A failing
    /// source keeps the previous list, or the built-in one if there is none;
    /// either way the failure is not retried until the next expiry.
    pub fn get(&mut self, now: DateTime<Utc>, source: &dyn PatternSource) -> &[PhenomenonPattern] {
        if self.is_stale(now) {
            self.refresh(now, source);
        }
        &self.patterns
    }

    fn refresh(&mut self, now: DateTime<Utc>, source: &dyn PatternSource) {
        match source.load() {
            Ok(patterns) => {
                debug!(source = source.name(), count = patterns.len(), "Loaded phenomenon patterns");
                self.patterns = patterns;
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "Pattern source failed, keeping fallback list");
                if self.patterns.is_empty() {
                    self.patterns = builtin_patterns();
                }
            }
        }
        self.loaded_at = Some(now);
    }

    /// Forces a reload on the next `get`.
    pub fn invalidate(&mut self) {
        self.loaded_at = None;
    }
}
