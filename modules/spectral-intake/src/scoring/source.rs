//! Fixed per-source credibility table plus source-specific boosts read from
//! the scraper's metadata map.

use std::collections::BTreeMap;

use serde_json::Value;
use spectral_common::{SourceTier, SourceType};

/// Base credibility on the 0-10 scale.
pub fn base_credibility(source: SourceType) -> f64 {
    match source.tier() {
        SourceTier::EstablishedDatabase => 7.5,
        SourceTier::CuratedSecondary => 6.0,
        SourceTier::SocialMedia => 4.0,
        SourceTier::UnmoderatedCommunity => 3.0,
    }
}

fn number(metadata: &BTreeMap<String, Value>, key: &str) -> Option<f64> {
    match metadata.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string<'a>(metadata: &'a BTreeMap<String, Value>, key: &str) -> Option<&'a str> {
    metadata.get(key)?.as_str().map(str::trim)
}

fn flag(metadata: &BTreeMap<String, Value>, key: &str) -> bool {
    match metadata.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    }
}

/// Boosts earned from source metadata, with a note per boost for the rationale.
pub fn metadata_boosts(
    source: SourceType,
    metadata: &BTreeMap<String, Value>,
) -> (f64, Vec<String>) {
    let mut boost = 0.0;
    let mut notes = Vec::new();

    if flag(metadata, "verified") {
        boost += 1.0;
        notes.push("verified by source".to_string());
    }

    match source {
        SourceType::Bfro => match string(metadata, "classification").map(str::to_lowercase) {
            Some(c) if c == "class a" || c == "a" => {
                boost += 1.5;
                notes.push("BFRO class A".to_string());
            }
            Some(c) if c == "class b" || c == "b" => {
                boost += 0.75;
                notes.push("BFRO class B".to_string());
            }
            _ => {}
        },
        SourceType::Nuforc | SourceType::Mufon => {
            if flag(metadata, "investigated") || string(metadata, "investigator_notes").is_some_and(|s| !s.is_empty()) {
                boost += 1.0;
                notes.push("investigator follow-up".to_string());
            }
        }
        SourceType::Reddit | SourceType::SocialMedia | SourceType::Forum => {
            let engagement = number(metadata, "score")
                .or_else(|| number(metadata, "upvotes"))
                .unwrap_or(0.0);
            if engagement >= 500.0 {
                boost += 1.5;
                notes.push(format!("high engagement ({engagement:.0})"));
            } else if engagement >= 100.0 {
                boost += 0.75;
                notes.push(format!("engagement ({engagement:.0})"));
            }
            if number(metadata, "num_comments").unwrap_or(0.0) >= 50.0 {
                boost += 0.5;
                notes.push("active discussion".to_string());
            }
        }
        _ => {}
    }

    (boost, notes)
}
