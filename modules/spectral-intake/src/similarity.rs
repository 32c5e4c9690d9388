//! Similarity primitives for near-duplicate detection.
//!
//! Every function is pure, symmetric in its two arguments and returns a value
//! in [0, 1]. Missing or unusable input degrades to 0 rather than failing.

use std::collections::HashSet;

use chrono::NaiveDate;
use spectral_common::{haversine_km, Location};

use crate::text;

/// Titles longer than this are truncated before edit distance.
pub const LEVENSHTEIN_MAX_CHARS: usize = 200;

/// Bodies at least this long are compared by shingles, shorter ones by tokens.
pub const SHINGLE_MIN_CHARS: usize = 100;

pub const SHINGLE_SIZE: usize = 3;

/// Jaccard index of two sets. Two empty sets share nothing.
pub fn jaccard<T: Eq + std::hash::Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Normalized Levenshtein similarity over normalized text, each side capped
/// at `LEVENSHTEIN_MAX_CHARS`.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let a: String = text::normalize(a).chars().take(LEVENSHTEIN_MAX_CHARS).collect();
    let b: String = text::normalize(b).chars().take(LEVENSHTEIN_MAX_CHARS).collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(&a, &b)
}

/// Jaccard over content-word sets (stop words removed).
pub fn token_set_similarity(a: &str, b: &str) -> f64 {
    jaccard(&text::token_set(a), &text::token_set(b))
}

/// Best of edit-distance and token-set similarity: the first catches
/// near-identical strings, the second reworded titles with the same words.
pub fn title_similarity(a: &str, b: &str) -> f64 {
    levenshtein_similarity(a, b).max(token_set_similarity(a, b))
}

/// Contiguous word n-grams of the normalized text.
pub fn shingles(body: &str, size: usize) -> HashSet<String> {
    let words = text::words(body);
    if size == 0 || words.len() < size {
        return HashSet::new();
    }
    words.windows(size).map(|w| w.join(" ")).collect()
}

/// Shingled Jaccard for long bodies; token-set similarity when either body
/// is too short for shingles to be meaningful.
pub fn content_similarity(a: &str, b: &str) -> f64 {
    let long_enough = |s: &str| s.trim().chars().count() >= SHINGLE_MIN_CHARS;
    if long_enough(a) && long_enough(b) {
        jaccard(&shingles(a, SHINGLE_SIZE), &shingles(b, SHINGLE_SIZE))
    } else {
        token_set_similarity(a, b)
    }
}

/// Banded on great-circle distance.
pub fn distance_similarity(km: f64) -> f64 {
    match km {
        d if !d.is_finite() || d < 0.0 => 0.0,
        d if d <= 1.0 => 1.0,
        d if d <= 10.0 => 0.8,
        d if d <= 50.0 => 0.5,
        d if d <= 200.0 => 0.2,
        _ => 0.0,
    }
}

// Blend used when coordinates are missing on either side.
const COUNTRY_WEIGHT: f64 = 0.15;
const STATE_WEIGHT: f64 = 0.25;
const LOCALITY_WEIGHT: f64 = 0.60;
const CITY_SHARE: f64 = 0.6;
const NAME_SHARE: f64 = 0.4;

/// Coordinates win when both sides have them. Otherwise a weighted blend of
/// exact country and state match plus a locality term built from city and
/// free-text name similarity. Every term only counts when at least one side
/// carries it, so two records that both give just "CO, US" are a full match
/// and two records with only a city are compared on the city alone.
pub fn location_similarity(a: &Location, b: &Location) -> f64 {
    if let (Some(pa), Some(pb)) = (a.point(), b.point()) {
        return distance_similarity(haversine_km(pa.lat, pa.lng, pb.lat, pb.lng));
    }

    let mut blend = Blend::default();

    let exact = |x: Option<String>, y: Option<String>| match (x, y) {
        (Some(x), Some(y)) => Some(if x == y { 1.0 } else { 0.0 }),
        (None, None) => None,
        _ => Some(0.0),
    };
    blend.add(COUNTRY_WEIGHT, exact(a.country_key(), b.country_key()));
    blend.add(STATE_WEIGHT, exact(a.state_key(), b.state_key()));

    let mut locality = Blend::default();
    locality.add(CITY_SHARE, either(a.city(), b.city(), levenshtein_similarity));
    locality.add(NAME_SHARE, either(a.name(), b.name(), title_similarity));
    blend.add(LOCALITY_WEIGHT, locality.value());

    blend.value().unwrap_or(0.0).clamp(0.0, 1.0)
}

/// `None` when neither side has the field, 0 when only one does.
fn either(x: Option<&str>, y: Option<&str>, similarity: fn(&str, &str) -> f64) -> Option<f64> {
    match (x, y) {
        (Some(x), Some(y)) => Some(similarity(x, y)),
        (None, None) => None,
        _ => Some(0.0),
    }
}

/// Weighted mean over the terms that were present.
#[derive(Default)]
struct Blend {
    total: f64,
    weight: f64,
}

impl Blend {
    fn add(&mut self, weight: f64, value: Option<f64>) {
        if let Some(value) = value {
            self.total += weight * value;
            self.weight += weight;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.weight > 0.0).then(|| self.total / self.weight)
    }
}

/// Banded on absolute day difference. A missing date on either side is 0.
pub fn date_similarity(a: Option<NaiveDate>, b: Option<NaiveDate>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    match (a - b).num_days().abs() {
        0 => 1.0,
        1..=7 => 0.8,
        8..=30 => 0.5,
        31..=365 => 0.2,
        _ => 0.0,
    }
}
