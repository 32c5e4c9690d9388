//! The ten dimension scorers. Each reads a disjoint slice of the input,
//! returns a raw 0-10 score with a short rationale, and shares no state with
//! the others.

use std::collections::HashSet;

use spectral_common::{DimensionScore, QualityDimension, ScoringInput};

use super::source;
use super::vocab::*;
use crate::text;

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn rationale(notes: Vec<String>, fallback: &str) -> String {
    if notes.is_empty() {
        fallback.to_string()
    } else {
        notes.join(", ")
    }
}

pub fn evidence_strength(input: &ScoringInput) -> DimensionScore {
    let mut score = 0.0;
    let mut notes = Vec::new();

    if input.evidence.physical_evidence {
        score += 3.0;
        notes.push("physical evidence".to_string());
    }
    if input.evidence.photo_video {
        score += 2.5;
        notes.push("photo/video".to_string());
    }
    if input.evidence.official_report {
        score += 2.5;
        notes.push("official report".to_string());
    }
    if let Some(summary) = input.evidence_summary.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        score += if summary.chars().count() >= 50 { 1.5 } else { 1.0 };
        notes.push("evidence summary".to_string());
    }

    let terms = text::distinct_hits(&EVIDENCE_TERMS, &input.description);
    if terms > 0 {
        score += (terms as f64 * 0.5).min(3.0);
        notes.push(format!("{terms} evidentiary terms"));
    }

    DimensionScore::new(
        QualityDimension::EvidenceStrength,
        score,
        rationale(notes, "no evidence indicators"),
    )
}

pub fn witness_credibility(input: &ScoringInput) -> DimensionScore {
    let body = &input.description;
    let mut score = match input.witness_count {
        None | Some(0) => 2.0,
        Some(1) => 3.0,
        Some(2) => 5.0,
        Some(3..=5) => 6.0,
        Some(_) => 7.0,
    };
    let mut notes = vec![format!("witnesses: {}", input.witness_count.map_or("unknown".to_string(), |n| n.to_string()))];

    let relations = text::distinct_hits(&RELATION_TERMS, body);
    if relations > 0 {
        score += (relations as f64 * 0.75).min(1.5);
        notes.push(format!("{relations} named relations"));
    }
    if PROFESSION_TERMS.is_match(body) {
        score += 1.5;
        notes.push("professional background".to_string());
    }
    if SELF_IDENTIFICATION_RE.is_match(body) {
        score += 0.5;
        notes.push("self-identified".to_string());
    }
    if FIRST_HAND_RE.is_match(body) {
        score += 0.5;
        notes.push("first-hand account".to_string());
    }

    DimensionScore::new(QualityDimension::WitnessCredibility, score, notes.join(", "))
}

/// Half-saturation length of the word-count curve.
const DETAIL_WORD_SCALE: f64 = 250.0;

pub fn description_detail(input: &ScoringInput) -> DimensionScore {
    let body = &input.description;
    let words = text::word_count(body);
    // 1 - e^(-w/250): steep early, flattens past a few hundred words
    let length_score = 6.0 * (1.0 - (-(words as f64) / DETAIL_WORD_SCALE).exp());

    let vocabulary = [&SIGHT_TERMS, &SOUND_TERMS, &SMELL_TERMS, &TOUCH_TERMS, &BEHAVIOR_TERMS, &MEASUREMENT_RE]
        .iter()
        .map(|re| text::distinct_hits(re, body))
        .sum::<usize>();
    let vocabulary_score = (vocabulary as f64 * 0.4).min(4.0);

    DimensionScore::new(
        QualityDimension::DescriptionDetail,
        length_score + vocabulary_score,
        format!("{words} words, {vocabulary} descriptive terms"),
    )
}

pub fn location_specificity(input: &ScoringInput) -> DimensionScore {
    let loc = &input.location;
    let (mut score, tier) = if loc.point().is_some() {
        (8.0, "coordinates")
    } else if loc.city().is_some() {
        (6.0, "city")
    } else if loc.state().is_some() {
        (4.0, "state")
    } else if loc.country().is_some() {
        (2.0, "country")
    } else if loc.name().is_some() {
        (1.5, "place name only")
    } else {
        (0.0, "no location")
    };
    let mut notes = vec![tier.to_string()];

    if loc.name().is_some() && score > 1.5 {
        score += 1.0;
        notes.push("named place".to_string());
    }
    if loc.city().is_some() && loc.state().is_some() {
        score += 0.5;
        notes.push("city and state".to_string());
    }
    let landmark = loc.name().is_some_and(|n| ROAD_LANDMARK_RE.is_match(n))
        || ROAD_LANDMARK_RE.is_match(&input.description);
    if landmark {
        score += 1.0;
        notes.push("road/landmark reference".to_string());
    }

    DimensionScore::new(QualityDimension::LocationSpecificity, score, notes.join(", "))
}

pub fn temporal_precision(input: &ScoringInput) -> DimensionScore {
    let body = &input.description;
    let mut notes = Vec::new();

    let mut score = match (input.event_date, input.date_is_approximate) {
        (Some(_), false) => {
            notes.push("exact date".to_string());
            5.0
        }
        (Some(_), true) => {
            notes.push("approximate date".to_string());
            3.0
        }
        (None, _) if YEAR_RE.is_match(body) => {
            notes.push("year mentioned".to_string());
            1.5
        }
        (None, _) => 0.0,
    };

    if input.event_time.is_some() {
        score += 2.0;
        notes.push("time of day".to_string());
    } else if CLOCK_TIME_RE.is_match(body) {
        score += 1.0;
        notes.push("time in text".to_string());
    }
    if DURATION_RE.is_match(body) {
        score += 1.5;
        notes.push("duration".to_string());
    }

    let sequencing = text::distinct_hits(&SEQUENCE_TERMS, body);
    if sequencing >= 4 {
        score += 1.5;
    } else if sequencing >= 2 {
        score += 1.0;
    }
    if sequencing >= 2 {
        notes.push(format!("{sequencing} sequencing words"));
    }

    DimensionScore::new(
        QualityDimension::TemporalPrecision,
        score,
        rationale(notes, "no temporal information"),
    )
}

pub fn source_reliability(input: &ScoringInput) -> DimensionScore {
    let base = source::base_credibility(input.source_type);
    let (boost, boosts) = source::metadata_boosts(input.source_type, &input.source_metadata);

    let mut notes = vec![format!("{} base {base:.1}", input.source_type)];
    notes.extend(boosts);

    DimensionScore::new(QualityDimension::SourceReliability, base + boost, notes.join(", "))
}

pub fn corroboration_potential(input: &ScoringInput) -> DimensionScore {
    let body = &input.description;
    let loc = &input.location;
    let mut notes = Vec::new();

    let precise_date = input.event_date.is_some() && !input.date_is_approximate;
    let precise_place = loc.point().is_some() || loc.city().is_some();
    let mut score = if precise_date && precise_place {
        notes.push("date and place pinned".to_string());
        4.0
    } else if input.event_date.is_some() && (precise_place || loc.state().is_some()) {
        notes.push("date and region".to_string());
        2.0
    } else if input.event_date.is_some() || precise_place {
        1.0
    } else {
        0.0
    };

    let others = text::distinct_hits(&OTHER_WITNESS_RE, body);
    if others > 0 {
        score += (others as f64 * 1.5).min(3.0);
        notes.push("other witnesses mentioned".to_string());
    }
    if EXTERNAL_RECORD_RE.is_match(body) {
        score += 1.5;
        notes.push("external record".to_string());
    }

    let modalities = [&SIGHT_TERMS, &SOUND_TERMS, &SMELL_TERMS, &TOUCH_TERMS]
        .iter()
        .filter(|re| re.is_match(body))
        .count();
    if modalities >= 3 {
        score += 2.0;
    } else if modalities == 2 {
        score += 1.0;
    }
    if modalities >= 2 {
        notes.push(format!("{modalities} senses"));
    }

    if input.witness_count.unwrap_or(0) >= 2 {
        score += 1.0;
        notes.push("multiple witnesses".to_string());
    }

    DimensionScore::new(
        QualityDimension::CorroborationPotential,
        score,
        rationale(notes, "nothing to corroborate against"),
    )
}

pub fn narrative_coherence(input: &ScoringInput) -> DimensionScore {
    let body = input.description.trim();
    if body.is_empty() {
        return DimensionScore::new(QualityDimension::NarrativeCoherence, 0.0, "no narrative");
    }

    let mut score = 4.0;
    let mut notes = Vec::new();

    let sentences = text::sentences(body);
    if sentences.len() >= 3 {
        score += 1.0;
    }
    if sentences.len() >= 8 {
        score += 1.0;
    }
    notes.push(format!("{} sentences", sentences.len()));

    if text::paragraphs(body).len() >= 2 {
        score += 0.5;
        notes.push("paragraphs".to_string());
    }

    if !sentences.is_empty() {
        let average = text::word_count(body) as f64 / sentences.len() as f64;
        if (8.0..=30.0).contains(&average) {
            score += 1.0;
        }
    }

    let first_person = FIRST_PERSON_RE.find_iter(body).count();
    if first_person >= 3 {
        score += 1.0;
        if !THIRD_PERSON_NARRATOR_RE.is_match(body) {
            score += 0.5;
        }
        notes.push("first-person voice".to_string());
    }

    let connectives = text::distinct_hits(&CONNECTIVE_TERMS, body);
    if connectives >= 3 {
        score += 1.0;
    }
    if connectives >= 6 {
        score += 0.5;
    }

    let (caps, letters) = text::caps_ratio(body);
    if letters >= 20 && caps > 0.5 {
        score -= 3.0;
        notes.push("mostly capitals".to_string());
    } else if letters >= 20 && caps > 0.3 {
        score -= 1.5;
        notes.push("heavy capitals".to_string());
    }

    let exclamations = body.matches('!').count();
    let density = exclamations as f64 / sentences.len().max(1) as f64;
    if density > 0.5 {
        score -= 2.0;
        notes.push("exclamation-heavy".to_string());
    } else if exclamations >= 5 {
        score -= 1.0;
        notes.push("many exclamations".to_string());
    }

    DimensionScore::new(QualityDimension::NarrativeCoherence, score, notes.join(", "))
}

/// Words that start with a capital letter away from a sentence start.
fn proper_nouns(body: &str) -> HashSet<String> {
    text::sentences(body)
        .iter()
        .flat_map(|s| s.split_whitespace().skip(1))
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| {
            let mut chars = w.chars();
            let starts_upper = chars.next().is_some_and(char::is_uppercase);
            let rest: String = chars.collect();
            starts_upper
                && !rest.is_empty()
                && rest.chars().any(char::is_lowercase)
                && !matches!(*w, "I'm" | "I'd" | "I've" | "I'll")
        })
        .map(str::to_string)
        .collect()
}

pub fn content_originality(input: &ScoringInput) -> DimensionScore {
    let body = input.description.trim();
    if body.is_empty() {
        return DimensionScore::new(QualityDimension::ContentOriginality, 0.0, "no content");
    }

    let mut score = 6.0;
    let mut notes = Vec::new();

    let boilerplate = text::distinct_hits(&BOILERPLATE_RE, body);
    if boilerplate > 0 {
        score -= (boilerplate as f64).min(3.0);
        notes.push(format!("{boilerplate} boilerplate phrases"));
    }

    let normalized: Vec<String> = text::sentences(body).iter().map(|s| text::normalize(s)).collect();
    let unique: HashSet<&String> = normalized.iter().collect();
    if unique.len() < normalized.len() {
        score -= 2.0;
        notes.push("repeated sentences".to_string());
    }

    let words = text::words(body);
    if words.len() >= 12 {
        let windows = words.len() - 2;
        let distinct: HashSet<_> = words.windows(3).collect();
        if (distinct.len() as f64 / windows as f64) < 0.8 {
            score -= 2.0;
            notes.push("repetitive phrasing".to_string());
        }
    }

    let nouns = proper_nouns(body).len();
    if nouns >= 3 {
        score += 1.0;
        notes.push(format!("{nouns} proper nouns"));
    }
    let numbers = words.iter().filter(|w| w.chars().any(|c| c.is_ascii_digit())).count();
    if numbers >= 2 {
        score += 1.0;
        notes.push("specific numbers".to_string());
    }
    if EMOTION_TERMS.is_match(body) {
        score += 1.0;
        notes.push("emotional language".to_string());
    }

    DimensionScore::new(
        QualityDimension::ContentOriginality,
        score,
        rationale(notes, "neutral"),
    )
}

pub fn data_completeness(input: &ScoringInput) -> DimensionScore {
    let loc = &input.location;
    let fields: [(&str, bool, f64); 11] = [
        ("title", !input.title.trim().is_empty(), 1.0),
        ("description", !input.description.trim().is_empty(), 2.0),
        ("summary", !input.summary.trim().is_empty(), 0.5),
        ("category", present(&input.category), 1.0),
        ("region", loc.city().is_some() || loc.state().is_some() || loc.country().is_some(), 1.5),
        ("coordinates", loc.point().is_some(), 1.0),
        ("event_date", input.event_date.is_some(), 1.5),
        ("event_time", input.event_time.is_some(), 0.5),
        ("witness_count", input.witness_count.is_some(), 0.5),
        ("evidence_summary", present(&input.evidence_summary), 0.5),
        ("tags", !input.tags.is_empty(), 0.5),
    ];

    let total: f64 = fields.iter().map(|(_, _, w)| w).sum();
    let filled: f64 = fields.iter().filter(|(_, set, _)| *set).map(|(_, _, w)| w).sum();
    let missing: Vec<&str> = fields.iter().filter(|(_, set, _)| !set).map(|(name, _, _)| *name).collect();

    let note = if missing.is_empty() {
        "all fields populated".to_string()
    } else {
        format!("missing: {}", missing.join(", "))
    };

    DimensionScore::new(QualityDimension::DataCompleteness, 10.0 * filled / total, note)
}
