//! Near-duplicate detection: a pairwise comparator over the similarity
//! primitives, plus location blocking for batch runs.

pub mod blocking;

use spectral_common::{DedupCandidate, DedupMatch, MatchConfidence};

use crate::similarity::{content_similarity, date_similarity, location_similarity, title_similarity};

pub use blocking::{
    bucket_key, find_duplicates, find_duplicates_cancellable, find_matches_for, BatchOutcome,
    BlockingStats, UNLOCATED_BUCKET,
};

pub const TITLE_WEIGHT: f64 = 0.30;
pub const LOCATION_WEIGHT: f64 = 0.25;
pub const DATE_WEIGHT: f64 = 0.20;
pub const CONTENT_WEIGHT: f64 = 0.25;

/// Pairs where both title and location fall below this skip the content
/// comparison entirely.
pub const EARLY_EXIT_FLOOR: f64 = 0.3;
/// Overall score below this is not a match.
pub const MATCH_FLOOR: f64 = 0.45;
pub const LIKELY_FLOOR: f64 = 0.65;
pub const DEFINITE_FLOOR: f64 = 0.85;

pub fn confidence_for(overall: f64) -> MatchConfidence {
    if overall >= DEFINITE_FLOOR {
        MatchConfidence::Definite
    } else if overall >= LIKELY_FLOOR {
        MatchConfidence::Likely
    } else {
        MatchConfidence::Possible
    }
}

/// Compare two candidates. `None` for the same record, for a same-source
/// pair (an upsert, not a duplicate), or when the pair scores under the
/// match floor.
///
/// Symmetric: arguments are put in id order before anything is computed, so
/// `compare(a, b) == compare(b, a)`.
pub fn compare(a: &DedupCandidate, b: &DedupCandidate) -> Option<DedupMatch> {
    if a.id == b.id || a.same_source_record(b) {
        return None;
    }
    let (a, b) = if a.id <= b.id { (a, b) } else { (b, a) };

    let title = title_similarity(&a.title, &b.title);
    let location = location_similarity(&a.location, &b.location);
    if title < EARLY_EXIT_FLOOR && location < EARLY_EXIT_FLOOR {
        return None;
    }

    let date = date_similarity(a.event_date, b.event_date);
    let content = content_similarity(&a.description, &b.description);

    let overall = TITLE_WEIGHT * title + LOCATION_WEIGHT * location + DATE_WEIGHT * date + CONTENT_WEIGHT * content;
    if overall < MATCH_FLOOR {
        return None;
    }

    Some(DedupMatch {
        first_id: a.id,
        second_id: b.id,
        title_similarity: title,
        location_similarity: location,
        date_similarity: date,
        content_similarity: content,
        overall,
        confidence: confidence_for(overall),
        details: signals(title, location, date, content),
    })
}

/// Comma-separated list of the signals that fired, for reviewers.
fn signals(title: f64, location: f64, date: f64, content: f64) -> String {
    let mut fired = Vec::new();
    if title >= 0.9 {
        fired.push("title_match".to_string());
    } else if title >= 0.5 {
        fired.push(format!("title_similar({title:.2})"));
    }
    if location >= 0.8 {
        fired.push("location_match".to_string());
    } else if location >= 0.5 {
        fired.push(format!("location_near({location:.2})"));
    }
    match date {
        d if d >= 1.0 => fired.push("same_day".to_string()),
        d if d >= 0.8 => fired.push("same_week".to_string()),
        d if d >= 0.5 => fired.push("same_month".to_string()),
        _ => {}
    }
    if content >= 0.3 {
        fired.push(format!("content_overlap({content:.2})"));
    }
    if fired.is_empty() {
        "weak signals only".to_string()
    } else {
        fired.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use spectral_common::{Location, SourceType};
    use uuid::Uuid;

    fn candidate(title: &str, city: &str, date: (i32, u32, u32), body: &str) -> DedupCandidate {
        DedupCandidate::builder()
            .id(Uuid::new_v4())
            .title(title)
            .location(Location::builder().city(city).state("AZ").country("US").build())
            .event_date(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap())
            .description(body)
            .build()
    }

    const BODY: &str = "A string of five amber lights hung over the mountains west of the city, \
        holding formation for several minutes before fading out one at a time from left to right.";

    #[test]
    fn identical_reports_are_definite() {
        let a = candidate("Phoenix lights", "Phoenix", (1997, 3, 13), BODY);
        let b = DedupCandidate {
            id: Uuid::new_v4(),
            ..a.clone()
        };
        let m = compare(&a, &b).unwrap();
        assert_eq!(m.confidence, MatchConfidence::Definite);
        assert!((m.overall - 1.0).abs() < 1e-9);
        assert!(m.details.contains("same_day"));
    }

    #[test]
    fn same_id_is_never_a_match() {
        let a = candidate("Phoenix lights", "Phoenix", (1997, 3, 13), BODY);
        assert!(compare(&a, &a).is_none());
    }

    #[test]
    fn same_source_record_is_skipped() {
        let mut a = candidate("Phoenix lights", "Phoenix", (1997, 3, 13), BODY);
        a.source_type = SourceType::Nuforc;
        a.source_local_id = Some("S12345".into());
        let b = DedupCandidate {
            id: Uuid::new_v4(),
            ..a.clone()
        };
        assert!(compare(&a, &b).is_none());
    }

    #[test]
    fn unrelated_title_and_place_exit_early() {
        let a = candidate("Phoenix lights", "Phoenix", (1997, 3, 13), BODY);
        let b = DedupCandidate::builder()
            .id(Uuid::new_v4())
            .title("Knocking in the attic")
            .location(Location::builder().city("Bangor").state("ME").build())
            .event_date(NaiveDate::from_ymd_opt(1997, 3, 13).unwrap())
            .description(BODY)
            .build();
        assert!(compare(&a, &b).is_none());
    }

    #[test]
    fn compare_is_symmetric() {
        let a = candidate("Phoenix lights", "Phoenix", (1997, 3, 13), BODY);
        let b = candidate("Lights over Phoenix mountains", "Glendale", (1997, 3, 14), "Five amber lights over the mountains.");
        assert_eq!(compare(&a, &b), compare(&b, &a));
    }

    #[test]
    fn tiers() {
        assert_eq!(confidence_for(0.85), MatchConfidence::Definite);
        assert_eq!(confidence_for(0.84), MatchConfidence::Likely);
        assert_eq!(confidence_for(0.65), MatchConfidence::Likely);
        assert_eq!(confidence_for(0.5), MatchConfidence::Possible);
    }
}
