//! Scenario-driven near-duplicate tests: pairwise comparison, blocking and
//! the incremental check.
//!
//! Run with: cargo test -p spectral-intake --test dedup_scenarios_test

use std::collections::BTreeSet;
use std::sync::atomic::AtomicBool;

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use spectral_common::{DedupCandidate, Location, MatchConfidence, SourceType};
use spectral_intake::dedup::{bucket_key, UNLOCATED_BUCKET};
use spectral_intake::{compare, find_duplicates, find_duplicates_cancellable, find_matches_for};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + Duration::days(offset)
}

fn candidate(title: &str, city: &str, state: &str, offset: i64, body: &str) -> DedupCandidate {
    DedupCandidate::builder()
        .id(Uuid::new_v4())
        .title(title)
        .location(Location::builder().city(city).state(state).country("US").build())
        .event_date(day(offset))
        .description(body)
        .build()
}

fn pair_set(matches: &[spectral_common::DedupMatch]) -> BTreeSet<(Uuid, Uuid)> {
    matches.iter().map(|m| (m.first_id, m.second_id)).collect()
}

/// Several reports per state; true duplicates always share a state.
fn corpus() -> Vec<DedupCandidate> {
    vec![
        candidate(
            "Orange orbs above Boulder foothills",
            "Boulder",
            "CO",
            100,
            "Three orange orbs rose slowly above the Boulder foothills and hovered in a line before winking out one after another.",
        ),
        candidate(
            "Orange orbs over the Boulder foothills",
            "Boulder",
            "Colorado",
            101,
            "Three orange orbs rose slowly above the foothills near Boulder and hovered in a line before winking out.",
        ),
        candidate(
            "Sasquatch tracks near Mount Rainier",
            "Ashford",
            "WA",
            200,
            "Huge five-toed tracks crossed the muddy logging road below Mount Rainier, each one nearly seventeen inches long.",
        ),
        candidate(
            "Bigfoot tracks found near Mt Rainier",
            "Ashford",
            "Washington",
            203,
            "We found huge five-toed tracks crossing the muddy logging road below Mount Rainier, nearly seventeen inches long.",
        ),
        candidate(
            "Knocking inside plantation house",
            "St Francisville",
            "LA",
            300,
            "Every night at three the knocking started inside the walls of the plantation house and moved from room to room.",
        ),
        candidate(
            "Knocking heard inside the old plantation house",
            "St Francisville",
            "LA",
            300,
            "At three every night knocking started inside the walls of the old plantation house and moved from room to room.",
        ),
        candidate(
            "Marfa lights flickering east of town",
            "Marfa",
            "TX",
            400,
            "Pale yellow lights flickered on the desert floor east of Marfa, splitting apart and merging again for twenty minutes.",
        ),
        candidate(
            "Shadow person in a Dallas hallway",
            "Dallas",
            "TX",
            50,
            "A tall dark shape stood at the end of my hallway and slid sideways into the bathroom when I switched the lamp on.",
        ),
        candidate(
            "Cold spot in lighthouse keeper cottage",
            "Portland",
            "ME",
            700,
            "The kitchen of the keeper cottage dropped to freezing in seconds while the thermostat read seventy degrees.",
        ),
    ]
}

fn full_scan(candidates: &[DedupCandidate]) -> Vec<spectral_common::DedupMatch> {
    let mut matches = Vec::new();
    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            matches.extend(compare(a, b));
        }
    }
    matches
}

// ===========================================================================
// Scenario: two Denver reports from the same week
// ===========================================================================

#[test]
fn denver_lights_same_week_are_likely_duplicates() {
    // Only the state is known on either side, spelled two ways.
    let a = DedupCandidate::builder()
        .id(Uuid::new_v4())
        .title("Strange lights over Denver")
        .location(Location::builder().state("CO").country("US").build())
        .event_date(day(223))
        .description(
            "Driving north on Interstate 25 just after sunset we noticed three orange lights hanging motionless \
             above the foothills west of the city. They held a tight triangle for several minutes, then drifted \
             slowly south without any sound before fading out one by one.",
        )
        .build();
    let b = DedupCandidate::builder()
        .id(Uuid::new_v4())
        .title("UFO sighting near Denver, CO")
        .location(Location::builder().state("Colorado").country("USA").build())
        .event_date(day(226))
        .description(
            "Driving north on Interstate 25 just after sunset we noticed three orange lights hanging motionless \
             above the foothills west of the city. They held a tight triangle for several minutes, then drifted \
             slowly toward the south and my phone camera only showed a blur.",
        )
        .build();

    let m = compare(&a, &b).expect("should match");
    assert!((m.content_similarity - 0.6).abs() < 0.01, "content {:.3}", m.content_similarity);
    assert!((m.location_similarity - 1.0).abs() < 1e-9);
    assert_eq!(m.date_similarity, 0.8);
    assert!(m.overall >= 0.65, "overall {:.3}", m.overall);
    assert_eq!(m.confidence, MatchConfidence::Likely);
    assert!(m.details.contains("same_week"));
    assert!(m.details.contains("location_match"));
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn comparison_is_symmetric() {
    let corpus = corpus();
    for a in &corpus {
        for b in &corpus {
            assert_eq!(compare(a, b), compare(b, a));
        }
    }
}

#[test]
fn record_never_matches_itself() {
    for c in corpus() {
        assert!(compare(&c, &c).is_none());
    }
}

#[test]
fn blocked_batch_equals_full_scan() {
    let corpus = corpus();
    let blocked = find_duplicates(&corpus);
    let unblocked = full_scan(&corpus);

    assert_eq!(pair_set(&blocked), pair_set(&unblocked));
    assert_eq!(blocked.len(), 3);
}

#[test]
fn same_source_pairs_skipped_in_batch() {
    let mut corpus = corpus();
    for c in corpus.iter_mut().take(2) {
        c.source_type = SourceType::Reddit;
        c.source_local_id = Some("t3_abc123".into());
    }
    let matches = find_duplicates(&corpus);
    assert!(matches.iter().all(|m| !(m.involves(corpus[0].id) && m.involves(corpus[1].id))));
    assert_eq!(matches.len(), 2);
}

#[test]
fn cancellation_reports_skipped_buckets() {
    let corpus = corpus();
    let outcome = find_duplicates_cancellable(&corpus, &AtomicBool::new(true));
    assert!(!outcome.is_complete());
    assert_eq!(outcome.skipped_buckets.len(), outcome.stats.buckets);
    assert!(outcome.into_result().is_err());
}

#[test]
fn blocking_stats_reflect_buckets() {
    let corpus = corpus();
    let outcome = find_duplicates_cancellable(&corpus, &AtomicBool::new(false));
    // co, wa, la, tx (2 each) + me (1)
    assert_eq!(outcome.stats.buckets, 5);
    assert_eq!(outcome.stats.pairs_compared, 4);
    assert_eq!(outcome.stats.naive_pairs, 36);
}

// ===========================================================================
// Incremental check and region inference
// ===========================================================================

#[test]
fn new_candidate_checked_against_its_bucket() {
    let existing = corpus();
    let new = candidate(
        "Orange orbs above the Boulder foothills again",
        "Boulder",
        "co",
        100,
        "Three orange orbs rose slowly above the Boulder foothills and hovered in a line before winking out.",
    );
    let matches = find_matches_for(&new, &existing);
    assert_eq!(matches.len(), 2);
    assert!(matches[0].overall >= matches[1].overall);
}

#[test]
fn inferred_region_moves_candidate_out_of_unlocated() {
    let raw = DedupCandidate::builder()
        .id(Uuid::new_v4())
        .title("Lights near Sedona, AZ")
        .description("Bright lights over the red rocks.")
        .build();
    assert_eq!(bucket_key(&raw), UNLOCATED_BUCKET);
    assert_eq!(bucket_key(&raw.with_inferred_region()), "state:az");
}
