//! Scenario-driven scorer tests.
//!
//! Pure functions, no storage. Validates `scoring::score()` and the status
//! decision against report shapes seen from real sources.
//!
//! Run with: cargo test -p spectral-intake --test quality_scenarios_test

use chrono::{NaiveDate, NaiveTime, Utc};
use serde_json::json;

use spectral_common::{
    EvidenceFlags, Grade, IntakeConfig, Location, PublicationStatus, QualityDimension,
    ScoringInput, SourceType,
};
use spectral_intake::{score, status_from_score, QualityGate};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const DETAILED_BODY: &str = "On the evening of March 3 my husband and I were driving home on Highway 89 \
north of Flagstaff when we both saw a bright white light hovering about 500 feet above the road. \
I am a retired pilot, so I pulled over at mile marker 412 and watched it for about 4 minutes.\n\n\
At first it was silent. Then we heard a low humming that we felt as a vibration through the car. \
The light split into three orbs, which moved in a tight triangle before they suddenly accelerated \
to the east. A truck driver parked behind us also saw it, and I called the sheriff's office to file \
a report. My husband recorded video on his phone and we took two photos.\n\n\
We were shaking afterwards and could not sleep that night.";

fn detailed_report() -> ScoringInput {
    ScoringInput::builder()
        .title("Three orbs over Highway 89 near Flagstaff")
        .summary("Two witnesses watched a hovering light split into three orbs")
        .description(DETAILED_BODY)
        .category("ufo")
        .location(
            Location::builder()
                .name("Highway 89, mile marker 412")
                .city("Flagstaff")
                .state("AZ")
                .country("US")
                .latitude(35.3601)
                .longitude(-111.5370)
                .build(),
        )
        .event_date(NaiveDate::from_ymd_opt(2022, 3, 3).unwrap())
        .event_time(NaiveTime::from_hms_opt(20, 40, 0).unwrap())
        .witness_count(3)
        .evidence(EvidenceFlags {
            physical_evidence: false,
            photo_video: true,
            official_report: true,
        })
        .evidence_summary("Phone video of roughly one minute and two still photos; sheriff report filed the same night")
        .source_type(SourceType::Nuforc)
        .source_metadata([("investigated".to_string(), json!(true))].into_iter().collect())
        .tags(["orbs".to_string(), "triangle".to_string()].into_iter().collect())
        .build()
}

/// Roughly 40 words, nothing structured, from a community forum.
fn thin_forum_post() -> ScoringInput {
    ScoringInput::builder()
        .title("weird thing")
        .description(
            "Something weird was in the sky tonight. It looked kind of like a star but it was not \
             a star at all. No idea what it was honestly. Has this happened to anybody here before \
             or is it just me being paranoid.",
        )
        .source_type(SourceType::Forum)
        .build()
}

fn body_of(words: usize) -> String {
    const FILLER: &[&str] = &[
        "the", "object", "drifted", "slowly", "over", "field", "while", "a", "dog", "barked",
        "near", "fence", "and", "wind", "picked", "up",
    ];
    (0..words).map(|i| FILLER[i % FILLER.len()]).collect::<Vec<_>>().join(" ")
}

// ===========================================================================
// Scenario: detailed first-hand report from an established database
// ===========================================================================

#[test]
fn detailed_database_report_is_approved() {
    let report = score(&detailed_report());

    assert!(report.composite >= 60.0, "composite {:.1}", report.composite);
    assert!(report.grade <= Grade::B, "grade {}", report.grade);
    assert_eq!(report.recommended_status, PublicationStatus::Approved);

    let location = report.dimension(QualityDimension::LocationSpecificity).unwrap();
    assert!(location.raw >= 8.0, "{}", location.rationale);
    let evidence = report.dimension(QualityDimension::EvidenceStrength).unwrap();
    assert!(evidence.raw >= 6.0, "{}", evidence.rationale);
}

// ===========================================================================
// Scenario: 40-word body, no location, no date, unmoderated community source
// ===========================================================================

#[test]
fn thin_community_post_lands_in_bottom_bands() {
    let report = score(&thin_forum_post());

    assert!(matches!(report.grade, Grade::D | Grade::F), "grade {}", report.grade);
    assert!(matches!(
        report.recommended_status,
        PublicationStatus::Rejected | PublicationStatus::PendingReview
    ));
    assert_eq!(report.dimension(QualityDimension::LocationSpecificity).unwrap().raw, 0.0);
    assert_eq!(report.dimension(QualityDimension::TemporalPrecision).unwrap().raw, 0.0);
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn scoring_is_idempotent_ignoring_timestamp() {
    let input = detailed_report();
    let first = score(&input);
    let second = score(&input);
    assert_eq!(first, second);
    assert_eq!(first.scorer_version, "dimensional-v2");
}

#[test]
fn description_detail_never_drops_as_body_grows() {
    let mut previous = 0.0;
    for words in (40..=600).step_by(20) {
        let input = ScoringInput::builder().title("Drifting object").description(body_of(words)).build();
        let detail = score(&input).dimension(QualityDimension::DescriptionDetail).unwrap().raw;
        assert!(detail >= previous, "{words} words scored {detail}, below {previous}");
        previous = detail;
    }
}

#[test]
fn composite_matches_weighted_dimensions() {
    let report = score(&detailed_report());
    let weighted: f64 = report.dimensions.iter().map(|d| d.raw * d.weight).sum();
    let weights: f64 = report.dimensions.iter().map(|d| d.weight).sum();
    assert!((report.composite - 100.0 * weighted / (weights * 10.0)).abs() < 1e-9);
    assert_eq!(status_from_score(report.composite), report.recommended_status);
}

#[test]
fn source_tier_moves_the_composite() {
    let mut forum = detailed_report();
    forum.source_type = SourceType::Forum;
    forum.source_metadata.clear();
    assert!(score(&detailed_report()).composite > score(&forum).composite);
}

// ===========================================================================
// Gate: filter then score
// ===========================================================================

#[test]
fn gate_scores_passing_candidates_only() {
    let mut gate = QualityGate::new(&IntakeConfig::default()).unwrap();

    let passed = gate.assess_quality(&detailed_report(), Utc::now());
    assert!(passed.passed);
    assert_eq!(passed.report.unwrap().recommended_status, PublicationStatus::Approved);
    assert_eq!(passed.inferred_category, None, "category already set");

    let mut meta = detailed_report();
    meta.title = "Share your scariest ghost story".into();
    let rejected = gate.assess_quality(&meta, Utc::now());
    assert!(!rejected.passed);
    assert!(rejected.reason.unwrap().starts_with("meta_post"));
}
