//! Rejection filter scenarios over realistic scraped posts.
//!
//! Run with: cargo test -p spectral-intake --test rejection_filter_test

use spectral_common::IntakeConfig;
use spectral_intake::rejection::{RejectCategory, RejectionFilter};
use spectral_intake::{classify, Verdict};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const SIGHTING: &str = "My brother and I were fishing at the reservoir before dawn when a silent disc \
    slid out of the fog, stopped above the water for a few seconds and then shot straight up.";

fn category(verdict: &Verdict) -> Option<RejectCategory> {
    verdict.rejection().map(|r| r.category)
}

// ===========================================================================
// Scenario: story-soliciting meta post
// ===========================================================================

#[test]
fn scariest_ghost_story_request_is_meta_at_any_length() {
    let short = "Campfire tonight and we need material, so share your scariest ghost story in the comments below please!";
    let long = format!("{} {}", SIGHTING.repeat(8), "Anyway, share your scariest ghost story.");

    assert!(short.chars().count() >= 100);
    assert_eq!(category(&classify("Campfire", short)), Some(RejectCategory::MetaPost));
    assert_eq!(category(&classify("Campfire", &long)), Some(RejectCategory::MetaPost));
    assert_eq!(
        category(&classify("Share your scariest ghost story", SIGHTING)),
        Some(RejectCategory::MetaPost)
    );
}

// ===========================================================================
// Scenario: ordinary first-hand report
// ===========================================================================

#[test]
fn first_hand_sighting_passes() {
    assert!(classify("Disc over the reservoir", SIGHTING).is_pass());
}

// ===========================================================================
// Scenario: removed posts and the length floor
// ===========================================================================

#[test]
fn removed_bodies_rejected_before_length() {
    for body in ["[removed]", "[deleted]", "  [Deleted by user]  "] {
        assert_eq!(category(&classify("t", body)), Some(RejectCategory::RemovedPlaceholder));
    }
}

#[test]
fn length_floor_counts_trimmed_characters() {
    let ninety_nine = "x ".repeat(49) + "y";
    assert_eq!(ninety_nine.trim().chars().count(), 99);
    let padded = format!("   {ninety_nine}   ");
    assert_eq!(category(&classify("t", &padded)), Some(RejectCategory::TooShort));
}

#[test]
fn raised_floor_from_config() {
    let filter = RejectionFilter::new(&IntakeConfig {
        min_body_chars: 400,
        ..IntakeConfig::default()
    });
    assert_eq!(category(&filter.classify("Disc", SIGHTING)), Some(RejectCategory::TooShort));
    assert!(filter.classify("Disc", &SIGHTING.repeat(3)).is_pass());
}

// ===========================================================================
// Scenario: banks fire in priority order
// ===========================================================================

#[test]
fn non_experience_beats_fiction_and_spam() {
    let body = format!("{SIGHTING} I painted this as fan art, it's a creepypasta scene. Prints at https://bit.ly/xyz");
    assert_eq!(category(&classify("My art", &body)), Some(RejectCategory::NonExperience));
}

#[test]
fn spam_link_alone_is_enough() {
    let body = format!("{SIGHTING} More at https://tinyurl.com/abc");
    assert_eq!(category(&classify("Disc", &body)), Some(RejectCategory::SpamLink));
}
