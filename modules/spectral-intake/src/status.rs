//! Maps a 0-100 composite to a publication status.

use spectral_common::{IntakeError, PublicationStatus};

/// An ordered (approve, review) pair on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusThresholds {
    /// At or above: approved.
    pub approve: f64,
    /// At or above (and below `approve`): pending review.
    pub review: f64,
}

/// Thresholds for the ten-dimension composite. The only pair used for
/// publication decisions.
pub const CANONICAL_THRESHOLDS: StatusThresholds = StatusThresholds {
    approve: 60.0,
    review: 35.0,
};

/// Thresholds the retired four-part scorer was tuned against. Kept for
/// reading historical grades only; never applied to the current composite.
#[deprecated(note = "four-part scorer thresholds; use CANONICAL_THRESHOLDS")]
pub const LEGACY_THRESHOLDS: StatusThresholds = StatusThresholds {
    approve: 70.0,
    review: 40.0,
};

impl StatusThresholds {
    /// Total over the real line: the score is clamped to [0, 100] first and
    /// NaN is treated as 0.
    pub fn decide(&self, score: f64) -> PublicationStatus {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 100.0) };
        if score >= self.approve {
            PublicationStatus::Approved
        } else if score >= self.review {
            PublicationStatus::PendingReview
        } else {
            PublicationStatus::Rejected
        }
    }

    pub fn validate(&self) -> Result<(), IntakeError> {
        let in_range = |t: f64| t > 0.0 && t <= 100.0;
        if !(in_range(self.approve) && in_range(self.review) && self.approve > self.review) {
            return Err(IntakeError::UnorderedThresholds {
                approve: self.approve,
                review: self.review,
            });
        }
        Ok(())
    }
}

pub fn status_from_score(score: f64) -> PublicationStatus {
    CANONICAL_THRESHOLDS.decide(score)
}
