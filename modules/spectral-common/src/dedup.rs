use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse bucket summarizing an overall similarity for human review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    Possible,
    Likely,
    Definite,
}

impl std::fmt::Display for MatchConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchConfidence::Possible => write!(f, "possible"),
            MatchConfidence::Likely => write!(f, "likely"),
            MatchConfidence::Definite => write!(f, "definite"),
        }
    }
}

/// Judgement that two candidates describe the same event.
///
/// The pair is stored in canonical order (`first_id < second_id`) so comparing
/// `a` with `b` and `b` with `a` yields the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DedupMatch {
    pub first_id: Uuid,
    pub second_id: Uuid,
    pub title_similarity: f64,
    pub location_similarity: f64,
    pub date_similarity: f64,
    pub content_similarity: f64,
    pub overall: f64,
    pub confidence: MatchConfidence,
    /// Comma-separated list of the signals that fired.
    pub details: String,
}

impl DedupMatch {
    pub fn involves(&self, id: Uuid) -> bool {
        self.first_id == id || self.second_id == id
    }

    /// The other record of the pair, if `id` is part of it.
    pub fn counterpart(&self, id: Uuid) -> Option<Uuid> {
        if self.first_id == id {
            Some(self.second_id)
        } else if self.second_id == id {
            Some(self.first_id)
        } else {
            None
        }
    }
}
