pub mod dedup;
pub mod gate;
pub mod phenomena;
pub mod rejection;
pub mod scoring;
pub mod similarity;
pub mod status;
pub mod text;

pub use dedup::{compare, find_duplicates, find_duplicates_cancellable, find_matches_for};
pub use gate::{Assessment, QualityGate};
pub use rejection::{classify, RejectionFilter, Verdict};
pub use scoring::{score, validate_scorer_configuration};
pub use status::status_from_score;
