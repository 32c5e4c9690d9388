//! Location blocking for batch duplicate detection.
//!
//! Candidates are bucketed by state/province, then country, then a catch-all
//! unlocated bucket. Pairs are only compared inside a bucket, so cost is the
//! sum of squared bucket sizes rather than the square of the corpus. Buckets
//! share nothing and run in parallel.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::Serialize;
use spectral_common::{DedupCandidate, DedupMatch, IntakeError};
use tracing::{debug, info, warn};

use super::compare;

pub const UNLOCATED_BUCKET: &str = "unlocated";

/// Above this the unlocated bucket dominates the batch; region inference
/// upstream should be shrinking it.
pub const UNLOCATED_WARN_SIZE: usize = 500;

/// Blocking key: `state:<abbr>`, else `country:<code>`, else `unlocated`.
pub fn bucket_key(candidate: &DedupCandidate) -> String {
    if let Some(state) = candidate.location.state_key() {
        return format!("state:{state}");
    }
    if let Some(country) = candidate.location.country_key() {
        return format!("country:{country}");
    }
    UNLOCATED_BUCKET.to_string()
}

fn partition(candidates: &[DedupCandidate]) -> BTreeMap<String, Vec<&DedupCandidate>> {
    let mut buckets: BTreeMap<String, Vec<&DedupCandidate>> = BTreeMap::new();
    for candidate in candidates {
        buckets.entry(bucket_key(candidate)).or_default().push(candidate);
    }
    buckets
}

fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockingStats {
    pub candidates: usize,
    pub buckets: usize,
    pub largest_bucket: usize,
    pub unlocated: usize,
    /// Pairs inside buckets.
    pub pairs_compared: usize,
    /// Pairs a full scan would compare.
    pub naive_pairs: usize,
}

impl BlockingStats {
    fn from_buckets(buckets: &BTreeMap<String, Vec<&DedupCandidate>>, candidates: usize) -> Self {
        Self {
            candidates,
            buckets: buckets.len(),
            largest_bucket: buckets.values().map(Vec::len).max().unwrap_or(0),
            unlocated: buckets.get(UNLOCATED_BUCKET).map_or(0, Vec::len),
            pairs_compared: buckets.values().map(|b| pair_count(b.len())).sum(),
            naive_pairs: pair_count(candidates),
        }
    }

    /// Fraction of naive pairs avoided by blocking.
    pub fn reduction(&self) -> f64 {
        if self.naive_pairs == 0 {
            return 0.0;
        }
        1.0 - self.pairs_compared as f64 / self.naive_pairs as f64
    }
}

/// Result of a batch run that may have been cancelled between buckets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    pub matches: Vec<DedupMatch>,
    pub completed_buckets: Vec<String>,
    /// Buckets not started because cancellation was requested. Rerun these.
    pub skipped_buckets: Vec<String>,
    pub stats: BlockingStats,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.skipped_buckets.is_empty()
    }

    /// Matches of a complete run, or `Cancelled` when any bucket was skipped.
    pub fn into_result(self) -> Result<Vec<DedupMatch>, IntakeError> {
        if self.is_complete() {
            Ok(self.matches)
        } else {
            Err(IntakeError::Cancelled {
                skipped: self.skipped_buckets.len(),
                total: self.stats.buckets,
            })
        }
    }
}

fn compare_bucket(members: &[&DedupCandidate]) -> Vec<DedupMatch> {
    let mut matches = Vec::new();
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            if let Some(m) = compare(a, b) {
                matches.push(m);
            }
        }
    }
    matches
}

fn sort_matches(matches: &mut [DedupMatch]) {
    matches.sort_by(|x, y| (x.first_id, x.second_id).cmp(&(y.first_id, y.second_id)));
}

/// Blocked batch comparison over the whole candidate set.
pub fn find_duplicates(candidates: &[DedupCandidate]) -> Vec<DedupMatch> {
    find_duplicates_cancellable(candidates, &AtomicBool::new(false)).matches
}

/// Like `find_duplicates`, but checks `cancel` before starting each bucket.
/// A bucket already running always finishes, so every completed bucket's
/// matches are whole.
pub fn find_duplicates_cancellable(candidates: &[DedupCandidate], cancel: &AtomicBool) -> BatchOutcome {
    let buckets = partition(candidates);
    let stats = BlockingStats::from_buckets(&buckets, candidates.len());

    if stats.unlocated > UNLOCATED_WARN_SIZE {
        warn!(
            unlocated = stats.unlocated,
            "Unlocated bucket is large; infer regions before dedup"
        );
    }

    let results: Vec<(String, Option<Vec<DedupMatch>>)> = buckets
        .into_par_iter()
        .map(|(key, members)| {
            if cancel.load(Ordering::Relaxed) {
                return (key, None);
            }
            let matches = compare_bucket(&members);
            debug!(bucket = key.as_str(), size = members.len(), matches = matches.len(), "Bucket compared");
            (key, Some(matches))
        })
        .collect();

    let mut outcome = BatchOutcome {
        stats,
        ..Default::default()
    };
    for (key, result) in results {
        match result {
            Some(matches) => {
                outcome.matches.extend(matches);
                outcome.completed_buckets.push(key);
            }
            None => outcome.skipped_buckets.push(key),
        }
    }
    sort_matches(&mut outcome.matches);

    info!(
        candidates = outcome.stats.candidates,
        buckets = outcome.stats.buckets,
        largest_bucket = outcome.stats.largest_bucket,
        pairs_compared = outcome.stats.pairs_compared,
        naive_pairs = outcome.stats.naive_pairs,
        matches = outcome.matches.len(),
        skipped = outcome.skipped_buckets.len(),
        "Dedup batch complete"
    );

    outcome
}

/// Incremental check at ingestion time: the new candidate against existing
/// records in its own bucket only. Strongest match first.
pub fn find_matches_for(candidate: &DedupCandidate, existing: &[DedupCandidate]) -> Vec<DedupMatch> {
    let key = bucket_key(candidate);
    let mut matches: Vec<DedupMatch> = existing
        .iter()
        .filter(|other| bucket_key(other) == key)
        .filter_map(|other| compare(candidate, other))
        .collect();
    matches.sort_by(|x, y| y.overall.total_cmp(&x.overall));
    matches
}
