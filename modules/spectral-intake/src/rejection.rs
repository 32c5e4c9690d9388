//! Cheap text-only classifier that turns away obviously unpublishable posts
//! before the scorer runs.
//!
//! Rules run in priority order and the first hit wins:
//! 1. removed/deleted placeholder bodies (always)
//! 2. minimum body length (always)
//! 3. meta-posts soliciting stories
//! 4. non-experience content (art, merchandise, media commentary)
//! 5. explicit fiction markers
//! 6. low-effort markers, only for bodies below `low_effort_body_chars`
//! 7. links to known spam / link-shortener hosts
//!
//! Anything that matches nothing passes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use spectral_common::IntakeConfig;

use crate::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectCategory {
    RemovedPlaceholder,
    TooShort,
    MetaPost,
    NonExperience,
    Fiction,
    LowEffort,
    SpamLink,
}

impl RejectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectCategory::RemovedPlaceholder => "removed_placeholder",
            RejectCategory::TooShort => "too_short",
            RejectCategory::MetaPost => "meta_post",
            RejectCategory::NonExperience => "non_experience",
            RejectCategory::Fiction => "fiction",
            RejectCategory::LowEffort => "low_effort",
            RejectCategory::SpamLink => "spam_link",
        }
    }
}

/// Why a post was turned away. `detail` names the pattern or measurement
/// that fired, for the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub category: RejectCategory,
    pub detail: String,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category.as_str(), self.detail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Reject(Rejection),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Pass => None,
            Verdict::Reject(r) => Some(r),
        }
    }
}

const PLACEHOLDER_BODIES: &[&str] = &[
    "[deleted]",
    "[removed]",
    "[deleted by user]",
    "[removed by moderator]",
    "deleted",
    "removed",
];

static META_POST_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(?:share|tell|post|drop)\s+(?:me\s+|us\s+)?your\s+(?:\w+\s+){0,3}?(?:stories|story|experiences?|encounters?)\b",
        r"(?i)\bwhat(?:'s|\s+is|\s+was)\s+your\s+(?:scariest|creepiest|weirdest|strangest|most\s+\w+)\b",
        r"(?i)\b(?:anyone|anybody)\s+(?:else\s+)?(?:have|had|got)\s+(?:any\s+)?(?:\w+\s+)?(?:stories|experiences)\b",
        r"(?i)\blooking\s+for\s+(?:\w+\s+)?(?:stories|experiences|recommendations)\b",
        r"(?i)\b(?:weekly|monthly|daily)\s+(?:discussion\s+)?thread\b",
        r"(?i)\bmegathread\b",
        r"(?i)\b(?:ama|ask\s+me\s+anything)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static NON_EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(?:i|my\s+\w+)\s+(?:drew|painted|sketched|sculpted|made\s+(?:this|a)\s+(?:drawing|painting|model))\b",
        r"(?i)\b(?:fan\s*art|artwork|digital\s+art|my\s+art)\b",
        r"(?i)\b(?:for\s+sale|buy\s+now|merch(?:andise)?|t-?shirts?|etsy|shop\s+link|discount\s+code|use\s+code)\b",
        r"(?i)\b(?:book|movie|film|documentary|podcast|episode|show)\s+(?:review|recommendations?|trailer)\b",
        r"(?i)\b(?:news\s+article|breaking\s+news|according\s+to\s+(?:the\s+)?(?:news|reports?))\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static FICTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(?:creepypasta|nosleep|writing\s+prompt|short\s+story\s+i\s+wrote|work\s+of\s+fiction)\b",
        r"(?i)\bthis\s+(?:story\s+)?is\s+(?:pure\s+)?fiction(?:al)?\b",
        r"(?i)\b(?:chapter\s+\d+|part\s+\d+\s+of\s+\d+)\b",
        r"(?i)(?:^|\s)[\[(](?:oc|fiction)[\])]",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static SPAM_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)https?://(?:www\.)?(bit\.ly|tinyurl\.com|goo\.gl|t\.co|ow\.ly|adf\.ly|shorte\.st|cutt\.ly|rebrand\.ly|linktr\.ee|onlyfans\.com|telegra\.ph)(?:[/?#\s]|$)",
    )
    .unwrap()
});

/// Low-effort: fewer words than this in a short body.
const LOW_EFFORT_MIN_WORDS: usize = 12;
/// Low-effort: upper-case share of letters at or above this (needs enough letters).
const LOW_EFFORT_CAPS_RATIO: f64 = 0.7;
const LOW_EFFORT_CAPS_MIN_LETTERS: usize = 20;
/// Low-effort: a single character repeated at least this many times.
const LOW_EFFORT_CHAR_RUN: usize = 6;

type Check = fn(&RejectionFilter, &str, &str) -> Option<String>;

/// Pattern banks in priority order.
const RULES: &[(RejectCategory, Check)] = &[
    (RejectCategory::MetaPost, meta_post),
    (RejectCategory::NonExperience, non_experience),
    (RejectCategory::Fiction, fiction),
    (RejectCategory::LowEffort, RejectionFilter::low_effort),
    (RejectCategory::SpamLink, spam_link),
];

fn meta_post(_: &RejectionFilter, title: &str, body: &str) -> Option<String> {
    first_match(&META_POST_PATTERNS, title, body)
}

fn non_experience(_: &RejectionFilter, title: &str, body: &str) -> Option<String> {
    first_match(&NON_EXPERIENCE_PATTERNS, title, body)
}

fn fiction(_: &RejectionFilter, title: &str, body: &str) -> Option<String> {
    first_match(&FICTION_PATTERNS, title, body)
}

fn spam_link(_: &RejectionFilter, _title: &str, body: &str) -> Option<String> {
    SPAM_LINK_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| format!("link to {}", m.as_str().to_lowercase()))
}

fn first_match(patterns: &[Regex], title: &str, body: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.find(title).or_else(|| re.find(body)))
        .map(|m| format!("matched {:?}", m.as_str().trim()))
}

#[derive(Debug, Clone)]
pub struct RejectionFilter {
    min_body_chars: usize,
    low_effort_body_chars: usize,
}

impl Default for RejectionFilter {
    fn default() -> Self {
        Self::new(&IntakeConfig::default())
    }
}

impl RejectionFilter {
    pub fn new(config: &IntakeConfig) -> Self {
        Self {
            min_body_chars: config.min_body_chars,
            low_effort_body_chars: config.low_effort_body_chars,
        }
    }

    /// Classify a post. Pure and total: every input maps to one verdict.
    pub fn classify(&self, title: &str, body: &str) -> Verdict {
        let trimmed = body.trim();

        if PLACEHOLDER_BODIES
            .iter()
            .any(|p| trimmed.eq_ignore_ascii_case(p))
        {
            return reject(RejectCategory::RemovedPlaceholder, format!("body is {trimmed:?}"));
        }

        let length = trimmed.chars().count();
        if length < self.min_body_chars {
            return reject(
                RejectCategory::TooShort,
                format!("{length} chars, minimum {}", self.min_body_chars),
            );
        }

        for (category, check) in RULES {
            if let Some(detail) = check(self, title, trimmed) {
                return reject(*category, detail);
            }
        }

        Verdict::Pass
    }

    fn low_effort(&self, _title: &str, body: &str) -> Option<String> {
        if body.chars().count() >= self.low_effort_body_chars {
            return None;
        }

        let words = text::word_count(body);
        if words < LOW_EFFORT_MIN_WORDS {
            return Some(format!("only {words} words"));
        }

        let (ratio, letters) = text::caps_ratio(body);
        if letters >= LOW_EFFORT_CAPS_MIN_LETTERS && ratio >= LOW_EFFORT_CAPS_RATIO {
            return Some(format!("{:.0}% upper-case", ratio * 100.0));
        }

        let run = text::longest_char_run(body);
        if run >= LOW_EFFORT_CHAR_RUN {
            return Some(format!("character repeated {run} times"));
        }

        None
    }
}

fn reject(category: RejectCategory, detail: String) -> Verdict {
    Verdict::Reject(Rejection { category, detail })
}

/// Classify with the default thresholds.
pub fn classify(title: &str, body: &str) -> Verdict {
    RejectionFilter::default().classify(title, body)
}
