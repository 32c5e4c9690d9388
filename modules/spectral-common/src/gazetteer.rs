//! Fixed region gazetteer: US states, Canadian provinces and a handful of
//! well-known landmarks, plus regex triggers for inferring a region from
//! free text ("near Denver, CO", "out in rural Ohio", "Skinwalker Ranch").
//!
//! Used to canonicalize state names for blocking and to fill in a region
//! when a scraper only produced free-text location.

use regex::Regex;
use std::sync::LazyLock;

/// (full name, postal abbreviation, country code)
const REGIONS: &[(&str, &str, &str)] = &[
    ("alabama", "AL", "US"),
    ("alaska", "AK", "US"),
    ("arizona", "AZ", "US"),
    ("arkansas", "AR", "US"),
    ("california", "CA", "US"),
    ("colorado", "CO", "US"),
    ("connecticut", "CT", "US"),
    ("delaware", "DE", "US"),
    ("district of columbia", "DC", "US"),
    ("florida", "FL", "US"),
    ("georgia", "GA", "US"),
    ("hawaii", "HI", "US"),
    ("idaho", "ID", "US"),
    ("illinois", "IL", "US"),
    ("indiana", "IN", "US"),
    ("iowa", "IA", "US"),
    ("kansas", "KS", "US"),
    ("kentucky", "KY", "US"),
    ("louisiana", "LA", "US"),
    ("maine", "ME", "US"),
    ("maryland", "MD", "US"),
    ("massachusetts", "MA", "US"),
    ("michigan", "MI", "US"),
    ("minnesota", "MN", "US"),
    ("mississippi", "MS", "US"),
    ("missouri", "MO", "US"),
    ("montana", "MT", "US"),
    ("nebraska", "NE", "US"),
    ("nevada", "NV", "US"),
    ("new hampshire", "NH", "US"),
    ("new jersey", "NJ", "US"),
    ("new mexico", "NM", "US"),
    ("new york", "NY", "US"),
    ("north carolina", "NC", "US"),
    ("north dakota", "ND", "US"),
    ("ohio", "OH", "US"),
    ("oklahoma", "OK", "US"),
    ("oregon", "OR", "US"),
    ("pennsylvania", "PA", "US"),
    ("rhode island", "RI", "US"),
    ("south carolina", "SC", "US"),
    ("south dakota", "SD", "US"),
    ("tennessee", "TN", "US"),
    ("texas", "TX", "US"),
    ("utah", "UT", "US"),
    ("vermont", "VT", "US"),
    ("virginia", "VA", "US"),
    ("washington", "WA", "US"),
    ("west virginia", "WV", "US"),
    ("wisconsin", "WI", "US"),
    ("wyoming", "WY", "US"),
    ("alberta", "AB", "CA"),
    ("british columbia", "BC", "CA"),
    ("manitoba", "MB", "CA"),
    ("new brunswick", "NB", "CA"),
    ("newfoundland and labrador", "NL", "CA"),
    ("nova scotia", "NS", "CA"),
    ("ontario", "ON", "CA"),
    ("prince edward island", "PE", "CA"),
    ("quebec", "QC", "CA"),
    ("saskatchewan", "SK", "CA"),
];

/// Landmarks that pin a report to a region even without a state name.
const LANDMARKS: &[(&str, &str)] = &[
    ("area 51", "NV"),
    ("bell witch cave", "TN"),
    ("bridgewater triangle", "MA"),
    ("gettysburg", "PA"),
    ("lake champlain", "VT"),
    ("lake okanagan", "BC"),
    ("lemp mansion", "MO"),
    ("marfa", "TX"),
    ("mount shasta", "CA"),
    ("myrtles plantation", "LA"),
    ("phoenix lights", "AZ"),
    ("pine barrens", "NJ"),
    ("point pleasant", "WV"),
    ("roswell", "NM"),
    ("san luis valley", "CO"),
    ("sedona", "AZ"),
    ("skinwalker ranch", "UT"),
    ("stanley hotel", "CO"),
    ("waverly hills", "KY"),
    ("winchester mystery house", "CA"),
];

const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("us", "US"),
    ("usa", "US"),
    ("u.s.", "US"),
    ("u.s.a.", "US"),
    ("united states", "US"),
    ("united states of america", "US"),
    ("america", "US"),
    ("ca", "CA"),
    ("canada", "CA"),
    ("uk", "GB"),
    ("gb", "GB"),
    ("united kingdom", "GB"),
    ("great britain", "GB"),
    ("england", "GB"),
    ("scotland", "GB"),
    ("wales", "GB"),
    ("au", "AU"),
    ("australia", "AU"),
    ("mx", "MX"),
    ("mexico", "MX"),
];

/// A region inferred from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionHint {
    pub state: &'static str,
    pub country: &'static str,
}

// ", CO" / ", BC" suffixes. Case-sensitive on purpose: "or", "in", "me" are words.
static ABBREVIATION_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([A-Z]{2})\b").unwrap());

static REGION_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mut names: Vec<&str> = REGIONS.iter().map(|(name, _, _)| *name).collect();
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let alternation = names
        .iter()
        .map(|n| regex::escape(n).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).unwrap()
});

static LANDMARK_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = LANDMARKS
        .iter()
        .map(|(name, _)| regex::escape(name).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).unwrap()
});

fn region_by_abbreviation(abbr: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    REGIONS.iter().find(|(_, a, _)| a.eq_ignore_ascii_case(abbr))
}

fn region_by_name(name: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    REGIONS.iter().find(|(n, _, _)| *n == collapsed)
}

/// Postal abbreviation for a state or province given either its full name
/// or its abbreviation, case-insensitively.
pub fn canonical_state(raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim().trim_end_matches('.');
    if trimmed.len() == 2 {
        return region_by_abbreviation(trimmed).map(|(_, abbr, _)| *abbr);
    }
    region_by_name(trimmed).map(|(_, abbr, _)| *abbr)
}

/// Country code for a known state or province.
pub fn country_for_state(raw: &str) -> Option<&'static str> {
    let abbr = canonical_state(raw)?;
    region_by_abbreviation(abbr).map(|(_, _, country)| *country)
}

/// ISO-style country code for common spellings; unknown values pass through
/// trimmed and upper-cased.
pub fn canonical_country(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| raw.trim().to_uppercase())
}

/// Infers a region from free text. Tries an explicit ", XX" suffix first,
/// then landmarks, then spelled-out state/province names.
pub fn infer_region(text: &str) -> Option<RegionHint> {
    let hint = |abbr: &str| {
        region_by_abbreviation(abbr).map(|&(_, state, country)| RegionHint { state, country })
    };

    for caps in ABBREVIATION_SUFFIX_RE.captures_iter(text) {
        if let Some(found) = caps.get(1).and_then(|m| hint(m.as_str())) {
            return Some(found);
        }
    }

    if let Some(m) = LANDMARK_RE.find(text) {
        let lowered = m.as_str().split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        if let Some(&(_, abbr)) = LANDMARKS.iter().find(|(name, _)| *name == lowered) {
            return hint(abbr);
        }
    }

    let m = REGION_NAME_RE.find(text)?;
    region_by_name(m.as_str()).and_then(|&(_, abbr, _)| hint(abbr))
}
