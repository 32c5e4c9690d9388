use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::gazetteer;

// --- Geo Types ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Builds a point only when both coordinates are finite and in range.
    pub fn checked(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        valid.then_some(Self { lat, lng })
    }
}

/// Haversine great-circle distance between two lat/lng points in kilometers.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let lat1_r = lat1.to_radians();
    let lat2_r = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1_r.cos() * lat2_r.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

/// Where a report says the event happened. Every field is optional; scrapers
/// fill whatever the source exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, TypedBuilder)]
#[serde(default)]
pub struct Location {
    /// Free-text place name as written by the source ("field behind the old mill").
    #[builder(default, setter(strip_option, into))]
    pub name: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub city: Option<String>,
    /// State or province, full name or abbreviation.
    #[builder(default, setter(strip_option, into))]
    pub state: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub country: Option<String>,
    #[builder(default, setter(strip_option))]
    pub latitude: Option<f64>,
    #[builder(default, setter(strip_option))]
    pub longitude: Option<f64>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Location {
    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn city(&self) -> Option<&str> {
        non_blank(&self.city)
    }

    pub fn state(&self) -> Option<&str> {
        non_blank(&self.state)
    }

    pub fn country(&self) -> Option<&str> {
        non_blank(&self.country)
    }

    /// Coordinates, if both are present and valid. Out-of-range or NaN values
    /// are treated as missing.
    pub fn point(&self) -> Option<GeoPoint> {
        GeoPoint::checked(self.latitude?, self.longitude?)
    }

    /// State normalized to its postal abbreviation when the gazetteer knows it,
    /// otherwise the lower-cased raw value.
    pub fn state_key(&self) -> Option<String> {
        self.state().map(|s| match gazetteer::canonical_state(s) {
            Some(abbr) => abbr.to_lowercase(),
            None => s.to_lowercase(),
        })
    }

    /// Country normalized through the alias table, lower-cased.
    pub fn country_key(&self) -> Option<String> {
        self.country().map(|c| gazetteer::canonical_country(c).to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.name().is_none()
            && self.city().is_none()
            && self.state().is_none()
            && self.country().is_none()
            && self.point().is_none()
    }
}

// --- Sources ---

/// Where a report was scraped or submitted from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Nuforc,
    Bfro,
    Mufon,
    Wikipedia,
    CuratedList,
    Reddit,
    SocialMedia,
    Forum,
    UserSubmission,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Credibility tier a source type belongs to, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceTier {
    EstablishedDatabase,
    CuratedSecondary,
    SocialMedia,
    UnmoderatedCommunity,
}

impl SourceType {
    pub fn tier(&self) -> SourceTier {
        match self {
            SourceType::Nuforc | SourceType::Bfro | SourceType::Mufon => {
                SourceTier::EstablishedDatabase
            }
            SourceType::Wikipedia | SourceType::CuratedList => SourceTier::CuratedSecondary,
            SourceType::Reddit | SourceType::SocialMedia => SourceTier::SocialMedia,
            SourceType::Forum | SourceType::UserSubmission | SourceType::Unknown => {
                SourceTier::UnmoderatedCommunity
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Nuforc => "nuforc",
            SourceType::Bfro => "bfro",
            SourceType::Mufon => "mufon",
            SourceType::Wikipedia => "wikipedia",
            SourceType::CuratedList => "curated_list",
            SourceType::Reddit => "reddit",
            SourceType::SocialMedia => "social_media",
            SourceType::Forum => "forum",
            SourceType::UserSubmission => "user_submission",
            SourceType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = std::convert::Infallible;

    /// Lenient: unknown identifiers map to `Unknown` rather than failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Ok(match normalized.as_str() {
            "nuforc" => SourceType::Nuforc,
            "bfro" => SourceType::Bfro,
            "mufon" => SourceType::Mufon,
            "wikipedia" | "wiki" => SourceType::Wikipedia,
            "curated_list" | "curated" => SourceType::CuratedList,
            "reddit" => SourceType::Reddit,
            "social_media" | "twitter" | "facebook" | "youtube" => SourceType::SocialMedia,
            "forum" | "community" => SourceType::Forum,
            "user_submission" | "user" | "submission" => SourceType::UserSubmission,
            _ => SourceType::Unknown,
        })
    }
}

// --- Scoring Input ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EvidenceFlags {
    pub physical_evidence: bool,
    pub photo_video: bool,
    pub official_report: bool,
}

/// Normalized view of a candidate report, as handed to the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, TypedBuilder)]
#[serde(default)]
pub struct ScoringInput {
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(into))]
    pub summary: String,
    /// The report body. Most dimensions read from here.
    #[builder(setter(into))]
    pub description: String,
    #[builder(default, setter(strip_option, into))]
    pub category: Option<String>,
    #[builder(default)]
    pub location: Location,
    #[builder(default, setter(strip_option))]
    pub event_date: Option<NaiveDate>,
    #[builder(default, setter(strip_option))]
    pub event_time: Option<NaiveTime>,
    /// Source only gave a month/year or "summer 1997"-style date.
    #[builder(default)]
    pub date_is_approximate: bool,
    #[builder(default, setter(strip_option))]
    pub witness_count: Option<u32>,
    #[builder(default)]
    pub evidence: EvidenceFlags,
    #[builder(default, setter(strip_option, into))]
    pub evidence_summary: Option<String>,
    #[builder(default)]
    pub source_type: SourceType,
    /// Source-specific extras (engagement counts, classifications, ...).
    #[builder(default)]
    pub source_metadata: BTreeMap<String, serde_json::Value>,
    #[builder(default)]
    pub tags: BTreeSet<String>,
}

// --- Dedup Candidates ---

/// Comparable projection of a stored or pending report. `id` is required on
/// input: a defaulted nil id would make every such pair look like one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, TypedBuilder)]
pub struct DedupCandidate {
    pub id: Uuid,
    #[serde(default)]
    #[builder(default, setter(into))]
    pub title: String,
    #[serde(default)]
    #[builder(default)]
    pub location: Location,
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    #[builder(default)]
    pub source_type: SourceType,
    /// Identifier of the record inside its source (post id, report number).
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub source_local_id: Option<String>,
    #[serde(default)]
    #[builder(default, setter(into))]
    pub description: String,
}

impl DedupCandidate {
    /// Projects a scoring input into a dedup candidate.
    pub fn from_input(id: Uuid, input: &ScoringInput, source_local_id: Option<String>) -> Self {
        Self {
            id,
            title: input.title.clone(),
            location: input.location.clone(),
            event_date: input.event_date,
            source_type: input.source_type,
            source_local_id,
            description: input.description.clone(),
        }
    }

    /// `(source type, source-local id)` when the local id is usable.
    pub fn source_key(&self) -> Option<(SourceType, &str)> {
        non_blank(&self.source_local_id).map(|local| (self.source_type, local))
    }

    /// True when both records come from the same source entry. That case is an
    /// upsert, never a fuzzy duplicate.
    pub fn same_source_record(&self, other: &DedupCandidate) -> bool {
        matches!((self.source_key(), other.source_key()), (Some(a), Some(b)) if a == b)
    }

    /// Fills a missing state/country from the gazetteer, looking at the
    /// location name, then the title, then the description.
    pub fn with_inferred_region(mut self) -> Self {
        if let Some(state) = self.location.state() {
            if self.location.country().is_none() {
                if let Some(country) = gazetteer::country_for_state(state) {
                    self.location.country = Some(country.to_string());
                }
            }
            return self;
        }

        let hint = [self.location.name(), Some(self.title.as_str()), Some(self.description.as_str())]
            .into_iter()
            .flatten()
            .find_map(gazetteer::infer_region);

        if let Some(hint) = hint {
            self.location.state = Some(hint.state.to_string());
            if self.location.country().is_none() {
                self.location.country = Some(hint.country.to_string());
            }
        }
        self
    }
}
