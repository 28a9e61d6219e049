//! Raw source records and per-source provenance.
//!
//! The shapes below mirror the JSON bodies the (out-of-scope) route handlers
//! receive from upstream collaborators. Every field is optional so a partial
//! payload deserializes cleanly; missing data is represented structurally and
//! resolved into questions later, never raised as an error.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::business::PhotoCategory;

/// Everything the engine consumes for one generation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineInput {
    pub profile: Option<ProfileRecord>,
    pub place_search: Option<PlaceSearchRecord>,
    pub search_results: Option<SearchResultsRecord>,
    pub operator_answers: Option<OperatorAnswers>,
    pub industry_hint: Option<String>,
}

/// Provenance tag for conflict resolution. Lower rank wins a conflict.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    OperatorAnswers,
    Profile,
    PlaceSearch,
    SearchResults,
}

impl SourceKind {
    pub fn rank(self) -> u8 {
        match self {
            SourceKind::OperatorAnswers => 0,
            SourceKind::Profile => 1,
            SourceKind::PlaceSearch => 2,
            SourceKind::SearchResults => 3,
        }
    }

    /// Baseline trust in a field supplied by this source.
    pub fn prior(self) -> f64 {
        match self {
            SourceKind::OperatorAnswers => 1.0,
            SourceKind::Profile => 0.9,
            SourceKind::PlaceSearch => 0.75,
            SourceKind::SearchResults => 0.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::OperatorAnswers => "operator answers",
            SourceKind::Profile => "business profile",
            SourceKind::PlaceSearch => "place search",
            SourceKind::SearchResults => "web search",
        }
    }
}

/// Closed set of tracked business fields.
///
/// This enum is the single mapping table between loosely-typed upstream data
/// and the engine: contributions, fact lists, confidence maps, and question
/// gating all key on it instead of scattering string lookups around.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Name,
    Industry,
    Phone,
    Website,
    Address,
    Coordinates,
    Hours,
    ServiceRadius,
    Description,
    Tagline,
    Services,
    Differentiators,
    Photos,
    Reviews,
    Rating,
    ReviewCount,
    Certifications,
    Awards,
    YearsInBusiness,
    Competitors,
    SocialLinks,
    Colors,
}

impl FieldKey {
    pub const ALL: &'static [FieldKey] = &[
        FieldKey::Name,
        FieldKey::Industry,
        FieldKey::Phone,
        FieldKey::Website,
        FieldKey::Address,
        FieldKey::Coordinates,
        FieldKey::Hours,
        FieldKey::ServiceRadius,
        FieldKey::Description,
        FieldKey::Tagline,
        FieldKey::Services,
        FieldKey::Differentiators,
        FieldKey::Photos,
        FieldKey::Reviews,
        FieldKey::Rating,
        FieldKey::ReviewCount,
        FieldKey::Certifications,
        FieldKey::Awards,
        FieldKey::YearsInBusiness,
        FieldKey::Competitors,
        FieldKey::SocialLinks,
        FieldKey::Colors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Business name",
            FieldKey::Industry => "Industry",
            FieldKey::Phone => "Phone number",
            FieldKey::Website => "Website",
            FieldKey::Address => "Address",
            FieldKey::Coordinates => "Map location",
            FieldKey::Hours => "Opening hours",
            FieldKey::ServiceRadius => "Service area",
            FieldKey::Description => "Business description",
            FieldKey::Tagline => "Tagline",
            FieldKey::Services => "Services offered",
            FieldKey::Differentiators => "Differentiators",
            FieldKey::Photos => "Photos",
            FieldKey::Reviews => "Customer reviews",
            FieldKey::Rating => "Aggregate rating",
            FieldKey::ReviewCount => "Review count",
            FieldKey::Certifications => "Certifications",
            FieldKey::Awards => "Awards",
            FieldKey::YearsInBusiness => "Years in business",
            FieldKey::Competitors => "Nearby competitors",
            FieldKey::SocialLinks => "Social profiles",
            FieldKey::Colors => "Brand colors",
        }
    }
}

/// What one source brought to the table for this request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceContribution {
    pub source: SourceKind,
    /// Overall confidence in this source's payload, in [0, 1].
    pub confidence: f64,
    pub fields: BTreeSet<FieldKey>,
}

// ---------------------------------------------------------------------------
// Raw upstream shapes
// ---------------------------------------------------------------------------

/// Structured record from the managed business-listing API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: Option<String>,
    pub primary_category: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub street_lines: Vec<String>,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub hours: Vec<RawHoursPeriod>,
    pub service_area: Option<ServiceArea>,
    pub description: Option<String>,
    pub tagline: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
    #[serde(default)]
    pub reviews: Vec<RawReview>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    pub years_in_business: Option<u32>,
    #[serde(default)]
    pub colors: Vec<String>,
}

/// Structured record from the general place-search/maps API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceSearchRecord {
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    pub formatted_address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    #[serde(default)]
    pub hours: Vec<RawHoursPeriod>,
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
    #[serde(default)]
    pub reviews: Vec<RawReview>,
}

/// Semi-structured web search results mined for mentions and competitors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResultsRecord {
    #[serde(default)]
    pub snippets: Vec<SearchSnippet>,
    pub website: Option<String>,
    #[serde(default)]
    pub social_links: Vec<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSnippet {
    pub title: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
}

/// Human-confirmed values from the question-and-answer flow.
///
/// `Option<Vec<_>>` keeps "operator did not answer" distinct from "operator
/// explicitly said none" so the overlay only touches answered fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatorAnswers {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub tagline: Option<String>,
    pub services: Option<Vec<String>>,
    pub differentiators: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub service_radius_miles: Option<f64>,
    pub years_in_business: Option<u32>,
    pub open_24_hours: Option<bool>,
    /// Photo reference -> operator-assigned category label.
    pub photo_labels: Option<BTreeMap<String, PhotoCategory>>,
    pub colors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPhoto {
    pub reference: String,
    pub category: Option<PhotoCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReview {
    pub text: Option<String>,
    pub rating: Option<f64>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHoursPeriod {
    /// Weekday index, 0 = Monday.
    pub day: Option<u8>,
    /// "HH:MM" or "HHMM"; absent means open from midnight.
    pub open: Option<String>,
    /// "HH:MM", "HHMM", or "24:00"; absent means open until end of day.
    pub close: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceArea {
    pub radius: Option<RawRadius>,
    #[serde(default)]
    pub polygon: Vec<GeoPoint>,
    #[serde(default)]
    pub places: Vec<NamedPlace>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRadius {
    pub value: f64,
    pub unit: Option<DistanceUnit>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedPlace {
    pub name: String,
    pub kind: Option<PlaceKind>,
}

impl NamedPlace {
    pub fn new(name: impl Into<String>, kind: Option<PlaceKind>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Locality,
    County,
    State,
    PostalCode,
    #[serde(other)]
    Other,
}
