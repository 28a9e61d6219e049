//! Source normalization: raw records in, one `BusinessRecord` out.
//!
//! Sources are overlaid in ascending priority (search results, place search,
//! profile, operator answers) so a higher-priority source overwrites any
//! field it supplies while absent fields fall through to the value beneath.
//! The overlay is idempotent: applying the same operator answers twice
//! produces the same record as applying them once.

pub mod address;
pub mod hours;
pub mod radius;
pub mod years;

use chrono::{Datelike, Utc};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::business::{
    BrandColor, BusinessRecord, ColorSlot, PhotoRef, RadiusDerivation, ReviewExcerpt,
    ServiceRadius,
};
use crate::models::sources::{
    EngineInput, FieldKey, OperatorAnswers, PlaceSearchRecord, ProfileRecord, RawPhoto,
    RawReview, SearchResultsRecord, SourceContribution, SourceKind,
};

/// Confidence attached to a years-in-business figure mined from free text.
const EXTRACTED_YEARS_CONFIDENCE: f64 = 0.6;

/// Minimum snippet length considered usable as a description fallback.
const MIN_SNIPPET_DESCRIPTION_LEN: usize = 40;

#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Anchor for "since YYYY" conversions. Defaults to the current UTC year;
    /// tests pin it for determinism.
    pub reference_year: i32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            reference_year: Utc::now().year(),
        }
    }
}

/// Output of normalization: the merged record plus provenance bookkeeping the
/// quality evaluator consumes.
#[derive(Debug, Clone)]
pub struct NormalizedSources {
    pub business: BusinessRecord,
    /// One entry per non-null input, highest priority first.
    pub contributions: Vec<SourceContribution>,
    /// Which source won each supplied field.
    pub field_sources: BTreeMap<FieldKey, SourceKind>,
    /// Confidence overrides for fields the engine derived rather than any
    /// source supplying them directly.
    pub derived_confidence: BTreeMap<FieldKey, f64>,
}

pub fn normalize(input: &EngineInput, options: &NormalizeOptions) -> NormalizedSources {
    let mut business = BusinessRecord::default();
    let mut field_sources = BTreeMap::new();
    let mut derived_confidence = BTreeMap::new();
    let mut contributions = Vec::new();

    if let Some(search) = &input.search_results {
        let supplied = apply_search(search, &mut business, &mut field_sources);
        contributions.push(contribution(SourceKind::SearchResults, supplied));
    }
    if let Some(place) = &input.place_search {
        let supplied = apply_place(place, &mut business, &mut field_sources);
        contributions.push(contribution(SourceKind::PlaceSearch, supplied));
    }
    if let Some(profile) = &input.profile {
        let supplied = apply_profile(
            profile,
            &mut business,
            &mut field_sources,
            &mut derived_confidence,
        );
        contributions.push(contribution(SourceKind::Profile, supplied));
    }
    if let Some(answers) = &input.operator_answers {
        let supplied = apply_operator_answers(answers, &mut business, &mut field_sources);
        contributions.push(contribution(SourceKind::OperatorAnswers, supplied));
    }

    finalize_derivations(&mut business, &field_sources, &mut derived_confidence, options);
    contributions.sort_by_key(|c| c.source.rank());

    NormalizedSources {
        business,
        contributions,
        field_sources,
        derived_confidence,
    }
}

/// Overlays operator answers onto an existing record. Public so a host can
/// re-apply freshly collected answers without rebuilding the whole input;
/// overwrite semantics make repeated application idempotent.
pub fn merge_operator_answers(business: &mut BusinessRecord, answers: &OperatorAnswers) {
    let mut winners = BTreeMap::new();
    apply_operator_answers(answers, business, &mut winners);
}

fn contribution(source: SourceKind, supplied: BTreeSet<FieldKey>) -> SourceContribution {
    let coverage = supplied.len() as f64 / FieldKey::ALL.len() as f64;
    SourceContribution {
        source,
        confidence: source.prior() * (0.5 + 0.5 * coverage),
        fields: supplied,
    }
}

/// Per-source field writer: records the supplied set and the winner map as a
/// side effect of every overwrite.
struct FieldWriter<'a> {
    source: SourceKind,
    supplied: BTreeSet<FieldKey>,
    winners: &'a mut BTreeMap<FieldKey, SourceKind>,
}

impl<'a> FieldWriter<'a> {
    fn new(source: SourceKind, winners: &'a mut BTreeMap<FieldKey, SourceKind>) -> Self {
        Self {
            source,
            supplied: BTreeSet::new(),
            winners,
        }
    }

    fn mark(&mut self, field: FieldKey) {
        self.supplied.insert(field);
        self.winners.insert(field, self.source);
    }

    fn set_text(&mut self, slot: &mut Option<String>, value: Option<&str>, field: FieldKey) {
        if let Some(text) = clean(value) {
            *slot = Some(text);
            self.mark(field);
        }
    }

    fn set<T>(&mut self, slot: &mut Option<T>, value: Option<T>, field: FieldKey) {
        if let Some(value) = value {
            *slot = Some(value);
            self.mark(field);
        }
    }

    fn set_list(&mut self, slot: &mut Vec<String>, value: &[String], field: FieldKey) {
        let cleaned = dedup_case_insensitive(value);
        if !cleaned.is_empty() {
            *slot = cleaned;
            self.mark(field);
        }
    }

    fn finish(self) -> BTreeSet<FieldKey> {
        self.supplied
    }
}

fn clean(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Order-preserving case-insensitive dedup, dropping blank entries.
fn dedup_case_insensitive(values: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut result = Vec::new();
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lowered = trimmed.to_lowercase();
        if seen.contains(&lowered) {
            continue;
        }
        seen.push(lowered);
        result.push(trimmed.to_string());
    }
    result
}

fn map_photos(raw: &[RawPhoto]) -> Vec<PhotoRef> {
    raw.iter()
        .filter(|p| !p.reference.trim().is_empty())
        .map(|p| PhotoRef::new(p.reference.trim(), p.category))
        .collect()
}

fn map_reviews(raw: &[RawReview]) -> Vec<ReviewExcerpt> {
    raw.iter()
        .filter_map(|r| {
            let text = clean(r.text.as_deref())?;
            Some(ReviewExcerpt {
                text,
                rating: r.rating,
                author: clean(r.author.as_deref()),
            })
        })
        .collect()
}

fn map_colors(raw: &[String]) -> Vec<BrandColor> {
    const SLOTS: [ColorSlot; 3] = [ColorSlot::Primary, ColorSlot::Secondary, ColorSlot::Accent];
    dedup_case_insensitive(raw)
        .into_iter()
        .enumerate()
        .map(|(idx, value)| BrandColor {
            value,
            slot: SLOTS.get(idx).copied(),
        })
        .collect()
}

fn apply_search(
    record: &SearchResultsRecord,
    business: &mut BusinessRecord,
    winners: &mut BTreeMap<FieldKey, SourceKind>,
) -> BTreeSet<FieldKey> {
    let mut writer = FieldWriter::new(SourceKind::SearchResults, winners);
    writer.set_text(&mut business.website, record.website.as_deref(), FieldKey::Website);
    writer.set_list(
        &mut business.competitors,
        &record.competitors,
        FieldKey::Competitors,
    );
    writer.set_list(
        &mut business.social_links,
        &record.social_links,
        FieldKey::SocialLinks,
    );
    // Longest substantial snippet doubles as a last-resort description.
    let best_snippet = record
        .snippets
        .iter()
        .filter_map(|s| clean(s.text.as_deref()))
        .filter(|text| text.len() >= MIN_SNIPPET_DESCRIPTION_LEN)
        .max_by_key(|text| text.len());
    if let Some(snippet) = best_snippet {
        business.description = Some(snippet);
        writer.mark(FieldKey::Description);
    }
    writer.finish()
}

fn apply_place(
    record: &PlaceSearchRecord,
    business: &mut BusinessRecord,
    winners: &mut BTreeMap<FieldKey, SourceKind>,
) -> BTreeSet<FieldKey> {
    let mut writer = FieldWriter::new(SourceKind::PlaceSearch, winners);
    writer.set_text(&mut business.name, record.name.as_deref(), FieldKey::Name);
    writer.set_text(&mut business.phone, record.phone.as_deref(), FieldKey::Phone);
    writer.set_text(&mut business.website, record.website.as_deref(), FieldKey::Website);
    writer.set_text(
        &mut business.address,
        record.formatted_address.as_deref(),
        FieldKey::Address,
    );
    if let (Some(lat), Some(lng)) = (record.latitude, record.longitude) {
        business.latitude = Some(lat);
        business.longitude = Some(lng);
        writer.mark(FieldKey::Coordinates);
    }
    writer.set(&mut business.rating, record.rating, FieldKey::Rating);
    writer.set(
        &mut business.review_count,
        record.review_count,
        FieldKey::ReviewCount,
    );
    if let Some(parsed) = hours::parse_weekly_hours(&record.hours) {
        business.hours = Some(parsed);
        writer.mark(FieldKey::Hours);
    }
    let photos = map_photos(&record.photos);
    if !photos.is_empty() {
        business.photos = photos;
        writer.mark(FieldKey::Photos);
    }
    let reviews = map_reviews(&record.reviews);
    if !reviews.is_empty() {
        business.reviews = reviews;
        writer.mark(FieldKey::Reviews);
    }
    for kind in dedup_case_insensitive(&record.types) {
        if !business.category_hints.iter().any(|h| h.eq_ignore_ascii_case(&kind)) {
            business.category_hints.push(kind);
        }
    }
    writer.finish()
}

fn apply_profile(
    record: &ProfileRecord,
    business: &mut BusinessRecord,
    winners: &mut BTreeMap<FieldKey, SourceKind>,
    derived_confidence: &mut BTreeMap<FieldKey, f64>,
) -> BTreeSet<FieldKey> {
    let mut writer = FieldWriter::new(SourceKind::Profile, winners);
    writer.set_text(&mut business.name, record.name.as_deref(), FieldKey::Name);
    writer.set_text(
        &mut business.industry,
        record.primary_category.as_deref(),
        FieldKey::Industry,
    );
    writer.set_text(&mut business.phone, record.phone.as_deref(), FieldKey::Phone);
    writer.set_text(&mut business.website, record.website.as_deref(), FieldKey::Website);
    let formatted = address::format_address(
        &record.street_lines,
        record.locality.as_deref(),
        record.administrative_area.as_deref(),
        record.postal_code.as_deref(),
    );
    if let Some(formatted) = formatted {
        business.address = Some(formatted);
        writer.mark(FieldKey::Address);
    }
    if let (Some(lat), Some(lng)) = (record.latitude, record.longitude) {
        business.latitude = Some(lat);
        business.longitude = Some(lng);
        writer.mark(FieldKey::Coordinates);
    }
    if let Some(parsed) = hours::parse_weekly_hours(&record.hours) {
        business.hours = Some(parsed);
        writer.mark(FieldKey::Hours);
    }
    writer.set_text(
        &mut business.description,
        record.description.as_deref(),
        FieldKey::Description,
    );
    writer.set_text(&mut business.tagline, record.tagline.as_deref(), FieldKey::Tagline);
    writer.set_list(&mut business.services, &record.services, FieldKey::Services);
    let photos = map_photos(&record.photos);
    if !photos.is_empty() {
        business.photos = photos;
        writer.mark(FieldKey::Photos);
    }
    let reviews = map_reviews(&record.reviews);
    if !reviews.is_empty() {
        business.reviews = reviews;
        writer.mark(FieldKey::Reviews);
    }
    writer.set_list(
        &mut business.certifications,
        &record.certifications,
        FieldKey::Certifications,
    );
    writer.set_list(&mut business.awards, &record.awards, FieldKey::Awards);
    writer.set(
        &mut business.years_in_business,
        record.years_in_business,
        FieldKey::YearsInBusiness,
    );
    let colors = map_colors(&record.colors);
    if !colors.is_empty() {
        business.colors = colors;
        writer.mark(FieldKey::Colors);
    }
    if let Some(area) = &record.service_area {
        let derived = radius::derive_radius(Some(area));
        if derived.derivation != RadiusDerivation::Default {
            if derived.derivation == RadiusDerivation::Explicit {
                writer.mark(FieldKey::ServiceRadius);
            } else {
                derived_confidence.insert(FieldKey::ServiceRadius, derived.confidence);
            }
            business.service_radius = Some(derived);
        }
        if let Some(label) = clean(area.label.as_deref()) {
            business.service_area_label = Some(label);
        }
    }
    for hint in record
        .categories
        .iter()
        .chain(record.primary_category.iter())
    {
        let trimmed = hint.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !business
            .category_hints
            .iter()
            .any(|h| h.eq_ignore_ascii_case(trimmed))
        {
            business.category_hints.push(trimmed.to_string());
        }
    }
    writer.finish()
}

fn apply_operator_answers(
    answers: &OperatorAnswers,
    business: &mut BusinessRecord,
    winners: &mut BTreeMap<FieldKey, SourceKind>,
) -> BTreeSet<FieldKey> {
    let mut writer = FieldWriter::new(SourceKind::OperatorAnswers, winners);
    writer.set_text(&mut business.name, answers.name.as_deref(), FieldKey::Name);
    writer.set_text(
        &mut business.industry,
        answers.industry.as_deref(),
        FieldKey::Industry,
    );
    writer.set_text(&mut business.phone, answers.phone.as_deref(), FieldKey::Phone);
    writer.set_text(&mut business.website, answers.website.as_deref(), FieldKey::Website);
    writer.set_text(&mut business.address, answers.address.as_deref(), FieldKey::Address);
    writer.set_text(
        &mut business.description,
        answers.description.as_deref(),
        FieldKey::Description,
    );
    writer.set_text(&mut business.tagline, answers.tagline.as_deref(), FieldKey::Tagline);
    if let Some(services) = &answers.services {
        business.services = dedup_case_insensitive(services);
        writer.mark(FieldKey::Services);
    }
    if let Some(differentiators) = &answers.differentiators {
        business.differentiators = dedup_case_insensitive(differentiators);
        writer.mark(FieldKey::Differentiators);
    }
    if let Some(certifications) = &answers.certifications {
        business.certifications = dedup_case_insensitive(certifications);
        writer.mark(FieldKey::Certifications);
    }
    if let Some(miles) = answers.service_radius_miles {
        if miles > 0.0 {
            business.service_radius = Some(ServiceRadius {
                miles,
                confidence: SourceKind::OperatorAnswers.prior(),
                derivation: RadiusDerivation::Explicit,
            });
            writer.mark(FieldKey::ServiceRadius);
        }
    }
    writer.set(
        &mut business.years_in_business,
        answers.years_in_business,
        FieldKey::YearsInBusiness,
    );
    if let Some(always_open) = answers.open_24_hours {
        business.open_24_hours = always_open;
        writer.mark(FieldKey::Hours);
    }
    if let Some(labels) = &answers.photo_labels {
        let mut labeled = false;
        for photo in &mut business.photos {
            if let Some(category) = labels.get(&photo.reference) {
                photo.category = Some(*category);
                labeled = true;
            }
        }
        if labeled {
            writer.mark(FieldKey::Photos);
        }
    }
    if let Some(colors) = &answers.colors {
        let mapped = map_colors(colors);
        if !mapped.is_empty() {
            business.colors = mapped;
            writer.mark(FieldKey::Colors);
        }
    }
    writer.finish()
}

/// Post-merge derivation pass: description-mined tenure, radius fallback, and
/// the 24-hour flag.
fn finalize_derivations(
    business: &mut BusinessRecord,
    field_sources: &BTreeMap<FieldKey, SourceKind>,
    derived_confidence: &mut BTreeMap<FieldKey, f64>,
    options: &NormalizeOptions,
) {
    if business.years_in_business.is_none() {
        if let Some(description) = &business.description {
            if let Some(years) = years::extract_years(description, options.reference_year) {
                business.years_in_business = Some(years);
                derived_confidence.insert(FieldKey::YearsInBusiness, EXTRACTED_YEARS_CONFIDENCE);
            }
        }
    }
    if business.service_radius.is_none() {
        let fallback = radius::default_radius();
        derived_confidence.insert(FieldKey::ServiceRadius, fallback.confidence);
        business.service_radius = Some(fallback);
    }
    // Operator word on 24-hour operation beats the schedule-shape heuristic.
    if field_sources.get(&FieldKey::Hours) != Some(&SourceKind::OperatorAnswers) {
        business.open_24_hours = business
            .hours
            .as_ref()
            .map(|h| h.is_always_open())
            .unwrap_or(false);
    }
}
