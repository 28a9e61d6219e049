//! Section variant resolution for a chosen template.
//!
//! Each section's variant list is filtered down to the variants whose
//! requirements the business data satisfies; the pick among survivors sits
//! behind a swappable strategy so a scored selection can replace first-match
//! later without touching callers. A section with no satisfying variant is
//! omitted, never an error.

use std::collections::BTreeMap;

use crate::models::business::BusinessRecord;
use crate::models::sources::FieldKey;
use crate::models::template::{SectionRequirements, SectionVariant, TemplateDefinition};

/// Picks one variant index out of the satisfying candidates (listed in
/// declared order). Returning None omits the section.
pub type VariantStrategy = fn(&[usize], &[SectionVariant]) -> Option<usize>;

/// Default policy: first satisfying variant in declared order wins.
pub fn first_satisfying(candidates: &[usize], _variants: &[SectionVariant]) -> Option<usize> {
    candidates.first().copied()
}

/// Resolves every section of the template with the default strategy.
pub fn resolve_sections(
    template: &TemplateDefinition,
    business: &BusinessRecord,
) -> BTreeMap<String, String> {
    resolve_sections_with(template, business, first_satisfying)
}

pub fn resolve_sections_with(
    template: &TemplateDefinition,
    business: &BusinessRecord,
    strategy: VariantStrategy,
) -> BTreeMap<String, String> {
    let mut resolved = BTreeMap::new();
    for section in &template.sections {
        let candidates: Vec<usize> = section
            .variants
            .iter()
            .enumerate()
            .filter(|(_, variant)| variant_satisfied(&variant.requirements, business))
            .map(|(index, _)| index)
            .collect();
        if let Some(index) = strategy(&candidates, &section.variants) {
            if let Some(variant) = section.variants.get(index) {
                resolved.insert(section.name.clone(), variant.id.clone());
            }
        }
    }
    resolved
}

pub fn variant_satisfied(requirements: &SectionRequirements, business: &BusinessRecord) -> bool {
    unsatisfied_fields(requirements, business).is_empty()
}

/// Which fields keep this variant locked, if any. Shared with the question
/// generator so gap priorities can count blocked variants per field.
pub fn unsatisfied_fields(
    requirements: &SectionRequirements,
    business: &BusinessRecord,
) -> Vec<FieldKey> {
    let mut blocking = Vec::new();
    let content_length = business
        .description
        .as_deref()
        .map(|d| d.trim().len())
        .unwrap_or(0);
    if content_length < requirements.min_content_length as usize {
        blocking.push(FieldKey::Description);
    }
    if business.display_photo_count() < requirements.min_images as usize {
        blocking.push(FieldKey::Photos);
    }
    if business.services.len() < requirements.min_services as usize {
        blocking.push(FieldKey::Services);
    }
    if business.reviews.len() < requirements.min_testimonials as usize {
        blocking.push(FieldKey::Reviews);
    }
    blocking
}

/// Counts, per field, how many variants across the whole template that field
/// currently blocks.
pub fn blocked_variant_counts(
    template: &TemplateDefinition,
    business: &BusinessRecord,
) -> BTreeMap<FieldKey, u32> {
    let mut counts = BTreeMap::new();
    for section in &template.sections {
        for variant in &section.variants {
            for field in unsatisfied_fields(&variant.requirements, business) {
                *counts.entry(field).or_insert(0) += 1;
            }
        }
    }
    counts
}
