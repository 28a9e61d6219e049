//! Clarifying-question generation from remaining data gaps.
//!
//! A question fires only when a field's confidence sits below the configured
//! threshold, so operator-confirmed fields are never re-asked. Ordering:
//! lower-confidence categories surface earlier; within a category, fields
//! blocking more section variants come first, tie-broken by the declaration
//! order of the category's field list.

pub mod options;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

use crate::config::EngineConfig;
use crate::models::business::BusinessRecord;
use crate::models::insight::{QualityCategory, QualityInsight};
use crate::models::question::{Question, QuestionKind, QuestionOption};
use crate::models::sources::FieldKey;
use crate::models::template::TemplateDefinition;
use crate::quality::checks::category_for;
use crate::sections::blocked_variant_counts;

pub const SERVICES_QUESTION_ID: &str = "confirm_services";
pub const RADIUS_QUESTION_ID: &str = "service_radius";
pub const DESCRIPTION_QUESTION_ID: &str = "business_description";
pub const PHOTOS_QUESTION_ID: &str = "label_photos";
pub const HOURS_QUESTION_ID: &str = "confirm_hours";
pub const CERTIFICATIONS_QUESTION_ID: &str = "certifications";
pub const YEARS_QUESTION_ID: &str = "years_in_business";
pub const DIFFERENTIATORS_QUESTION_ID: &str = "differentiators";

/// Askable fields in their per-category declaration order. This order is the
/// final tie-break within a category and is implementation-defined.
const ASKABLE_FIELDS: &[FieldKey] = &[
    FieldKey::Hours,
    FieldKey::Services,
    FieldKey::Description,
    FieldKey::ServiceRadius,
    FieldKey::Photos,
    FieldKey::Certifications,
    FieldKey::YearsInBusiness,
    FieldKey::Differentiators,
];

pub struct QuestionContext<'a> {
    pub business: &'a BusinessRecord,
    pub insight: &'a QualityInsight,
    /// Chosen template, when one exists; used to weight gaps by how many
    /// section variants they keep locked.
    pub template: Option<&'a TemplateDefinition>,
    pub industry: Option<&'a str>,
}

pub fn generate(ctx: &QuestionContext<'_>, config: &EngineConfig) -> Vec<Question> {
    let threshold = config.questions.confidence_threshold;
    let blocked = ctx
        .template
        .map(|template| blocked_variant_counts(template, ctx.business))
        .unwrap_or_default();
    let category_ranks = category_ranks(ctx.insight);

    // Collect gaps with their ordering keys before building prompts so the
    // seeded phrasing draw happens in final question order.
    let mut gaps: Vec<Gap> = Vec::new();
    for (declaration_index, field) in ASKABLE_FIELDS.iter().enumerate() {
        let field = *field;
        if ctx.insight.confidence_for(field) >= threshold {
            continue;
        }
        if field == FieldKey::Photos && !has_unlabeled_photos(ctx.business) {
            continue;
        }
        let category = category_for(field);
        gaps.push(Gap {
            field,
            category_rank: category_ranks.get(&category).copied().unwrap_or(0),
            blocked_variants: blocked.get(&field).copied().unwrap_or(0),
            declaration_index,
        });
    }
    gaps.sort_by(|a, b| {
        a.category_rank
            .cmp(&b.category_rank)
            .then(b.blocked_variants.cmp(&a.blocked_variants))
            .then(a.declaration_index.cmp(&b.declaration_index))
    });

    let mut rng = StdRng::seed_from_u64(config.questions.phrasing_seed);
    let mut questions = Vec::with_capacity(gaps.len());
    for (position, gap) in gaps.iter().enumerate() {
        let priority = (gap.category_rank as u32) * 100 + position as u32;
        questions.push(build_question(gap.field, priority, ctx, &mut rng));
    }
    questions
}

struct Gap {
    field: FieldKey,
    category_rank: usize,
    blocked_variants: u32,
    declaration_index: usize,
}

/// Categories ordered by ascending confidence (score fraction); ties keep
/// the canonical category order.
fn category_ranks(insight: &QualityInsight) -> BTreeMap<QualityCategory, usize> {
    let mut ordered: Vec<(QualityCategory, f64)> = insight
        .categories
        .iter()
        .map(|c| (c.category, c.fraction()))
        .collect();
    ordered.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    ordered
        .into_iter()
        .enumerate()
        .map(|(rank, (category, _))| (category, rank))
        .collect()
}

fn has_unlabeled_photos(business: &BusinessRecord) -> bool {
    !business.photos.is_empty() && business.photos.iter().any(|p| p.category.is_none())
}

fn build_question(
    field: FieldKey,
    priority: u32,
    ctx: &QuestionContext<'_>,
    rng: &mut StdRng,
) -> Question {
    let (id, kind, options) = match field {
        FieldKey::Services => (
            SERVICES_QUESTION_ID,
            QuestionKind::MultiSelect,
            service_options(ctx.business, ctx.industry),
        ),
        FieldKey::ServiceRadius => (
            RADIUS_QUESTION_ID,
            QuestionKind::SingleSelect,
            radius_options(ctx.business),
        ),
        FieldKey::Description => (DESCRIPTION_QUESTION_ID, QuestionKind::FreeText, Vec::new()),
        FieldKey::Photos => (
            PHOTOS_QUESTION_ID,
            QuestionKind::PhotoLabeling,
            photo_label_options(),
        ),
        FieldKey::Hours => (HOURS_QUESTION_ID, QuestionKind::YesNo, Vec::new()),
        FieldKey::Certifications => (
            CERTIFICATIONS_QUESTION_ID,
            QuestionKind::MultiSelect,
            preselect_matching(options::CERTIFICATION_OPTIONS, &ctx.business.certifications),
        ),
        FieldKey::YearsInBusiness => (YEARS_QUESTION_ID, QuestionKind::FreeText, Vec::new()),
        _ => (
            DIFFERENTIATORS_QUESTION_ID,
            QuestionKind::MultiSelect,
            preselect_matching(options::DIFFERENTIATOR_OPTIONS, &ctx.business.differentiators),
        ),
    };
    let phrasings = options::phrasings_for(id);
    let prompt = phrasings[rng.gen_range(0..phrasings.len())].to_string();
    Question {
        id: id.to_string(),
        prompt,
        kind,
        options,
        priority,
    }
}

/// Industry-seeded service options; entries matching the profile's
/// category/service-type hints arrive pre-checked.
fn service_options(business: &BusinessRecord, industry: Option<&str>) -> Vec<QuestionOption> {
    let industry = industry.or(business.industry.as_deref());
    let mut hints: Vec<String> = business
        .category_hints
        .iter()
        .chain(business.services.iter())
        .map(|h| h.to_lowercase())
        .collect();
    hints.sort();
    options::service_options_for(industry)
        .iter()
        .map(|(value, label)| {
            let option = QuestionOption::new(*value, *label);
            if hint_matches(&hints, label) {
                option.preselected()
            } else {
                option
            }
        })
        .collect()
}

fn hint_matches(hints: &[String], label: &str) -> bool {
    let label = label.to_lowercase();
    hints
        .iter()
        .any(|hint| hint.contains(&label) || label.contains(hint.as_str()))
}

fn preselect_matching(table: &[options::OptionPair], existing: &[String]) -> Vec<QuestionOption> {
    let existing: Vec<String> = existing.iter().map(|e| e.to_lowercase()).collect();
    table
        .iter()
        .map(|(value, label)| {
            let option = QuestionOption::new(*value, *label);
            if hint_matches(&existing, label) {
                option.preselected()
            } else {
                option
            }
        })
        .collect()
}

/// Radius tiers with the current estimate (if any) pre-selected.
fn radius_options(business: &BusinessRecord) -> Vec<QuestionOption> {
    let current = business.service_radius.map(|r| r.miles);
    let nearest = current.map(|miles| {
        options::RADIUS_TIERS
            .iter()
            .copied()
            .min_by(|a, b| {
                let da = (f64::from(*a) - miles).abs();
                let db = (f64::from(*b) - miles).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(options::RADIUS_TIERS[0])
    });
    options::RADIUS_TIERS
        .iter()
        .map(|tier| {
            let option = QuestionOption::new(
                format!("radius_{tier}"),
                format!("Within about {tier} miles"),
            );
            if Some(*tier) == nearest {
                option.preselected()
            } else {
                option
            }
        })
        .collect()
}

fn photo_label_options() -> Vec<QuestionOption> {
    options::PHOTO_LABEL_CHOICES
        .iter()
        .map(|(_, value, label)| QuestionOption::new(*value, *label))
        .collect()
}
