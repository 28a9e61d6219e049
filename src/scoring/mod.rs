//! Template compatibility scoring and best-template selection.
//!
//! Scoring is pure and independent per template, so the catalog sweep runs
//! on the rayon pool; selection afterwards is by (score, catalog order) so
//! parallelism can never perturb which template wins.

use rayon::prelude::*;

use crate::catalog::TemplateCatalog;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::business::BusinessRecord;
use crate::models::template::{
    ContentRequirements, ScoreBreakdown, TemplateDefinition, TemplateScore,
};

const INDUSTRY_POINTS: i64 = 30;
const KEYWORD_BASE_POINTS: i64 = 20;
const KEYWORD_BONUS_POINTS: f64 = 20.0;
const REQUIREMENTS_POINTS: i64 = 30;
const REQUIREMENTS_PENALTY: i64 = 50;

/// Scores one template against one business.
///
/// Industry exclusion and negative keywords are hard disqualifiers that pin
/// the score to 0; a failed requirements check only degrades.
pub fn score_template(template: &TemplateDefinition, business: &BusinessRecord) -> TemplateScore {
    let mut breakdown = ScoreBreakdown::default();
    let industry = business.industry.as_deref().map(str::to_lowercase);

    if let Some(industry) = &industry {
        if contains_ignore_case(&template.industries.excluded, industry) {
            return disqualified(template, breakdown);
        }
    }
    if !template.industries.included.is_empty() {
        let included = industry
            .as_deref()
            .map(|industry| contains_ignore_case(&template.industries.included, industry))
            .unwrap_or(false);
        if !included {
            return disqualified(template, breakdown);
        }
    }
    breakdown.industry_match = true;
    let mut score = INDUSTRY_POINTS;

    let blob = keyword_blob(business);
    for negative in &template.keywords.negative {
        let needle = negative.trim().to_lowercase();
        if !needle.is_empty() && blob.contains(&needle) {
            breakdown.negative_keyword = Some(negative.clone());
            return disqualified(template, breakdown);
        }
    }
    let keyword_score = KEYWORD_BASE_POINTS + keyword_bonus(&template.keywords.positive, &blob);
    breakdown.keyword_score = keyword_score as u32;
    score += keyword_score;

    let missing = check_requirements(&template.requirements, business);
    breakdown.requirements_met = missing.is_empty();
    if missing.is_empty() {
        score += REQUIREMENTS_POINTS;
    } else {
        score -= REQUIREMENTS_PENALTY;
        breakdown.missing_requirements = missing;
    }

    TemplateScore {
        template_id: template.id.clone(),
        score: score.clamp(0, 100) as u32,
        breakdown,
    }
}

/// Scores every catalog entry, preserving catalog order in the output.
pub fn score_catalog(catalog: &TemplateCatalog, business: &BusinessRecord) -> Vec<TemplateScore> {
    catalog
        .templates
        .par_iter()
        .map(|template| score_template(template, business))
        .collect()
}

/// Picks the highest-scoring template at or above the configured threshold.
/// Ties break deterministically toward the first catalog entry.
pub fn select_best<'a>(
    catalog: &'a TemplateCatalog,
    scores: &[TemplateScore],
    business: &BusinessRecord,
    config: &EngineConfig,
) -> Result<&'a TemplateDefinition, EngineError> {
    if catalog.is_empty() {
        return Err(EngineError::EmptyCatalog);
    }
    let threshold = config.scoring.score_threshold;
    let best = scores
        .iter()
        .enumerate()
        .max_by(|(index_a, a), (index_b, b)| {
            a.score.cmp(&b.score).then(index_b.cmp(index_a))
        });
    let Some((best_index, best_score)) = best else {
        return Err(EngineError::NoCompatibleTemplate {
            industry: business.industry.clone(),
            threshold,
            near_misses: Vec::new(),
        });
    };
    if best_score.score < threshold {
        return Err(EngineError::NoCompatibleTemplate {
            industry: business.industry.clone(),
            threshold,
            near_misses: near_misses(scores, config.scoring.near_miss_count),
        });
    }
    Ok(&catalog.templates[best_index])
}

fn near_misses(scores: &[TemplateScore], count: usize) -> Vec<TemplateScore> {
    let mut ranked: Vec<&TemplateScore> = scores.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.into_iter().take(count).cloned().collect()
}

fn disqualified(template: &TemplateDefinition, breakdown: ScoreBreakdown) -> TemplateScore {
    TemplateScore {
        template_id: template.id.clone(),
        score: 0,
        breakdown,
    }
}

/// Lowercase haystack of everything the business says about itself.
fn keyword_blob(business: &BusinessRecord) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(name) = &business.name {
        parts.push(name);
    }
    if let Some(tagline) = &business.tagline {
        parts.push(tagline);
    }
    if let Some(description) = &business.description {
        parts.push(description);
    }
    for keyword in &business.style_keywords {
        parts.push(keyword);
    }
    if let Some(industry) = &business.industry {
        parts.push(industry);
    }
    parts.join(" ").to_lowercase()
}

/// Up to 20 extra points scaled by the fraction of positive keywords found.
/// A template that declares no positive keywords earns no bonus.
fn keyword_bonus(positive: &[String], blob: &str) -> i64 {
    if positive.is_empty() {
        return 0;
    }
    let matched = positive
        .iter()
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty() && blob.contains(kw.as_str()))
        .count();
    let ratio = matched as f64 / positive.len() as f64;
    (ratio * KEYWORD_BONUS_POINTS).round() as i64
}

fn contains_ignore_case(list: &[String], needle: &str) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(needle))
}

fn check_requirements(
    requirements: &ContentRequirements,
    business: &BusinessRecord,
) -> Vec<String> {
    let mut missing = Vec::new();
    if business.colors.len() < requirements.min_colors as usize {
        missing.push(format!(
            "At least {} brand colors required",
            requirements.min_colors
        ));
    }
    for slot in &requirements.required_color_slots {
        if !business.has_color_slot(*slot) {
            missing.push(format!("Missing {} brand color", slot.label()));
        }
    }
    for text in &requirements.required_text {
        let length = business
            .text_field(text.field)
            .map(|value| value.trim().len())
            .unwrap_or(0);
        if length < text.min_length as usize {
            missing.push(format!(
                "{} must be at least {} characters",
                text.field.label(),
                text.min_length
            ));
        }
    }
    if business.services.len() < requirements.min_services as usize {
        missing.push(format!(
            "At least {} services required",
            requirements.min_services
        ));
    }
    if requirements.requires_logo && !business.has_photo_in(crate::models::PhotoCategory::Logo) {
        missing.push("Logo image required".to_string());
    }
    if requirements.requires_hero && !business.has_photo_in(crate::models::PhotoCategory::Hero) {
        missing.push("Hero image required".to_string());
    }
    if business.gallery_photo_count() < requirements.min_gallery_photos as usize {
        missing.push(format!(
            "At least {} gallery photos required",
            requirements.min_gallery_photos
        ));
    }
    missing
}
