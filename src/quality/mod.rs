//! Data quality evaluation over the normalized record.

pub mod checks;

use std::collections::BTreeMap;

use crate::config::EngineConfig;
use crate::models::business::BusinessRecord;
use crate::models::insight::{CategoryScore, Fact, QualityCategory, QualityInsight};
use crate::models::sources::{FieldKey, SourceKind};
use crate::normalize::NormalizedSources;

use checks::{checks_for, field_present};

/// Confidence multiplier for photo sets that still contain untagged photos.
const UNLABELED_PHOTO_FACTOR: f64 = 0.6;

/// Scores the record per category, classifies facts, and emits improvement
/// suggestions. Overall score is the capped category sum and is monotonic in
/// field presence.
pub fn evaluate(normalized: &NormalizedSources, config: &EngineConfig) -> QualityInsight {
    let business = &normalized.business;
    let allotments = &config.quality.allotments;

    let mut categories = Vec::with_capacity(QualityCategory::ALL.len());
    for category in QualityCategory::ALL {
        let allotment = allotments.for_category(*category);
        let earned: f64 = checks_for(*category)
            .iter()
            .filter(|check| (check.test)(business))
            .map(|check| check.weight)
            .sum();
        categories.push(CategoryScore {
            category: *category,
            score: (allotment * earned).min(allotment),
            allotment,
        });
    }
    let overall = categories
        .iter()
        .map(|c| c.score)
        .sum::<f64>()
        .clamp(0.0, 100.0);

    let mut field_confidence = BTreeMap::new();
    let mut confirmed = Vec::new();
    let mut inferred = Vec::new();
    let mut missing = Vec::new();
    for field in FieldKey::ALL {
        if !field_present(*field, business) {
            field_confidence.insert(*field, 0.0);
            missing.push(*field);
            continue;
        }
        let derived = normalized.derived_confidence.get(field).copied();
        let winner = normalized.field_sources.get(field).copied();
        let mut confidence = derived
            .or_else(|| winner.map(SourceKind::prior))
            .unwrap_or(0.5);
        // Photos without category tags still need the labeling pass, so the
        // supplied confidence only partially applies.
        if *field == FieldKey::Photos
            && winner != Some(SourceKind::OperatorAnswers)
            && business.photos.iter().any(|p| p.category.is_none())
        {
            confidence *= UNLABELED_PHOTO_FACTOR;
        }
        field_confidence.insert(*field, confidence);
        let fact = Fact {
            field: *field,
            summary: fact_summary(*field, business),
            confidence,
        };
        let is_confirmed = derived.is_none()
            && matches!(
                winner,
                Some(SourceKind::Profile) | Some(SourceKind::OperatorAnswers)
            );
        if is_confirmed {
            confirmed.push(fact);
        } else {
            inferred.push(fact);
        }
    }

    let suggestions = suggestions_for(&categories, config.quality.suggestion_threshold);

    QualityInsight {
        overall,
        categories,
        confirmed,
        inferred,
        missing,
        field_confidence,
        suggestions,
    }
}

/// One suggestion per under-threshold category, in the documented order.
fn suggestions_for(categories: &[CategoryScore], threshold: f64) -> Vec<String> {
    categories
        .iter()
        .filter(|c| c.score < c.allotment * threshold)
        .map(|c| suggestion_for(c.category).to_string())
        .collect()
}

fn suggestion_for(category: QualityCategory) -> &'static str {
    match category {
        QualityCategory::BasicInfo => {
            "Add core contact details (phone, address, website, hours) so visitors can reach you."
        }
        QualityCategory::Content => {
            "Describe the business and list the services you offer."
        }
        QualityCategory::Visuals => {
            "Upload a logo, a hero image, and a few gallery photos."
        }
        QualityCategory::Trust => {
            "Surface reviews, certifications, or years in business to build credibility."
        }
        QualityCategory::Differentiation => {
            "Call out what sets the business apart from nearby competitors."
        }
    }
}

fn fact_summary(field: FieldKey, business: &BusinessRecord) -> String {
    match field {
        FieldKey::Services => format!("{} services listed", business.services.len()),
        FieldKey::Photos => format!("{} photos on file", business.photos.len()),
        FieldKey::Reviews => format!("{} review excerpts", business.reviews.len()),
        FieldKey::Rating => match business.rating {
            Some(rating) => format!("Average rating {rating:.1}"),
            None => field.label().to_string(),
        },
        FieldKey::YearsInBusiness => match business.years_in_business {
            Some(years) => format!("{years} years in business"),
            None => field.label().to_string(),
        },
        FieldKey::ServiceRadius => match business.service_radius {
            Some(radius) => format!("Serves roughly a {:.0}-mile radius", radius.miles),
            None => field.label().to_string(),
        },
        _ => field.label().to_string(),
    }
}
