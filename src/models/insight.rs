//! Derived data-quality aggregate for one business.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::sources::FieldKey;

/// Scoring categories in their canonical, documented order. Suggestion
/// strings and category breakdowns always follow this order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum QualityCategory {
    BasicInfo,
    Content,
    Visuals,
    Trust,
    Differentiation,
}

impl QualityCategory {
    pub const ALL: &'static [QualityCategory] = &[
        QualityCategory::BasicInfo,
        QualityCategory::Content,
        QualityCategory::Visuals,
        QualityCategory::Trust,
        QualityCategory::Differentiation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QualityCategory::BasicInfo => "basic info",
            QualityCategory::Content => "content richness",
            QualityCategory::Visuals => "visuals",
            QualityCategory::Trust => "trust signals",
            QualityCategory::Differentiation => "differentiation",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: QualityCategory,
    pub score: f64,
    pub allotment: f64,
}

impl CategoryScore {
    pub fn fraction(&self) -> f64 {
        if self.allotment <= 0.0 {
            0.0
        } else {
            self.score / self.allotment
        }
    }
}

/// One known thing about the business. Facts live in either the confirmed
/// list (supplied by the profile or the operator) or the inferred list
/// (derived by the engine or taken from a lower-trust source, flagged for
/// confirmation downstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    pub field: FieldKey,
    pub summary: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityInsight {
    /// Weighted sum of category scores; always within 0..=100.
    pub overall: f64,
    /// One entry per category, in canonical order.
    pub categories: Vec<CategoryScore>,
    pub confirmed: Vec<Fact>,
    pub inferred: Vec<Fact>,
    pub missing: Vec<FieldKey>,
    /// Per-field confidence, 0.0 for absent fields.
    pub field_confidence: BTreeMap<FieldKey, f64>,
    /// One improvement suggestion per under-threshold category, in the
    /// documented category order.
    pub suggestions: Vec<String>,
}

impl QualityInsight {
    pub fn confidence_for(&self, field: FieldKey) -> f64 {
        self.field_confidence.get(&field).copied().unwrap_or(0.0)
    }

    pub fn category_score(&self, category: QualityCategory) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn is_operator_confirmed(&self, field: FieldKey) -> bool {
        self.confidence_for(field) >= 1.0
    }
}
