//! Engine configuration.
//!
//! Thresholds and category weight allotments are configuration rather than
//! hard-coded constants. A config can be embedded in a host application's
//! TOML settings or loaded standalone; defaults are always valid.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::QualityCategory;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub quality: QualitySettings,
    #[serde(default)]
    pub questions: QuestionSettings,
}

impl EngineConfig {
    /// Parses and validates a TOML config document.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(data).context("Failed to parse engine config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config {}", path.display()))?;
        Self::from_toml_str(&data)
    }

    /// Category allotments must sum to 100 and thresholds must stay in range.
    pub fn validate(&self) -> Result<()> {
        let total = self.quality.allotments.total();
        if (total - 100.0).abs() > 1e-6 {
            bail!("Quality category allotments must sum to 100, got {total}");
        }
        if !(0.0..=1.0).contains(&self.quality.suggestion_threshold) {
            bail!(
                "Suggestion threshold must be within [0, 1], got {}",
                self.quality.suggestion_threshold
            );
        }
        if !(0.0..=1.0).contains(&self.questions.confidence_threshold) {
            bail!(
                "Question confidence threshold must be within [0, 1], got {}",
                self.questions.confidence_threshold
            );
        }
        if self.scoring.score_threshold > 100 {
            bail!(
                "Score threshold must be within 0..=100, got {}",
                self.scoring.score_threshold
            );
        }
        Ok(())
    }
}

/// Template selection knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Minimum template score considered viable.
    #[serde(default = "default_score_threshold")]
    pub score_threshold: u32,
    /// Near-miss scores attached to a no-compatible-template error.
    #[serde(default = "default_near_miss_count")]
    pub near_miss_count: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            score_threshold: default_score_threshold(),
            near_miss_count: default_near_miss_count(),
        }
    }
}

const fn default_score_threshold() -> u32 {
    50
}

const fn default_near_miss_count() -> usize {
    3
}

/// Quality evaluator weights and suggestion gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualitySettings {
    #[serde(default)]
    pub allotments: CategoryAllotments,
    /// A category scoring below this fraction of its allotment yields one
    /// improvement suggestion.
    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: f64,
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            allotments: CategoryAllotments::default(),
            suggestion_threshold: default_suggestion_threshold(),
        }
    }
}

fn default_suggestion_threshold() -> f64 {
    0.75
}

/// Maximum points each quality category can contribute to the overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAllotments {
    #[serde(default = "default_allotment")]
    pub basic_info: f64,
    #[serde(default = "default_allotment")]
    pub content: f64,
    #[serde(default = "default_allotment")]
    pub visuals: f64,
    #[serde(default = "default_allotment")]
    pub trust: f64,
    #[serde(default = "default_allotment")]
    pub differentiation: f64,
}

impl Default for CategoryAllotments {
    fn default() -> Self {
        Self {
            basic_info: default_allotment(),
            content: default_allotment(),
            visuals: default_allotment(),
            trust: default_allotment(),
            differentiation: default_allotment(),
        }
    }
}

fn default_allotment() -> f64 {
    20.0
}

impl CategoryAllotments {
    pub fn for_category(&self, category: QualityCategory) -> f64 {
        match category {
            QualityCategory::BasicInfo => self.basic_info,
            QualityCategory::Content => self.content,
            QualityCategory::Visuals => self.visuals,
            QualityCategory::Trust => self.trust,
            QualityCategory::Differentiation => self.differentiation,
        }
    }

    pub fn total(&self) -> f64 {
        self.basic_info + self.content + self.visuals + self.trust + self.differentiation
    }
}

/// Question generation knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSettings {
    /// Fields at or above this confidence are never asked about.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    /// Explicit seed for prompt phrasing variation; identical seeds yield
    /// identical output.
    #[serde(default)]
    pub phrasing_seed: u64,
}

impl Default for QuestionSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            phrasing_seed: 0,
        }
    }
}

fn default_confidence_threshold() -> f64 {
    0.7
}
