//! Pipeline sequencing: normalize, evaluate, score, select, resolve
//! sections, generate questions, emit the decision artifact.

use tracing::debug;

use crate::catalog::TemplateCatalog;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::decision::Decision;
use crate::models::sources::EngineInput;
use crate::normalize::{normalize, NormalizeOptions};
use crate::quality::evaluate;
use crate::questions::{generate, QuestionContext};
use crate::scoring::{score_catalog, select_best};
use crate::sections::{first_satisfying, resolve_sections_with, VariantStrategy};

/// One configured pass of the decision engine. Stateless across runs:
/// re-running with identical inputs produces a byte-identical decision.
pub struct DecisionPipeline<'a> {
    catalog: &'a TemplateCatalog,
    config: &'a EngineConfig,
    normalize_options: NormalizeOptions,
    variant_strategy: VariantStrategy,
}

impl<'a> DecisionPipeline<'a> {
    pub fn new(catalog: &'a TemplateCatalog, config: &'a EngineConfig) -> Self {
        Self {
            catalog,
            config,
            normalize_options: NormalizeOptions::default(),
            variant_strategy: first_satisfying,
        }
    }

    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }

    pub fn with_variant_strategy(mut self, strategy: VariantStrategy) -> Self {
        self.variant_strategy = strategy;
        self
    }

    pub fn decide(&self, input: &EngineInput) -> Result<Decision, EngineError> {
        let mut normalized = normalize(input, &self.normalize_options);
        if normalized.business.industry.is_none() {
            normalized.business.industry = input
                .industry_hint
                .as_deref()
                .map(str::trim)
                .filter(|hint| !hint.is_empty())
                .map(str::to_string);
        }
        debug!(
            sources = normalized.contributions.len(),
            industry = normalized.business.industry.as_deref().unwrap_or("unknown"),
            "normalized input sources"
        );

        let insight = evaluate(&normalized, self.config);
        debug!(
            overall = insight.overall,
            missing = insight.missing.len(),
            "evaluated data quality"
        );

        let scores = score_catalog(self.catalog, &normalized.business);
        let template = select_best(self.catalog, &scores, &normalized.business, self.config)?;
        debug!(template = template.id.as_str(), "selected template");

        let sections =
            resolve_sections_with(template, &normalized.business, self.variant_strategy);
        debug!(sections = sections.len(), "resolved section variants");

        let ctx = QuestionContext {
            business: &normalized.business,
            insight: &insight,
            template: Some(template),
            industry: normalized.business.industry.as_deref(),
        };
        let questions = generate(&ctx, self.config);
        debug!(questions = questions.len(), "generated clarifying questions");

        Ok(Decision {
            template_id: template.id.clone(),
            sections,
            questions,
            insight,
        })
    }
}

/// Convenience wrapper for hosts that do not need pipeline customization.
pub fn decide(
    input: &EngineInput,
    catalog: &TemplateCatalog,
    config: &EngineConfig,
) -> Result<Decision, EngineError> {
    DecisionPipeline::new(catalog, config).decide(input)
}
