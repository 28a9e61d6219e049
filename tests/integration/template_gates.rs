use anyhow::Result;
use siteforge::catalog::TemplateCatalog;
use siteforge::config::EngineConfig;
use siteforge::error::EngineError;
use siteforge::models::{
    ContentRequirements, EngineInput, IndustryRules, KeywordRules, ProfileRecord,
    TemplateDefinition,
};
use siteforge::orchestration::decide;
use siteforge::scoring::{score_catalog, select_best};

use crate::support;

fn bare_template(id: &str) -> TemplateDefinition {
    TemplateDefinition {
        id: id.into(),
        name: id.into(),
        industries: IndustryRules::default(),
        keywords: KeywordRules::default(),
        requirements: ContentRequirements::default(),
        sections: Vec::new(),
    }
}

fn landscaping_input() -> EngineInput {
    EngineInput {
        profile: Some(ProfileRecord {
            name: Some("Green Acres Landscaping".into()),
            primary_category: Some("landscaping".into()),
            ..ProfileRecord::default()
        }),
        ..EngineInput::default()
    }
}

#[test]
fn sole_excluding_template_yields_no_compatible_template() {
    let mut template = bare_template("no-landscapers");
    template.industries.excluded = vec!["landscaping".into()];
    let catalog = TemplateCatalog::new(vec![template]).unwrap();
    let config = EngineConfig::default();

    let err = decide(&landscaping_input(), &catalog, &config).unwrap_err();
    match err {
        EngineError::NoCompatibleTemplate {
            industry,
            near_misses,
            ..
        } => {
            assert_eq!(industry.as_deref(), Some("landscaping"));
            assert_eq!(near_misses.len(), 1);
            assert_eq!(near_misses[0].score, 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn excluded_industry_scores_zero_when_alternatives_exist() -> Result<()> {
    let mut excluder = bare_template("no-landscapers");
    excluder.industries.excluded = vec!["landscaping".into()];
    let fallback = bare_template("open-to-all");
    let catalog = TemplateCatalog::new(vec![excluder, fallback])?;
    let config = EngineConfig::default();

    let decision = decide(&landscaping_input(), &catalog, &config)?;
    assert_eq!(decision.template_id, "open-to-all");
    Ok(())
}

#[test]
fn negative_keyword_zeroes_even_a_perfect_candidate() -> Result<()> {
    let mut poisoned = bare_template("poisoned");
    poisoned.industries.included = vec!["plumbing".into()];
    poisoned.keywords.positive = vec!["plumbing".into(), "licensed".into()];
    poisoned.keywords.negative = vec!["drain".into()];
    let fallback = bare_template("fallback");
    let catalog = TemplateCatalog::new(vec![poisoned, fallback])?;
    let config = EngineConfig::default();

    let input = support::rich_input();
    let decision = decide(&input, &catalog, &config)?;
    assert_eq!(decision.template_id, "fallback");
    Ok(())
}

#[test]
fn tied_scores_pick_the_first_catalog_entry() -> Result<()> {
    // Identical templates in both orders; the winner must follow the order.
    let catalog_ab = TemplateCatalog::new(vec![bare_template("alpha"), bare_template("beta")])?;
    let catalog_ba = TemplateCatalog::new(vec![bare_template("beta"), bare_template("alpha")])?;
    let config = EngineConfig::default();
    let input = support::sparse_input();

    let first = decide(&input, &catalog_ab, &config)?;
    assert_eq!(first.template_id, "alpha");
    let second = decide(&input, &catalog_ba, &config)?;
    assert_eq!(second.template_id, "beta");
    Ok(())
}

#[test]
fn requirement_shortfall_degrades_instead_of_disqualifying() -> Result<()> {
    let mut demanding = bare_template("demanding");
    demanding.requirements.min_services = 3;
    demanding.keywords.positive = vec!["plumbing".into()];
    let catalog = TemplateCatalog::new(vec![demanding])?;
    let config = EngineConfig::default();

    // Two confirmed services: requirements fail, scoring continues.
    let mut input = support::sparse_input();
    if let Some(profile) = input.profile.as_mut() {
        profile.services = vec!["Drain cleaning".into(), "Repiping".into()];
    }
    let normalized = siteforge::normalize::normalize(&input, &support::pinned_options());
    let scores = score_catalog(&catalog, &normalized.business);
    assert_eq!(scores.len(), 1);
    // 30 industry + 40 keywords - 50 requirements = 20.
    assert_eq!(scores[0].score, 20);
    assert!(!scores[0].breakdown.requirements_met);
    assert!(scores[0]
        .breakdown
        .missing_requirements
        .contains(&"At least 3 services required".to_string()));

    let err = select_best(&catalog, &scores, &normalized.business, &config).unwrap_err();
    assert!(matches!(err, EngineError::NoCompatibleTemplate { .. }));
    Ok(())
}

#[test]
fn empty_catalog_is_rejected_up_front() {
    let catalog = TemplateCatalog::default();
    let config = EngineConfig::default();
    let err = decide(&support::sparse_input(), &catalog, &config).unwrap_err();
    assert!(matches!(err, EngineError::EmptyCatalog));
}
