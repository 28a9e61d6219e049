use anyhow::Result;
use siteforge::catalog::starter_catalog;
use siteforge::config::EngineConfig;
use siteforge::models::FieldKey;
use siteforge::orchestration::DecisionPipeline;

use crate::support;

#[test]
fn rich_input_selects_template_and_resolves_sections() -> Result<()> {
    let catalog = starter_catalog();
    let config = EngineConfig::default();
    let pipeline = DecisionPipeline::new(&catalog, &config)
        .with_normalize_options(support::pinned_options());
    let decision = pipeline.decide(&support::rich_input())?;

    assert_eq!(decision.template_id, "classic-services");
    assert_eq!(
        decision.sections.get("hero").map(String::as_str),
        Some("hero-image")
    );
    assert_eq!(
        decision.sections.get("services").map(String::as_str),
        Some("services-grid")
    );
    assert_eq!(
        decision.sections.get("about").map(String::as_str),
        Some("about-story")
    );
    assert_eq!(
        decision.sections.get("testimonials").map(String::as_str),
        Some("testimonials-carousel")
    );

    // Tenure was mined from the description, so it surfaces as an inferred
    // fact rather than a confirmed one.
    let years = decision
        .insight
        .inferred
        .iter()
        .find(|f| f.field == FieldKey::YearsInBusiness)
        .expect("inferred years fact");
    assert!(years.summary.contains("25"));
    assert!(decision.insight.overall > 50.0);
    Ok(())
}

#[test]
fn identical_inputs_produce_byte_identical_decisions() -> Result<()> {
    let catalog = starter_catalog();
    let config = EngineConfig::default();
    let pipeline = DecisionPipeline::new(&catalog, &config)
        .with_normalize_options(support::pinned_options());

    let first = pipeline.decide(&support::rich_input())?;
    let second = pipeline.decide(&support::rich_input())?;

    assert_eq!(first.fingerprint()?, second.fingerprint()?);
    assert_eq!(
        serde_json::to_string(&first)?,
        serde_json::to_string(&second)?
    );
    Ok(())
}

#[test]
fn questions_cover_remaining_gaps_only() -> Result<()> {
    let catalog = starter_catalog();
    let config = EngineConfig::default();
    let pipeline = DecisionPipeline::new(&catalog, &config)
        .with_normalize_options(support::pinned_options());
    let decision = pipeline.decide(&support::rich_input())?;

    let ids: Vec<&str> = decision.questions.iter().map(|q| q.id.as_str()).collect();
    // Services, description, photos, and certifications all arrived from the
    // profile at high confidence.
    assert!(!ids.contains(&"confirm_services"));
    assert!(!ids.contains(&"business_description"));
    assert!(!ids.contains(&"label_photos"));
    // Radius fell back to the default and mined tenure is low-confidence.
    assert!(ids.contains(&"service_radius"));
    assert!(ids.contains(&"years_in_business"));
    assert!(ids.contains(&"differentiators"));
    Ok(())
}
