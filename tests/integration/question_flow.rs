use anyhow::Result;
use siteforge::config::EngineConfig;
use siteforge::models::QuestionKind;
use siteforge::orchestration::DecisionPipeline;

use crate::support;

#[test]
fn sparse_input_surfaces_typed_questions() -> Result<()> {
    let catalog = support::lenient_catalog();
    let config = EngineConfig::default();
    let pipeline = DecisionPipeline::new(&catalog, &config)
        .with_normalize_options(support::pinned_options());
    let decision = pipeline.decide(&support::sparse_input())?;

    assert_eq!(decision.template_id, "starter");
    let services = decision
        .questions
        .iter()
        .find(|q| q.id == "confirm_services")
        .expect("services question");
    assert_eq!(services.kind, QuestionKind::MultiSelect);
    assert!(
        services.options.iter().any(|o| o.preselected),
        "profile category hints should pre-check at least one option"
    );

    let radius = decision
        .questions
        .iter()
        .find(|q| q.id == "service_radius")
        .expect("radius question");
    assert_eq!(radius.kind, QuestionKind::SingleSelect);
    assert!(!radius.options.is_empty());

    let description = decision
        .questions
        .iter()
        .find(|q| q.id == "business_description")
        .expect("description question");
    assert_eq!(description.kind, QuestionKind::FreeText);
    assert!(description.options.is_empty());

    let hours = decision
        .questions
        .iter()
        .find(|q| q.id == "confirm_hours")
        .expect("hours question");
    assert_eq!(hours.kind, QuestionKind::YesNo);
    Ok(())
}

#[test]
fn question_order_is_stable_and_priority_sorted() -> Result<()> {
    let catalog = support::lenient_catalog();
    let config = EngineConfig::default();
    let pipeline = DecisionPipeline::new(&catalog, &config)
        .with_normalize_options(support::pinned_options());

    let first = pipeline.decide(&support::sparse_input())?;
    let second = pipeline.decide(&support::sparse_input())?;
    let order_a: Vec<&str> = first.questions.iter().map(|q| q.id.as_str()).collect();
    let order_b: Vec<&str> = second.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(order_a, order_b);

    let priorities: Vec<u32> = first.questions.iter().map(|q| q.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted);
    Ok(())
}

#[test]
fn suggestions_follow_the_documented_category_order() -> Result<()> {
    let catalog = support::lenient_catalog();
    let config = EngineConfig::default();
    let pipeline = DecisionPipeline::new(&catalog, &config)
        .with_normalize_options(support::pinned_options());
    let decision = pipeline.decide(&support::sparse_input())?;

    // Sparse data: content, visuals, trust, and differentiation all lag.
    let suggestions = &decision.insight.suggestions;
    assert_eq!(suggestions.len(), 5);
    assert!(suggestions[0].contains("contact details"));
    assert!(suggestions[1].contains("services"));
    assert!(suggestions[2].contains("logo"));
    assert!(suggestions[3].contains("credibility"));
    assert!(suggestions[4].contains("apart"));
    Ok(())
}

#[test]
fn alternate_seed_changes_phrasing_not_substance() -> Result<()> {
    let catalog = support::lenient_catalog();
    let mut seeded = EngineConfig::default();
    seeded.questions.phrasing_seed = 7;
    let default_config = EngineConfig::default();

    let baseline = DecisionPipeline::new(&catalog, &default_config)
        .with_normalize_options(support::pinned_options())
        .decide(&support::sparse_input())?;
    let alternate = DecisionPipeline::new(&catalog, &seeded)
        .with_normalize_options(support::pinned_options())
        .decide(&support::sparse_input())?;

    let ids_a: Vec<&str> = baseline.questions.iter().map(|q| q.id.as_str()).collect();
    let ids_b: Vec<&str> = alternate.questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids_a, ids_b, "seed must not change which questions fire");
    for question in &alternate.questions {
        assert!(!question.prompt.is_empty());
    }
    Ok(())
}
