use anyhow::Result;
use siteforge::config::EngineConfig;
use siteforge::models::{FieldKey, OperatorAnswers};
use siteforge::normalize::{merge_operator_answers, normalize};
use siteforge::orchestration::DecisionPipeline;

use crate::support;

fn answers() -> OperatorAnswers {
    OperatorAnswers {
        services: Some(vec![
            "Drain cleaning".into(),
            "Water heater service".into(),
            "Repiping".into(),
        ]),
        description: Some(
            "Oak Ridge Plumbing handles drains, water heaters, and whole-home repipes \
             with upfront pricing and same-day appointments."
                .into(),
        ),
        differentiators: Some(vec!["Family owned".into(), "Upfront pricing".into()]),
        service_radius_miles: Some(25.0),
        years_in_business: Some(25),
        ..OperatorAnswers::default()
    }
}

#[test]
fn answered_questions_stop_being_asked() -> Result<()> {
    let catalog = support::lenient_catalog();
    let config = EngineConfig::default();
    let pipeline = DecisionPipeline::new(&catalog, &config)
        .with_normalize_options(support::pinned_options());

    let before = pipeline.decide(&support::sparse_input())?;
    let before_ids: Vec<&str> = before.questions.iter().map(|q| q.id.as_str()).collect();
    assert!(before_ids.contains(&"confirm_services"));
    assert!(before_ids.contains(&"service_radius"));

    let mut input = support::sparse_input();
    input.operator_answers = Some(answers());
    let after = pipeline.decide(&input)?;
    let after_ids: Vec<&str> = after.questions.iter().map(|q| q.id.as_str()).collect();
    assert!(!after_ids.contains(&"confirm_services"));
    assert!(!after_ids.contains(&"service_radius"));
    assert!(!after_ids.contains(&"business_description"));
    assert!(!after_ids.contains(&"differentiators"));
    assert!(after.questions.len() < before.questions.len());
    assert!(after.insight.overall > before.insight.overall);
    Ok(())
}

#[test]
fn rerunning_with_collected_answers_is_idempotent() -> Result<()> {
    let catalog = support::lenient_catalog();
    let config = EngineConfig::default();
    let pipeline = DecisionPipeline::new(&catalog, &config)
        .with_normalize_options(support::pinned_options());

    let mut input = support::sparse_input();
    input.operator_answers = Some(answers());
    let first = pipeline.decide(&input)?;
    let second = pipeline.decide(&input)?;
    assert_eq!(first.fingerprint()?, second.fingerprint()?);
    Ok(())
}

#[test]
fn double_merge_equals_single_merge() {
    let mut input = support::sparse_input();
    input.operator_answers = Some(answers());
    let once = normalize(&input, &support::pinned_options()).business;

    let mut twice = once.clone();
    merge_operator_answers(&mut twice, &answers());
    assert_eq!(
        serde_json::to_string(&once).unwrap(),
        serde_json::to_string(&twice).unwrap()
    );
}

#[test]
fn operator_answers_win_the_field_resolution_order() {
    let mut input = support::rich_input();
    input.operator_answers = Some(OperatorAnswers {
        name: Some("Oak Ridge Plumbing & Heating".into()),
        ..OperatorAnswers::default()
    });
    let normalized = normalize(&input, &support::pinned_options());
    assert_eq!(
        normalized.business.name.as_deref(),
        Some("Oak Ridge Plumbing & Heating")
    );
    assert_eq!(
        normalized.field_sources.get(&FieldKey::Name),
        Some(&siteforge::models::SourceKind::OperatorAnswers)
    );
    // Unanswered fields keep their profile values.
    assert_eq!(normalized.business.phone.as_deref(), Some("555-0100"));
}
