use anyhow::Result;
use siteforge::catalog::TemplateCatalog;
use siteforge::config::EngineConfig;
use siteforge::orchestration::decide;
use std::fs;

use crate::support;

#[test]
fn loads_catalog_and_config_files_from_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let catalog_path = dir.path().join("catalog.yaml");
    fs::write(
        &catalog_path,
        r#"
templates:
  - id: lenient
    name: Lenient
    sections:
      - name: hero
        variants:
          - id: hero-plain
"#,
    )?;
    let catalog = TemplateCatalog::from_path(&catalog_path)?;
    assert_eq!(catalog.len(), 1);

    let config_path = dir.path().join("engine.toml");
    fs::write(
        &config_path,
        r#"
[scoring]
score_threshold = 40

[quality]
suggestion_threshold = 0.5

[quality.allotments]
basic_info = 30.0
content = 25.0
visuals = 15.0
trust = 15.0
differentiation = 15.0
"#,
    )?;
    let config = EngineConfig::from_path(&config_path)?;
    assert_eq!(config.scoring.score_threshold, 40);
    assert!((config.quality.allotments.basic_info - 30.0).abs() < 1e-9);

    let decision = decide(&support::sparse_input(), &catalog, &config)?;
    assert_eq!(decision.template_id, "lenient");
    assert_eq!(
        decision.sections.get("hero").map(String::as_str),
        Some("hero-plain")
    );
    Ok(())
}

#[test]
fn invalid_weight_tables_are_rejected_at_load() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("engine.toml");
    fs::write(
        &config_path,
        r#"
[quality.allotments]
basic_info = 50.0
content = 50.0
visuals = 50.0
trust = 50.0
differentiation = 50.0
"#,
    )?;
    let err = EngineConfig::from_path(&config_path).unwrap_err();
    assert!(err.to_string().contains("sum to 100"), "got: {err}");
    Ok(())
}

#[test]
fn unknown_catalog_extension_is_an_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("catalog.txt");
    fs::write(&path, "templates: []")?;
    assert!(TemplateCatalog::from_path(&path).is_err());
    Ok(())
}

#[test]
fn duplicate_template_ids_are_rejected() {
    let json = r#"{
        "templates": [
            { "id": "twin", "name": "Twin A" },
            { "id": "twin", "name": "Twin B" }
        ]
    }"#;
    let err = TemplateCatalog::from_json_str(json).unwrap_err();
    assert!(err.to_string().contains("Duplicate template id"));
}
