//! Template catalog container and loaders.
//!
//! Catalog order is significant: score ties are broken by position, first
//! listed wins. Loaders accept the JSON and YAML shapes produced by the
//! template authoring pipeline.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::models::template::{
    ContentRequirements, IndustryRules, KeywordRules, SectionDefinition, SectionRequirements,
    SectionVariant, TemplateDefinition, TextRequirement,
};
use crate::models::TextField;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateCatalog {
    #[serde(default)]
    pub templates: Vec<TemplateDefinition>,
}

impl TemplateCatalog {
    /// Wraps a template list, rejecting duplicate ids.
    pub fn new(templates: Vec<TemplateDefinition>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                bail!("Duplicate template id in catalog: {}", template.id);
            }
        }
        Ok(Self { templates })
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn get(&self, id: &str) -> Option<&TemplateDefinition> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let catalog: TemplateCatalog =
            serde_json::from_str(data).context("Failed to parse template catalog JSON")?;
        Self::new(catalog.templates)
    }

    pub fn from_yaml_str(data: &str) -> Result<Self> {
        let catalog: TemplateCatalog =
            serde_yaml::from_str(data).context("Failed to parse template catalog YAML")?;
        Self::new(catalog.templates)
    }

    /// Loads a catalog file, dispatching on extension (json/yaml/yml).
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template catalog {}", path.display()))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&data),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&data),
            other => bail!("Unsupported catalog extension: {:?}", other),
        }
    }
}

/// Built-in starter catalog: three general-purpose service templates.
pub fn starter_catalog() -> TemplateCatalog {
    TemplateCatalog {
        templates: vec![
            classic_services_template(),
            bold_local_template(),
            portfolio_showcase_template(),
        ],
    }
}

fn classic_services_template() -> TemplateDefinition {
    TemplateDefinition {
        id: "classic-services".into(),
        name: "Classic Services".into(),
        industries: IndustryRules::default(),
        keywords: KeywordRules {
            positive: vec![
                "service".into(),
                "repair".into(),
                "local".into(),
                "licensed".into(),
                "family".into(),
            ],
            negative: Vec::new(),
        },
        requirements: ContentRequirements {
            min_services: 1,
            required_text: vec![TextRequirement {
                field: TextField::Name,
                min_length: 1,
            }],
            ..ContentRequirements::default()
        },
        sections: vec![
            SectionDefinition {
                name: "hero".into(),
                variants: vec![
                    SectionVariant {
                        id: "hero-image".into(),
                        requirements: SectionRequirements {
                            min_images: 1,
                            ..SectionRequirements::default()
                        },
                    },
                    SectionVariant {
                        id: "hero-plain".into(),
                        requirements: SectionRequirements::default(),
                    },
                ],
            },
            SectionDefinition {
                name: "services".into(),
                variants: vec![
                    SectionVariant {
                        id: "services-grid".into(),
                        requirements: SectionRequirements {
                            min_services: 3,
                            ..SectionRequirements::default()
                        },
                    },
                    SectionVariant {
                        id: "services-list".into(),
                        requirements: SectionRequirements {
                            min_services: 1,
                            ..SectionRequirements::default()
                        },
                    },
                ],
            },
            SectionDefinition {
                name: "about".into(),
                variants: vec![SectionVariant {
                    id: "about-story".into(),
                    requirements: SectionRequirements {
                        min_content_length: 120,
                        ..SectionRequirements::default()
                    },
                }],
            },
            SectionDefinition {
                name: "testimonials".into(),
                variants: vec![
                    SectionVariant {
                        id: "testimonials-carousel".into(),
                        requirements: SectionRequirements {
                            min_testimonials: 3,
                            ..SectionRequirements::default()
                        },
                    },
                    SectionVariant {
                        id: "testimonials-single".into(),
                        requirements: SectionRequirements {
                            min_testimonials: 1,
                            ..SectionRequirements::default()
                        },
                    },
                ],
            },
        ],
    }
}

fn bold_local_template() -> TemplateDefinition {
    TemplateDefinition {
        id: "bold-local".into(),
        name: "Bold Local".into(),
        industries: IndustryRules::default(),
        keywords: KeywordRules {
            positive: vec![
                "emergency".into(),
                "fast".into(),
                "24/7".into(),
                "same day".into(),
                "trusted".into(),
            ],
            negative: vec!["boutique".into(), "fine dining".into()],
        },
        requirements: ContentRequirements {
            min_services: 2,
            requires_logo: true,
            required_text: vec![TextRequirement {
                field: TextField::Description,
                min_length: 80,
            }],
            ..ContentRequirements::default()
        },
        sections: vec![
            SectionDefinition {
                name: "hero".into(),
                variants: vec![SectionVariant {
                    id: "hero-cta".into(),
                    requirements: SectionRequirements::default(),
                }],
            },
            SectionDefinition {
                name: "services".into(),
                variants: vec![SectionVariant {
                    id: "services-cards".into(),
                    requirements: SectionRequirements {
                        min_services: 2,
                        ..SectionRequirements::default()
                    },
                }],
            },
            SectionDefinition {
                name: "service-area".into(),
                variants: vec![SectionVariant {
                    id: "service-area-map".into(),
                    requirements: SectionRequirements::default(),
                }],
            },
        ],
    }
}

fn portfolio_showcase_template() -> TemplateDefinition {
    TemplateDefinition {
        id: "portfolio-showcase".into(),
        name: "Portfolio Showcase".into(),
        industries: IndustryRules {
            included: vec![
                "landscaping".into(),
                "remodeling".into(),
                "painting".into(),
                "roofing".into(),
                "construction".into(),
            ],
            excluded: Vec::new(),
        },
        keywords: KeywordRules {
            positive: vec![
                "design".into(),
                "custom".into(),
                "project".into(),
                "transformation".into(),
            ],
            negative: Vec::new(),
        },
        requirements: ContentRequirements {
            min_gallery_photos: 4,
            requires_hero: true,
            min_services: 1,
            required_text: vec![TextRequirement {
                field: TextField::Description,
                min_length: 150,
            }],
            ..ContentRequirements::default()
        },
        sections: vec![
            SectionDefinition {
                name: "hero".into(),
                variants: vec![SectionVariant {
                    id: "hero-fullbleed".into(),
                    requirements: SectionRequirements {
                        min_images: 1,
                        ..SectionRequirements::default()
                    },
                }],
            },
            SectionDefinition {
                name: "gallery".into(),
                variants: vec![
                    SectionVariant {
                        id: "gallery-masonry".into(),
                        requirements: SectionRequirements {
                            min_images: 6,
                            ..SectionRequirements::default()
                        },
                    },
                    SectionVariant {
                        id: "gallery-grid".into(),
                        requirements: SectionRequirements {
                            min_images: 4,
                            ..SectionRequirements::default()
                        },
                    },
                ],
            },
            SectionDefinition {
                name: "testimonials".into(),
                variants: vec![SectionVariant {
                    id: "testimonials-quotes".into(),
                    requirements: SectionRequirements {
                        min_testimonials: 2,
                        ..SectionRequirements::default()
                    },
                }],
            },
        ],
    }
}
