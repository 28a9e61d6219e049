//! Template catalog entries and scoring results.

use serde::{Deserialize, Serialize};

use super::business::{ColorSlot, TextField};

/// One catalog entry: compatibility rules, minimum-content requirements, and
/// the section catalog with per-variant requirement predicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industries: IndustryRules,
    #[serde(default)]
    pub keywords: KeywordRules,
    #[serde(default)]
    pub requirements: ContentRequirements,
    #[serde(default)]
    pub sections: Vec<SectionDefinition>,
}

/// Industry gate. An exclusion hit or a non-empty inclusion list without the
/// business industry disqualifies the template outright.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryRules {
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordRules {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/// Minimum-content requirements; failure degrades the score rather than
/// disqualifying the template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentRequirements {
    #[serde(default)]
    pub min_colors: u32,
    #[serde(default)]
    pub required_color_slots: Vec<ColorSlot>,
    #[serde(default)]
    pub required_text: Vec<TextRequirement>,
    #[serde(default)]
    pub min_services: u32,
    #[serde(default)]
    pub requires_logo: bool,
    #[serde(default)]
    pub requires_hero: bool,
    #[serde(default)]
    pub min_gallery_photos: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequirement {
    pub field: TextField,
    #[serde(default)]
    pub min_length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDefinition {
    pub name: String,
    pub variants: Vec<SectionVariant>,
}

/// One concrete rendering option for a named section, gated by its own data
/// requirements. Declared order matters: the first satisfying variant wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionVariant {
    pub id: String,
    #[serde(default)]
    pub requirements: SectionRequirements,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionRequirements {
    /// Minimum description length, in characters.
    #[serde(default)]
    pub min_content_length: u32,
    /// Minimum photo count across hero + gallery imagery.
    #[serde(default)]
    pub min_images: u32,
    #[serde(default)]
    pub min_services: u32,
    #[serde(default)]
    pub min_testimonials: u32,
}

/// Outcome of scoring one template against one business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateScore {
    pub template_id: String,
    /// 0..=100. Exactly 0 whenever the industry gate fails or a negative
    /// keyword matches.
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub industry_match: bool,
    pub keyword_score: u32,
    pub requirements_met: bool,
    #[serde(default)]
    pub missing_requirements: Vec<String>,
    /// Set when a negative keyword hard-disqualified the template.
    pub negative_keyword: Option<String>,
}
