//! Canonical, source-agnostic view of one business.
//!
//! Every field is optional or defaults to empty; absence is meaningful (it
//! drives question generation downstream) and never an error. The record is
//! built once per generation request by the normalizer and only mutated when
//! operator answers are overlaid as the final, highest-priority pass.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Single formatted address line (street, locality, region, postal code).
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub hours: Option<WeeklyHours>,
    #[serde(default)]
    pub open_24_hours: bool,
    pub service_radius: Option<ServiceRadius>,
    pub service_area_label: Option<String>,
    pub description: Option<String>,
    pub tagline: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub differentiators: Vec<String>,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
    #[serde(default)]
    pub reviews: Vec<ReviewExcerpt>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    pub years_in_business: Option<u32>,
    #[serde(default)]
    pub competitors: Vec<String>,
    #[serde(default)]
    pub social_links: Vec<String>,
    #[serde(default)]
    pub style_keywords: Vec<String>,
    /// Raw category/service-type taxonomy terms carried along for option
    /// pre-checking; not part of the scored content itself.
    #[serde(default)]
    pub category_hints: Vec<String>,
    #[serde(default)]
    pub colors: Vec<BrandColor>,
}

impl BusinessRecord {
    pub fn text_field(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Name => self.name.as_deref(),
            TextField::Tagline => self.tagline.as_deref(),
            TextField::Description => self.description.as_deref(),
        }
    }

    pub fn has_photo_in(&self, category: PhotoCategory) -> bool {
        self.photos.iter().any(|p| p.category == Some(category))
    }

    /// Photos usable as display imagery: hero shots plus the gallery.
    /// Uncategorized photos count toward the gallery.
    pub fn display_photo_count(&self) -> usize {
        self.photos
            .iter()
            .filter(|p| {
                matches!(
                    p.category,
                    Some(PhotoCategory::Hero) | Some(PhotoCategory::Gallery) | None
                )
            })
            .count()
    }

    pub fn gallery_photo_count(&self) -> usize {
        self.photos
            .iter()
            .filter(|p| matches!(p.category, Some(PhotoCategory::Gallery) | None))
            .count()
    }

    pub fn has_color_slot(&self, slot: ColorSlot) -> bool {
        self.colors.iter().any(|c| c.slot == Some(slot))
    }
}

/// Open/close periods per weekday; index 0 is Monday.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub days: [Vec<OpenPeriod>; 7],
}

impl WeeklyHours {
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.is_empty())
    }

    /// A business counts as 24-hour only when every weekday has at least one
    /// period whose open time is absent-or-midnight and whose close time is
    /// absent-or-end-of-day.
    pub fn is_always_open(&self) -> bool {
        self.days.iter().all(|periods| {
            periods.iter().any(|p| {
                p.open.unwrap_or(0) == 0 && p.close.map_or(true, |c| c == MINUTES_PER_DAY)
            })
        })
    }
}

pub const MINUTES_PER_DAY: u16 = 1440;

/// One open/close pair in minutes since midnight. An absent open means
/// "from midnight"; an absent close means "until end of day".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenPeriod {
    pub open: Option<u16>,
    pub close: Option<u16>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ServiceRadius {
    pub miles: f64,
    pub confidence: f64,
    pub derivation: RadiusDerivation,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RadiusDerivation {
    /// Taken from an explicit radius value in a source.
    Explicit,
    /// Computed from service-area polygon geometry.
    Polygon,
    /// Estimated from a named-places list.
    PlaceList,
    /// Fallback when no source said anything about service area.
    Default,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoRef {
    pub reference: String,
    pub category: Option<PhotoCategory>,
}

impl PhotoRef {
    pub fn new(reference: impl Into<String>, category: Option<PhotoCategory>) -> Self {
        Self {
            reference: reference.into(),
            category,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhotoCategory {
    Logo,
    Hero,
    Gallery,
    Team,
    Work,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewExcerpt {
    pub text: String,
    pub rating: Option<f64>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandColor {
    pub value: String,
    pub slot: Option<ColorSlot>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
}

impl ColorSlot {
    pub fn label(self) -> &'static str {
        match self {
            ColorSlot::Primary => "primary",
            ColorSlot::Secondary => "secondary",
            ColorSlot::Accent => "accent",
        }
    }
}

/// Text fields a template can place minimum-length requirements on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    Tagline,
    Description,
}

impl TextField {
    pub fn label(self) -> &'static str {
        match self {
            TextField::Name => "Business name",
            TextField::Tagline => "Tagline",
            TextField::Description => "Description",
        }
    }
}
