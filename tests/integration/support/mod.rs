//! Shared fixtures for the decision-engine integration scenarios.

use siteforge::catalog::TemplateCatalog;
use siteforge::models::{
    EngineInput, PhotoCategory, PlaceSearchRecord, ProfileRecord, RawHoursPeriod, RawPhoto,
    RawReview, SectionDefinition, SectionRequirements, SectionVariant, TemplateDefinition,
};
use siteforge::normalize::NormalizeOptions;

pub const REFERENCE_YEAR: i32 = 2026;

pub fn pinned_options() -> NormalizeOptions {
    NormalizeOptions {
        reference_year: REFERENCE_YEAR,
    }
}

/// A plumbing business with enough data to satisfy the starter catalog.
pub fn rich_input() -> EngineInput {
    EngineInput {
        profile: Some(rich_profile()),
        place_search: Some(place_record()),
        ..EngineInput::default()
    }
}

pub fn rich_profile() -> ProfileRecord {
    ProfileRecord {
        name: Some("Oak Ridge Plumbing".into()),
        primary_category: Some("plumbing".into()),
        categories: vec!["Drain cleaning".into(), "Water heaters".into()],
        phone: Some("555-0100".into()),
        website: Some("https://oakridgeplumbing.example".into()),
        street_lines: vec!["12 Oak St".into()],
        locality: Some("Springfield".into()),
        administrative_area: Some("IL".into()),
        postal_code: Some("62704".into()),
        hours: weekday_hours(),
        description: Some(
            "Family owned local plumbing service covering repair, drain cleaning, and \
             water heater installation across Springfield, serving the area for over \
             25 years with licensed, friendly plumbers."
                .into(),
        ),
        tagline: Some("Licensed local plumbing service".into()),
        services: vec![
            "Drain cleaning".into(),
            "Water heater service".into(),
            "Repiping".into(),
        ],
        photos: vec![
            photo("logo.png", Some(PhotoCategory::Logo)),
            photo("hero.jpg", Some(PhotoCategory::Hero)),
            photo("g1.jpg", Some(PhotoCategory::Gallery)),
            photo("g2.jpg", Some(PhotoCategory::Gallery)),
            photo("g3.jpg", Some(PhotoCategory::Gallery)),
            photo("g4.jpg", Some(PhotoCategory::Gallery)),
        ],
        reviews: vec![
            review("Fast and tidy, fixed our drain the same day.", 5.0),
            review("Fair price for a new water heater.", 4.5),
            review("Showed up on time, explained everything.", 5.0),
        ],
        certifications: vec!["State licensed".into(), "Fully insured".into()],
        ..ProfileRecord::default()
    }
}

pub fn place_record() -> PlaceSearchRecord {
    PlaceSearchRecord {
        name: Some("Oakridge Plumbing LLC".into()),
        rating: Some(4.7),
        review_count: Some(83),
        latitude: Some(39.8),
        longitude: Some(-89.65),
        ..PlaceSearchRecord::default()
    }
}

/// Minimal data: a name, a phone number, and an industry hint's worth of
/// profile category. Most fields stay open, so questions fire.
pub fn sparse_input() -> EngineInput {
    EngineInput {
        profile: Some(ProfileRecord {
            name: Some("Oak Ridge Plumbing".into()),
            primary_category: Some("plumbing".into()),
            categories: vec!["Drain cleaning".into()],
            phone: Some("555-0100".into()),
            ..ProfileRecord::default()
        }),
        ..EngineInput::default()
    }
}

/// One undemanding template so sparse scenarios still select something.
pub fn lenient_catalog() -> TemplateCatalog {
    TemplateCatalog {
        templates: vec![TemplateDefinition {
            id: "starter".into(),
            name: "Starter".into(),
            industries: Default::default(),
            keywords: Default::default(),
            requirements: Default::default(),
            sections: vec![
                SectionDefinition {
                    name: "hero".into(),
                    variants: vec![SectionVariant {
                        id: "hero-plain".into(),
                        requirements: SectionRequirements::default(),
                    }],
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
            ],
        }],
    }
}

fn weekday_hours() -> Vec<RawHoursPeriod> {
    (0..5)
        .map(|day| RawHoursPeriod {
            day: Some(day),
            open: Some("08:00".into()),
            close: Some("17:00".into()),
        })
        .collect()
}

fn photo(reference: &str, category: Option<PhotoCategory>) -> RawPhoto {
    RawPhoto {
        reference: reference.into(),
        category,
    }
}

fn review(text: &str, rating: f64) -> RawReview {
    RawReview {
        text: Some(text.into()),
        rating: Some(rating),
        author: None,
    }
}
