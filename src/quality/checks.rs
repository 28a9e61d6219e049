//! Present-field checks behind category scoring.
//!
//! Every check is a positive presence/threshold predicate, which is what
//! keeps the evaluator monotonic: filling a field can satisfy checks but
//! never unsatisfy one. Weights within a category are fractions of its
//! allotment and sum to 1.0.

use crate::models::business::{BusinessRecord, PhotoCategory, RadiusDerivation};
use crate::models::insight::QualityCategory;
use crate::models::sources::FieldKey;

pub struct FieldCheck {
    pub field: FieldKey,
    pub weight: f64,
    pub test: fn(&BusinessRecord) -> bool,
}

pub fn checks_for(category: QualityCategory) -> &'static [FieldCheck] {
    match category {
        QualityCategory::BasicInfo => BASIC_INFO_CHECKS,
        QualityCategory::Content => CONTENT_CHECKS,
        QualityCategory::Visuals => VISUALS_CHECKS,
        QualityCategory::Trust => TRUST_CHECKS,
        QualityCategory::Differentiation => DIFFERENTIATION_CHECKS,
    }
}

/// Which scoring category a field belongs to; also drives question grouping.
pub fn category_for(field: FieldKey) -> QualityCategory {
    match field {
        FieldKey::Name
        | FieldKey::Industry
        | FieldKey::Phone
        | FieldKey::Website
        | FieldKey::Address
        | FieldKey::Coordinates
        | FieldKey::Hours => QualityCategory::BasicInfo,
        FieldKey::Description
        | FieldKey::Tagline
        | FieldKey::Services
        | FieldKey::ServiceRadius => QualityCategory::Content,
        FieldKey::Photos | FieldKey::Colors => QualityCategory::Visuals,
        FieldKey::Reviews
        | FieldKey::Rating
        | FieldKey::ReviewCount
        | FieldKey::Certifications
        | FieldKey::YearsInBusiness => QualityCategory::Trust,
        FieldKey::Differentiators
        | FieldKey::Awards
        | FieldKey::Competitors
        | FieldKey::SocialLinks => QualityCategory::Differentiation,
    }
}

/// Single mapping from field key to "do we know this yet". The default
/// service-radius placeholder does not count as knowing the service area.
pub fn field_present(field: FieldKey, business: &BusinessRecord) -> bool {
    match field {
        FieldKey::Name => business.name.is_some(),
        FieldKey::Industry => business.industry.is_some(),
        FieldKey::Phone => business.phone.is_some(),
        FieldKey::Website => business.website.is_some(),
        FieldKey::Address => business.address.is_some(),
        FieldKey::Coordinates => business.latitude.is_some() && business.longitude.is_some(),
        FieldKey::Hours => business.hours.is_some() || business.open_24_hours,
        FieldKey::ServiceRadius => has_known_radius(business),
        FieldKey::Description => business.description.is_some(),
        FieldKey::Tagline => business.tagline.is_some(),
        FieldKey::Services => !business.services.is_empty(),
        FieldKey::Differentiators => !business.differentiators.is_empty(),
        FieldKey::Photos => !business.photos.is_empty(),
        FieldKey::Reviews => !business.reviews.is_empty(),
        FieldKey::Rating => business.rating.is_some(),
        FieldKey::ReviewCount => business.review_count.is_some(),
        FieldKey::Certifications => !business.certifications.is_empty(),
        FieldKey::Awards => !business.awards.is_empty(),
        FieldKey::YearsInBusiness => business.years_in_business.is_some(),
        FieldKey::Competitors => !business.competitors.is_empty(),
        FieldKey::SocialLinks => !business.social_links.is_empty(),
        FieldKey::Colors => !business.colors.is_empty(),
    }
}

fn has_known_radius(business: &BusinessRecord) -> bool {
    business
        .service_radius
        .map(|r| r.derivation != RadiusDerivation::Default)
        .unwrap_or(false)
}

fn has_name(b: &BusinessRecord) -> bool {
    b.name.is_some()
}

fn has_phone(b: &BusinessRecord) -> bool {
    b.phone.is_some()
}

fn has_address(b: &BusinessRecord) -> bool {
    b.address.is_some()
}

fn has_website(b: &BusinessRecord) -> bool {
    b.website.is_some()
}

fn has_hours(b: &BusinessRecord) -> bool {
    b.hours.is_some() || b.open_24_hours
}

fn has_description(b: &BusinessRecord) -> bool {
    b.description.is_some()
}

fn has_rich_description(b: &BusinessRecord) -> bool {
    b.description.as_deref().map(|d| d.len() >= 200).unwrap_or(false)
}

fn has_services(b: &BusinessRecord) -> bool {
    !b.services.is_empty()
}

fn has_three_services(b: &BusinessRecord) -> bool {
    b.services.len() >= 3
}

fn has_tagline(b: &BusinessRecord) -> bool {
    b.tagline.is_some()
}

fn has_photos(b: &BusinessRecord) -> bool {
    !b.photos.is_empty()
}

fn has_display_photos(b: &BusinessRecord) -> bool {
    b.display_photo_count() >= 4
}

fn has_logo(b: &BusinessRecord) -> bool {
    b.has_photo_in(PhotoCategory::Logo)
}

fn has_hero(b: &BusinessRecord) -> bool {
    b.has_photo_in(PhotoCategory::Hero)
}

fn has_rating(b: &BusinessRecord) -> bool {
    b.rating.is_some()
}

fn has_review_volume(b: &BusinessRecord) -> bool {
    b.review_count.unwrap_or(0) >= 5
}

fn has_review_excerpts(b: &BusinessRecord) -> bool {
    !b.reviews.is_empty()
}

fn has_certifications(b: &BusinessRecord) -> bool {
    !b.certifications.is_empty()
}

fn has_tenure(b: &BusinessRecord) -> bool {
    b.years_in_business.is_some()
}

fn has_awards(b: &BusinessRecord) -> bool {
    !b.awards.is_empty()
}

fn has_differentiators(b: &BusinessRecord) -> bool {
    !b.differentiators.is_empty()
}

fn has_three_differentiators(b: &BusinessRecord) -> bool {
    b.differentiators.len() >= 3
}

fn has_competitors(b: &BusinessRecord) -> bool {
    !b.competitors.is_empty()
}

fn has_social_links(b: &BusinessRecord) -> bool {
    !b.social_links.is_empty()
}

static BASIC_INFO_CHECKS: &[FieldCheck] = &[
    FieldCheck {
        field: FieldKey::Name,
        weight: 0.25,
        test: has_name,
    },
    FieldCheck {
        field: FieldKey::Phone,
        weight: 0.20,
        test: has_phone,
    },
    FieldCheck {
        field: FieldKey::Address,
        weight: 0.20,
        test: has_address,
    },
    FieldCheck {
        field: FieldKey::Website,
        weight: 0.20,
        test: has_website,
    },
    FieldCheck {
        field: FieldKey::Hours,
        weight: 0.15,
        test: has_hours,
    },
];

static CONTENT_CHECKS: &[FieldCheck] = &[
    FieldCheck {
        field: FieldKey::Description,
        weight: 0.30,
        test: has_description,
    },
    FieldCheck {
        field: FieldKey::Description,
        weight: 0.10,
        test: has_rich_description,
    },
    FieldCheck {
        field: FieldKey::Services,
        weight: 0.20,
        test: has_services,
    },
    FieldCheck {
        field: FieldKey::Services,
        weight: 0.15,
        test: has_three_services,
    },
    FieldCheck {
        field: FieldKey::Tagline,
        weight: 0.10,
        test: has_tagline,
    },
    FieldCheck {
        field: FieldKey::ServiceRadius,
        weight: 0.15,
        test: has_known_radius,
    },
];

static VISUALS_CHECKS: &[FieldCheck] = &[
    FieldCheck {
        field: FieldKey::Photos,
        weight: 0.30,
        test: has_photos,
    },
    FieldCheck {
        field: FieldKey::Photos,
        weight: 0.25,
        test: has_display_photos,
    },
    FieldCheck {
        field: FieldKey::Photos,
        weight: 0.25,
        test: has_logo,
    },
    FieldCheck {
        field: FieldKey::Photos,
        weight: 0.20,
        test: has_hero,
    },
];

static TRUST_CHECKS: &[FieldCheck] = &[
    FieldCheck {
        field: FieldKey::Rating,
        weight: 0.20,
        test: has_rating,
    },
    FieldCheck {
        field: FieldKey::ReviewCount,
        weight: 0.15,
        test: has_review_volume,
    },
    FieldCheck {
        field: FieldKey::Reviews,
        weight: 0.20,
        test: has_review_excerpts,
    },
    FieldCheck {
        field: FieldKey::Certifications,
        weight: 0.15,
        test: has_certifications,
    },
    FieldCheck {
        field: FieldKey::YearsInBusiness,
        weight: 0.20,
        test: has_tenure,
    },
    FieldCheck {
        field: FieldKey::Awards,
        weight: 0.10,
        test: has_awards,
    },
];

static DIFFERENTIATION_CHECKS: &[FieldCheck] = &[
    FieldCheck {
        field: FieldKey::Differentiators,
        weight: 0.30,
        test: has_differentiators,
    },
    FieldCheck {
        field: FieldKey::Differentiators,
        weight: 0.15,
        test: has_three_differentiators,
    },
    FieldCheck {
        field: FieldKey::Awards,
        weight: 0.20,
        test: has_awards,
    },
    FieldCheck {
        field: FieldKey::Competitors,
        weight: 0.20,
        test: has_competitors,
    },
    FieldCheck {
        field: FieldKey::SocialLinks,
        weight: 0.15,
        test: has_social_links,
    },
];
