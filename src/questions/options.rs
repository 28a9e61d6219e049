//! Static option tables and prompt phrasings for generated questions.

use crate::models::business::PhotoCategory;

pub type OptionPair = (&'static str, &'static str);

/// Candidate services per industry, used to seed the services multi-select.
pub fn service_options_for(industry: Option<&str>) -> &'static [OptionPair] {
    let industry = industry.map(str::to_lowercase);
    match industry.as_deref() {
        Some("landscaping") | Some("lawn care") => LANDSCAPING_SERVICES,
        Some("plumbing") => PLUMBING_SERVICES,
        Some("electrical") | Some("electrician") => ELECTRICAL_SERVICES,
        Some("hvac") | Some("heating and cooling") => HVAC_SERVICES,
        Some("cleaning") | Some("house cleaning") => CLEANING_SERVICES,
        Some("roofing") => ROOFING_SERVICES,
        Some("painting") => PAINTING_SERVICES,
        _ => GENERIC_SERVICES,
    }
}

static LANDSCAPING_SERVICES: &[OptionPair] = &[
    ("lawn_mowing", "Lawn mowing"),
    ("yard_cleanup", "Yard cleanup"),
    ("mulching", "Mulching"),
    ("tree_trimming", "Tree trimming"),
    ("hardscaping", "Hardscaping"),
    ("irrigation", "Irrigation installation"),
    ("snow_removal", "Snow removal"),
];

static PLUMBING_SERVICES: &[OptionPair] = &[
    ("drain_cleaning", "Drain cleaning"),
    ("water_heaters", "Water heater service"),
    ("leak_repair", "Leak repair"),
    ("repiping", "Repiping"),
    ("sewer_lines", "Sewer line service"),
    ("fixture_installation", "Fixture installation"),
];

static ELECTRICAL_SERVICES: &[OptionPair] = &[
    ("panel_upgrades", "Panel upgrades"),
    ("wiring", "Wiring and rewiring"),
    ("lighting", "Lighting installation"),
    ("ev_chargers", "EV charger installation"),
    ("generators", "Generator installation"),
];

static HVAC_SERVICES: &[OptionPair] = &[
    ("ac_repair", "AC repair"),
    ("furnace_repair", "Furnace repair"),
    ("installation", "System installation"),
    ("maintenance", "Seasonal maintenance"),
    ("duct_cleaning", "Duct cleaning"),
];

static CLEANING_SERVICES: &[OptionPair] = &[
    ("recurring_cleaning", "Recurring cleaning"),
    ("deep_cleaning", "Deep cleaning"),
    ("move_out_cleaning", "Move-in/move-out cleaning"),
    ("office_cleaning", "Office cleaning"),
    ("carpet_cleaning", "Carpet cleaning"),
];

static ROOFING_SERVICES: &[OptionPair] = &[
    ("roof_replacement", "Roof replacement"),
    ("roof_repair", "Roof repair"),
    ("inspections", "Inspections"),
    ("gutters", "Gutter installation"),
    ("storm_damage", "Storm damage restoration"),
];

static PAINTING_SERVICES: &[OptionPair] = &[
    ("interior_painting", "Interior painting"),
    ("exterior_painting", "Exterior painting"),
    ("cabinet_refinishing", "Cabinet refinishing"),
    ("deck_staining", "Deck staining"),
    ("drywall_repair", "Drywall repair"),
];

static GENERIC_SERVICES: &[OptionPair] = &[
    ("consultations", "Consultations"),
    ("installations", "Installations"),
    ("repairs", "Repairs"),
    ("maintenance", "Maintenance plans"),
    ("emergency_service", "Emergency service"),
];

pub static DIFFERENTIATOR_OPTIONS: &[OptionPair] = &[
    ("family_owned", "Family owned and operated"),
    ("licensed_insured", "Licensed and insured"),
    ("emergency_availability", "24/7 emergency availability"),
    ("free_estimates", "Free estimates"),
    ("locally_owned", "Locally owned"),
    ("satisfaction_guarantee", "Satisfaction guarantee"),
];

pub static CERTIFICATION_OPTIONS: &[OptionPair] = &[
    ("state_licensed", "State licensed"),
    ("fully_insured", "Fully insured"),
    ("bonded", "Bonded"),
    ("epa_certified", "EPA certified"),
    ("bbb_accredited", "BBB accredited"),
];

/// Categories offered by the photo-labeling flow.
pub static PHOTO_LABEL_CHOICES: &[(PhotoCategory, &str, &str)] = &[
    (PhotoCategory::Logo, "logo", "Logo"),
    (PhotoCategory::Hero, "hero", "Hero image"),
    (PhotoCategory::Gallery, "gallery", "Gallery"),
    (PhotoCategory::Team, "team", "Team"),
    (PhotoCategory::Work, "work", "Completed work"),
];

/// Service-area tiers offered in the radius single-select, in miles.
pub static RADIUS_TIERS: &[u32] = &[10, 20, 30, 50, 75, 100];

/// Alternative prompt phrasings per question id; selection is driven by the
/// configured seed only, never ambient randomness.
pub fn phrasings_for(question_id: &str) -> &'static [&'static str] {
    match question_id {
        super::SERVICES_QUESTION_ID => &[
            "Which services do you offer?",
            "Which of these services should the site feature?",
        ],
        super::RADIUS_QUESTION_ID => &[
            "How far from your location do you serve customers?",
            "What service radius should the site advertise?",
        ],
        super::DESCRIPTION_QUESTION_ID => &[
            "Tell us about your business in a few sentences.",
            "How would you describe your business to a new customer?",
        ],
        super::PHOTOS_QUESTION_ID => &[
            "Help us label your photos so they land in the right spots.",
            "Tag each photo so it shows up in the right section.",
        ],
        super::HOURS_QUESTION_ID => &[
            "Is the business open 24 hours?",
            "Are you open around the clock?",
        ],
        super::CERTIFICATIONS_QUESTION_ID => &[
            "Which licenses or certifications do you hold?",
            "Do you hold any of these credentials?",
        ],
        super::YEARS_QUESTION_ID => &[
            "How many years has the business been operating?",
            "How long have you been in business?",
        ],
        super::DIFFERENTIATORS_QUESTION_ID => &[
            "What sets your business apart?",
            "Which of these best describe your edge over competitors?",
        ],
        _ => &["Tell us more."],
    }
}
