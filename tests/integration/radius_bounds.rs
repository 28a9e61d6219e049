use siteforge::models::{
    EngineInput, GeoPoint, NamedPlace, PlaceKind, ProfileRecord, RadiusDerivation, ServiceArea,
};
use siteforge::normalize::normalize;

use crate::support;

fn input_with_area(area: ServiceArea) -> EngineInput {
    EngineInput {
        profile: Some(ProfileRecord {
            name: Some("Green Acres Landscaping".into()),
            primary_category: Some("landscaping".into()),
            service_area: Some(area),
            ..ProfileRecord::default()
        }),
        ..EngineInput::default()
    }
}

#[test]
fn polygon_radius_is_a_multiple_of_five_with_floor() {
    let polygons = vec![
        // Tiny footprint: floors at 5.
        vec![
            GeoPoint { lat: 40.001, lng: -75.0 },
            GeoPoint { lat: 39.999, lng: -75.0 },
            GeoPoint { lat: 40.0, lng: -75.001 },
        ],
        // Square roughly 14 miles across.
        vec![
            GeoPoint { lat: 40.1, lng: -75.0 },
            GeoPoint { lat: 39.9, lng: -75.0 },
            GeoPoint { lat: 40.0, lng: -75.1 },
            GeoPoint { lat: 40.0, lng: -74.9 },
        ],
        // Stretched service area.
        vec![
            GeoPoint { lat: 40.5, lng: -75.0 },
            GeoPoint { lat: 39.5, lng: -75.0 },
            GeoPoint { lat: 40.0, lng: -75.6 },
            GeoPoint { lat: 40.0, lng: -74.4 },
        ],
    ];
    for polygon in polygons {
        let area = ServiceArea {
            radius: None,
            polygon,
            places: Vec::new(),
            label: None,
        };
        let normalized = normalize(&input_with_area(area), &support::pinned_options());
        let radius = normalized.business.service_radius.expect("radius");
        assert_eq!(radius.derivation, RadiusDerivation::Polygon);
        assert!(radius.miles >= 5.0, "radius {} below floor", radius.miles);
        assert_eq!(
            radius.miles % 5.0,
            0.0,
            "radius {} not a multiple of 5",
            radius.miles
        );
        assert!((radius.confidence - 0.95).abs() < 1e-9);
    }
}

#[test]
fn place_list_radius_only_takes_documented_tiers() {
    const TIERS: &[f64] = &[10.0, 20.0, 30.0, 50.0, 75.0, 100.0];
    let cases: Vec<Vec<NamedPlace>> = vec![
        vec![NamedPlace::new("Springfield", Some(PlaceKind::Locality))],
        vec![NamedPlace::new("Sangamon County", Some(PlaceKind::County))],
        vec![NamedPlace::new("Illinois", Some(PlaceKind::State))],
        (0..2).map(|i| NamedPlace::new(format!("Town {i}"), None)).collect(),
        (0..6).map(|i| NamedPlace::new(format!("Town {i}"), None)).collect(),
        (0..14).map(|i| NamedPlace::new(format!("Town {i}"), None)).collect(),
        (0..25).map(|i| NamedPlace::new(format!("Town {i}"), None)).collect(),
    ];
    for places in cases {
        let count = places.len();
        let area = ServiceArea {
            radius: None,
            polygon: Vec::new(),
            places,
            label: None,
        };
        let normalized = normalize(&input_with_area(area), &support::pinned_options());
        let radius = normalized.business.service_radius.expect("radius");
        assert_eq!(radius.derivation, RadiusDerivation::PlaceList);
        assert!(
            TIERS.contains(&radius.miles),
            "{count} places produced off-tier radius {}",
            radius.miles
        );
        assert!(
            (0.4..=0.7).contains(&radius.confidence),
            "confidence {} out of band",
            radius.confidence
        );
    }
}

#[test]
fn explicit_radius_outranks_polygon_and_places() {
    let area = ServiceArea {
        radius: Some(siteforge::models::RawRadius {
            value: 12.0,
            unit: None,
        }),
        polygon: vec![
            GeoPoint { lat: 40.5, lng: -75.0 },
            GeoPoint { lat: 39.5, lng: -75.0 },
            GeoPoint { lat: 40.0, lng: -75.5 },
        ],
        places: vec![NamedPlace::new("Illinois", Some(PlaceKind::State))],
        label: None,
    };
    let normalized = normalize(&input_with_area(area), &support::pinned_options());
    let radius = normalized.business.service_radius.expect("radius");
    assert_eq!(radius.derivation, RadiusDerivation::Explicit);
    assert_eq!(radius.miles, 12.0);
    assert!((radius.confidence - 0.9).abs() < 1e-9);
}
