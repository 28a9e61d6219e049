//! Service-radius derivation.
//!
//! Priority cascade: explicit radius value, polygon geometry, place-count
//! heuristic, fixed low-confidence default.

use std::collections::HashMap;

use crate::models::business::{RadiusDerivation, ServiceRadius};
use crate::models::sources::{DistanceUnit, GeoPoint, NamedPlace, PlaceKind, ServiceArea};

const EARTH_RADIUS_MILES: f64 = 3959.0;
const MILES_PER_KILOMETER: f64 = 0.621371;

const DEFAULT_RADIUS_MILES: f64 = 15.0;
const DEFAULT_RADIUS_CONFIDENCE: f64 = 0.3;
const EXPLICIT_RADIUS_CONFIDENCE: f64 = 0.9;
const POLYGON_RADIUS_CONFIDENCE: f64 = 0.95;

/// Walks the cascade over a profile service area. Always yields a radius;
/// the fallback carries low confidence so a clarifying question fires.
pub fn derive_radius(area: Option<&ServiceArea>) -> ServiceRadius {
    if let Some(area) = area {
        if let Some(raw) = &area.radius {
            if raw.value > 0.0 {
                let miles = match raw.unit {
                    Some(DistanceUnit::Kilometers) => raw.value * MILES_PER_KILOMETER,
                    Some(DistanceUnit::Miles) | None => raw.value,
                };
                return ServiceRadius {
                    miles,
                    confidence: EXPLICIT_RADIUS_CONFIDENCE,
                    derivation: RadiusDerivation::Explicit,
                };
            }
        }
        if let Some(radius) = radius_from_polygon(&area.polygon) {
            return radius;
        }
        if let Some(radius) = radius_from_places(&area.places) {
            return radius;
        }
    }
    default_radius()
}

pub fn default_radius() -> ServiceRadius {
    ServiceRadius {
        miles: DEFAULT_RADIUS_MILES,
        confidence: DEFAULT_RADIUS_CONFIDENCE,
        derivation: RadiusDerivation::Default,
    }
}

/// Radius from polygon geometry: arithmetic-mean centroid, max great-circle
/// distance to any vertex, rounded to the nearest 5 miles, floored at 5.
pub fn radius_from_polygon(polygon: &[GeoPoint]) -> Option<ServiceRadius> {
    if polygon.len() < 3 {
        return None;
    }
    let count = polygon.len() as f64;
    let centroid = GeoPoint {
        lat: polygon.iter().map(|p| p.lat).sum::<f64>() / count,
        lng: polygon.iter().map(|p| p.lng).sum::<f64>() / count,
    };
    let max_distance = polygon
        .iter()
        .map(|vertex| haversine_miles(centroid, *vertex))
        .fold(0.0f64, f64::max);
    let rounded = ((max_distance / 5.0).round() * 5.0).max(5.0);
    Some(ServiceRadius {
        miles: rounded,
        confidence: POLYGON_RADIUS_CONFIDENCE,
        derivation: RadiusDerivation::Polygon,
    })
}

/// Great-circle distance via the haversine formula, Earth radius 3959 mi.
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

/// Place-count heuristic over a named-places list. Tier values are fixed:
/// single locality 10, county 50, state 100; 2-3 places 20; 4-10 places 30;
/// 11-20 places 50; more 75.
pub fn radius_from_places(places: &[NamedPlace]) -> Option<ServiceRadius> {
    if places.is_empty() {
        return None;
    }
    let miles = match places.len() {
        1 => match places[0].kind.unwrap_or(PlaceKind::Locality) {
            PlaceKind::State => 100.0,
            PlaceKind::County => 50.0,
            PlaceKind::Locality | PlaceKind::PostalCode | PlaceKind::Other => 10.0,
        },
        2..=3 => 20.0,
        4..=10 => 30.0,
        11..=20 => 50.0,
        _ => 75.0,
    };
    Some(ServiceRadius {
        miles,
        confidence: place_list_confidence(places),
        derivation: RadiusDerivation::PlaceList,
    })
}

/// Confidence in 0.4..=0.7, scaled by place count and kind homogeneity.
fn place_list_confidence(places: &[NamedPlace]) -> f64 {
    let mut kind_counts: HashMap<PlaceKind, usize> = HashMap::new();
    for place in places {
        *kind_counts
            .entry(place.kind.unwrap_or(PlaceKind::Locality))
            .or_insert(0) += 1;
    }
    let dominant = kind_counts.values().copied().max().unwrap_or(0) as f64;
    let homogeneity = dominant / places.len() as f64;
    let count_factor = places.len().min(10) as f64 / 10.0;
    (0.4 + 0.2 * homogeneity + 0.1 * count_factor).clamp(0.4, 0.7)
}
