//! Years-in-business extraction from free-text descriptions.

use regex::Regex;
use std::sync::LazyLock;

// Three ordered patterns; the first match wins.
static RE_YEARS_OF: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,3})\+?\s*years?\s+(?:of\s+)?(?:experience|service|business)").ok()
});
static RE_SINCE_YEAR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:since|established|founded)(?:\s+in)?\s+(\d{4})\b").ok()
});
static RE_OVER_YEARS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:over|more\s+than)\s+(\d{1,3})\s+years?\b").ok());

const EARLIEST_PLAUSIBLE_YEAR: i32 = 1800;

/// Extracts a years-in-business figure from a description, or None.
///
/// `reference_year` anchors "since YYYY" conversions so callers control the
/// clock; implausible years (future, or before 1800) are ignored.
pub fn extract_years(description: &str, reference_year: i32) -> Option<u32> {
    if let Some(re) = RE_YEARS_OF.as_ref() {
        if let Some(years) = first_number(re, description) {
            return Some(years);
        }
    }
    if let Some(re) = RE_SINCE_YEAR.as_ref() {
        if let Some(year) = first_number(re, description) {
            let year = year as i32;
            if (EARLIEST_PLAUSIBLE_YEAR..=reference_year).contains(&year) {
                return Some((reference_year - year) as u32);
            }
        }
    }
    if let Some(re) = RE_OVER_YEARS.as_ref() {
        if let Some(years) = first_number(re, description) {
            return Some(years);
        }
    }
    None
}

fn first_number(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
