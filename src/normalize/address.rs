//! Address formatting.

/// Concatenates street line(s), locality, administrative area, and postal
/// code into one display string, skipping empty parts, joined by ", ".
pub fn format_address(
    street_lines: &[String],
    locality: Option<&str>,
    administrative_area: Option<&str>,
    postal_code: Option<&str>,
) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for line in street_lines {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }
    for piece in [locality, administrative_area, postal_code] {
        if let Some(value) = piece {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
