//! Opening-hours parsing.

use crate::models::business::{OpenPeriod, WeeklyHours, MINUTES_PER_DAY};
use crate::models::sources::RawHoursPeriod;

/// Buckets raw periods into per-weekday open/close pairs. Periods with an
/// out-of-range day index or an unparseable time are skipped; a period with
/// absent open/close survives as an open-ended pair.
pub fn parse_weekly_hours(raw: &[RawHoursPeriod]) -> Option<WeeklyHours> {
    let mut hours = WeeklyHours::default();
    for period in raw {
        let Some(day) = period.day else {
            continue;
        };
        if day > 6 {
            continue;
        }
        let open = match &period.open {
            Some(text) => match parse_time(text) {
                Some(minutes) => Some(minutes),
                None => continue,
            },
            None => None,
        };
        let close = match &period.close {
            Some(text) => match parse_time(text) {
                Some(minutes) => Some(minutes),
                None => continue,
            },
            None => None,
        };
        hours.days[day as usize].push(OpenPeriod { open, close });
    }
    if hours.is_empty() {
        None
    } else {
        Some(hours)
    }
}

/// Accepts "HH:MM", "HHMM", and bare "HH". "24:00" maps to end of day.
pub fn parse_time(text: &str) -> Option<u16> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }
    let (hour_text, minute_text) = match trimmed.split_once(':') {
        Some((h, m)) => (h, m),
        None => match trimmed.len() {
            4 => trimmed.split_at(2),
            1 | 2 => (trimmed, "0"),
            _ => return None,
        },
    };
    let hours: u16 = hour_text.parse().ok()?;
    let minutes: u16 = minute_text.parse().ok()?;
    if minutes > 59 {
        return None;
    }
    let total = hours * 60 + minutes;
    if total > MINUTES_PER_DAY {
        return None;
    }
    Some(total)
}
