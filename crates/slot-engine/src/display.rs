//! Human-readable rendering for the day grid and the slot editor.

use crate::interval::Interval;
use crate::time::TimeOfDay;

/// Render a time on the 12-hour clock, e.g. `7:00 AM`, `12:30 PM`.
pub fn format_12_hour(time: TimeOfDay) -> String {
    let hour = time.hour();
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, time.minute(), period)
}

/// `7:00 AM - 8:00 AM`
pub fn describe(interval: &Interval) -> String {
    format!(
        "{} - {}",
        format_12_hour(interval.start),
        format_12_hour(interval.end)
    )
}

/// Row labels for the 24 hour lines of the day grid.
///
/// Midday reads `Noon`; midnight reads `12 AM`.
pub fn hour_labels() -> Vec<String> {
    (0..24u16)
        .map(|hour| match hour {
            12 => "Noon".to_string(),
            _ => {
                let period = if hour < 12 { "AM" } else { "PM" };
                let hour12 = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{hour12} {period}")
            }
        })
        .collect()
}
