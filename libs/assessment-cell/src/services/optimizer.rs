use chrono::{DateTime, Duration, Utc};

use crate::models::SlotInstant;

/// Greedily keeps slots that start at or after the end of the last kept slot,
/// where each slot occupies `[start, start + duration_minutes)`.
///
/// `slots` must be sorted ascending; unsorted input gives meaningless output.
/// A slot whose end is past the last representable instant blocks every later slot.
pub fn optimize_assessment_slots<T>(slots: &[T], duration_minutes: i64) -> Vec<T>
where
    T: SlotInstant + Clone,
{
    let duration = Duration::try_minutes(duration_minutes);
    let mut result = Vec::new();
    let mut last_end_time: Option<DateTime<Utc>> = None;

    for slot in slots {
        let start = slot.start_time();

        if last_end_time.map_or(true, |end| start >= end) {
            result.push(slot.clone());

            match duration.and_then(|d| start.checked_add_signed(d)) {
                Some(end) => last_end_time = Some(end),
                None => break,
            }
        }
    }

    result
}
