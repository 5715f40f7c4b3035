use crate::models::{AssessmentPair, SlotInstant};
use crate::services::time::{is_date_on_later_day, is_empty, is_within_days};

/// Every (earlier, later) combination of the clinician's slots where the later
/// slot falls on a later calendar day, at most `window_days` days on.
pub fn generate_assessment_pairs_for_clinician<T>(slots: &[T], window_days: i64) -> Vec<AssessmentPair>
where
    T: SlotInstant,
{
    if is_empty(slots) {
        return vec![];
    }

    let mut pairs = Vec::new();

    for first in slots {
        let first = first.start_time();

        pairs.extend(
            slots
                .iter()
                .map(|slot| slot.start_time())
                .filter(|second| {
                    is_date_on_later_day(*second, first) && is_within_days(*second, first, window_days)
                })
                .map(|second| AssessmentPair(first, second)),
        );
    }

    pairs
}
