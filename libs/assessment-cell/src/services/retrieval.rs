use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared_models::AvailableSlot;

/// Slots belonging to `clinician_ids` that start strictly after `now`, earliest first.
///
/// The sort is stable, so slots sharing an instant keep their input order.
pub fn find_appointment_slots_by_clinician_ids<'a>(
    now: DateTime<Utc>,
    clinician_ids: &[Uuid],
    available_slots: &'a [AvailableSlot],
) -> Vec<&'a AvailableSlot> {
    let clinician_ids: HashSet<&Uuid> = clinician_ids.iter().collect();

    let mut slots: Vec<&AvailableSlot> = available_slots
        .iter()
        .filter(|slot| clinician_ids.contains(&slot.clinician_id) && slot.start_time > now)
        .collect();

    slots.sort_by_key(|slot| slot.start_time);
    slots
}
