use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use tracing::debug;

use shared_models::Clinician;

use crate::models::SlotInstant;
use crate::services::time::{start_of_day, start_of_week};

/// Per-day and per-week appointment counts for one clinician.
#[derive(Debug, Clone)]
pub struct AppointmentLoad {
    week_start: Weekday,
    max_daily: u32,
    max_weekly: u32,
    daily: HashMap<NaiveDate, u32>,
    weekly: HashMap<NaiveDate, u32>,
}

impl AppointmentLoad {
    /// Load from the clinician's existing appointments, whatever their status.
    pub fn for_clinician(clinician: &Clinician, week_start: Weekday) -> Self {
        let mut load = Self {
            week_start,
            max_daily: clinician.max_daily_appointments,
            max_weekly: clinician.max_weekly_appointments,
            daily: HashMap::new(),
            weekly: HashMap::new(),
        };

        for appointment in &clinician.appointments {
            load.record(appointment.scheduled_for);
        }

        load
    }

    pub fn daily_count(&self, instant: DateTime<Utc>) -> u32 {
        self.daily.get(&start_of_day(instant)).copied().unwrap_or(0)
    }

    pub fn weekly_count(&self, instant: DateTime<Utc>) -> u32 {
        self.weekly
            .get(&start_of_week(instant, self.week_start))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_bookable(&self, instant: DateTime<Utc>) -> bool {
        self.daily_count(instant) < self.max_daily && self.weekly_count(instant) < self.max_weekly
    }

    /// Books `instant` if both caps allow it. Returns whether it was booked.
    pub fn try_book(&mut self, instant: DateTime<Utc>) -> bool {
        if !self.is_bookable(instant) {
            return false;
        }
        self.record(instant);
        true
    }

    fn record(&mut self, instant: DateTime<Utc>) {
        *self.daily.entry(start_of_day(instant)).or_insert(0) += 1;
        *self
            .weekly
            .entry(start_of_week(instant, self.week_start))
            .or_insert(0) += 1;
    }
}

/// Keeps the slots the clinician can still take under their daily and weekly caps.
///
/// Each accepted slot is booked against the running load before the next slot
/// is checked: a patient takes two slots from the same clinician, and the second
/// must fit alongside the first. Input order decides which slot wins a contested
/// day or week, and is preserved in the output.
pub fn filter_slots_by_availability<T>(
    slots: &[T],
    clinician: &Clinician,
    week_start: Weekday,
) -> Vec<T>
where
    T: SlotInstant + Clone,
{
    let mut load = AppointmentLoad::for_clinician(clinician, week_start);

    let bookable: Vec<T> = slots
        .iter()
        .filter(|slot| load.try_book(slot.start_time()))
        .cloned()
        .collect();

    debug!(
        "Clinician {} can take {} of {} candidate slots",
        clinician.id,
        bookable.len(),
        slots.len()
    );

    bookable
}
