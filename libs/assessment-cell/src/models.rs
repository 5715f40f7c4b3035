use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::AvailableSlot;

/// Anything with a candidate start instant: bare instants or full slot records.
pub trait SlotInstant {
    fn start_time(&self) -> DateTime<Utc>;
}

impl SlotInstant for DateTime<Utc> {
    fn start_time(&self) -> DateTime<Utc> {
        *self
    }
}

impl SlotInstant for AvailableSlot {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl<T: SlotInstant + ?Sized> SlotInstant for &T {
    fn start_time(&self) -> DateTime<Utc> {
        (**self).start_time()
    }
}

/// Two sessions with the same clinician, first strictly before second.
/// Serializes as `["<first>", "<second>"]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssessmentPair(pub DateTime<Utc>, pub DateTime<Utc>);

impl AssessmentPair {
    pub fn first(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn second(&self) -> DateTime<Utc> {
        self.1
    }
}

/// Clinician id -> proposed pairs. Clinicians without pairs have no entry,
/// so an empty mapping means nothing could be proposed.
pub type AssessmentSlots = BTreeMap<Uuid, Vec<AssessmentPair>>;
