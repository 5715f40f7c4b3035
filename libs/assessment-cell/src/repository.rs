use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use shared_models::{AvailableSlot, Clinician, ClinicianType, InsurancePayer, UsState};

use crate::error::AssessmentError;
use crate::services::eligibility::find_clinicians_by_insurance_and_state;
use crate::services::retrieval::find_appointment_slots_by_clinician_ids;

/// Read-only access to clinician and slot records.
#[cfg_attr(test, mockall::automock)]
pub trait ClinicianRepository {
    /// Clinicians of `clinician_type` accepting `insurance` in `state`.
    fn find_eligible_clinicians(
        &self,
        insurance: InsurancePayer,
        state: UsState,
        clinician_type: ClinicianType,
    ) -> Result<Vec<Clinician>, AssessmentError>;

    /// Slots for `clinician_ids` starting strictly after `now`, earliest first.
    fn find_slots_for_clinicians(
        &self,
        now: DateTime<Utc>,
        clinician_ids: &[Uuid],
    ) -> Result<Vec<AvailableSlot>, AssessmentError>;
}

/// Repository over collections already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClinicRepository {
    clinicians: Vec<Clinician>,
    available_slots: Vec<AvailableSlot>,
}

impl InMemoryClinicRepository {
    pub fn new(clinicians: Vec<Clinician>, available_slots: Vec<AvailableSlot>) -> Self {
        debug!(
            "In-memory clinic loaded with {} clinicians and {} slots",
            clinicians.len(),
            available_slots.len()
        );
        Self {
            clinicians,
            available_slots,
        }
    }
}

impl ClinicianRepository for InMemoryClinicRepository {
    fn find_eligible_clinicians(
        &self,
        insurance: InsurancePayer,
        state: UsState,
        clinician_type: ClinicianType,
    ) -> Result<Vec<Clinician>, AssessmentError> {
        Ok(
            find_clinicians_by_insurance_and_state(insurance, state, clinician_type, &self.clinicians)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    fn find_slots_for_clinicians(
        &self,
        now: DateTime<Utc>,
        clinician_ids: &[Uuid],
    ) -> Result<Vec<AvailableSlot>, AssessmentError> {
        Ok(
            find_appointment_slots_by_clinician_ids(now, clinician_ids, &self.available_slots)
                .into_iter()
                .cloned()
                .collect(),
        )
    }
}
