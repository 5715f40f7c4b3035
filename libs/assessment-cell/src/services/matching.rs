use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::SchedulingConfig;
use shared_models::{AvailableSlot, Clinician, Patient};

use crate::error::AssessmentError;
use crate::models::{AssessmentPair, AssessmentSlots};
use crate::repository::ClinicianRepository;
use crate::services::eligibility::find_clinicians_by_insurance_and_state;
use crate::services::optimizer::optimize_assessment_slots;
use crate::services::pairing::generate_assessment_pairs_for_clinician;
use crate::services::quota::filter_slots_by_availability;
use crate::services::retrieval::find_appointment_slots_by_clinician_ids;
use crate::services::time::is_empty;

/// Proposes assessment slot pairs for `patient`, keyed by clinician id.
///
/// Returns an empty mapping when no clinician is eligible, when eligible
/// clinicians have no future slots, or when nothing survives the overlap and
/// quota checks. Inputs are never modified.
pub fn generate_assessment_slots_for_patient(
    patient: &Patient,
    clinicians: &[Clinician],
    available_slots: &[AvailableSlot],
    now: DateTime<Utc>,
    config: &SchedulingConfig,
) -> AssessmentSlots {
    let eligible = find_clinicians_by_insurance_and_state(
        patient.insurance,
        patient.state,
        config.assessment_clinician_type,
        clinicians,
    );

    if is_empty(&eligible) {
        debug!("No clinicians accept {:?} in {:?}", patient.insurance, patient.state);
        return AssessmentSlots::new();
    }

    let clinician_ids: Vec<Uuid> = eligible.iter().map(|c| c.id).collect();
    let slots = find_appointment_slots_by_clinician_ids(now, &clinician_ids, available_slots);

    if is_empty(&slots) {
        debug!("No slots after {} for {} eligible clinicians", now, eligible.len());
        return AssessmentSlots::new();
    }

    pair_slots_by_clinician(eligible, slots, config)
}

/// Overlap reduction, then quota filtering, then pairing, for one clinician.
///
/// `candidates` must be sorted ascending. Surviving slots keep their identity,
/// so a later record at an already-taken instant never re-enters the pairing.
pub fn assessment_pairs_for_clinician(
    clinician: &Clinician,
    candidates: &[&AvailableSlot],
    config: &SchedulingConfig,
) -> Vec<AssessmentPair> {
    let non_overlapping = optimize_assessment_slots(candidates, config.assessment_duration_minutes);
    let bookable = filter_slots_by_availability(&non_overlapping, clinician, config.week_start);

    generate_assessment_pairs_for_clinician(&bookable, config.assessment_window_days)
}

fn pair_slots_by_clinician<'a>(
    clinicians: impl IntoIterator<Item = &'a Clinician>,
    slots: Vec<&'a AvailableSlot>,
    config: &SchedulingConfig,
) -> AssessmentSlots {
    let mut slots_by_clinician: HashMap<Uuid, Vec<&AvailableSlot>> = HashMap::new();
    for slot in slots {
        slots_by_clinician.entry(slot.clinician_id).or_default().push(slot);
    }

    let mut results = AssessmentSlots::new();

    for clinician in clinicians {
        let Some(candidates) = slots_by_clinician.get(&clinician.id) else {
            continue;
        };

        let pairs = assessment_pairs_for_clinician(clinician, candidates, config);
        debug!(
            "Clinician {} has {} assessment pairs from {} slots",
            clinician.id,
            pairs.len(),
            candidates.len()
        );

        if !is_empty(&pairs) {
            results.insert(clinician.id, pairs);
        }
    }

    results
}

/// Runs the pipeline against a [`ClinicianRepository`] instead of raw collections.
pub struct AssessmentMatchingService<R> {
    repository: R,
    config: SchedulingConfig,
}

impl<R: ClinicianRepository> AssessmentMatchingService<R> {
    pub fn new(repository: R, config: SchedulingConfig) -> Result<Self, AssessmentError> {
        config.validate()?;
        Ok(Self { repository, config })
    }

    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    pub fn find_assessment_slots(
        &self,
        patient: &Patient,
        now: DateTime<Utc>,
    ) -> Result<AssessmentSlots, AssessmentError> {
        debug!("Finding assessment slots for patient: {}", patient.id);

        let eligible = self.repository.find_eligible_clinicians(
            patient.insurance,
            patient.state,
            self.config.assessment_clinician_type,
        )?;

        if is_empty(&eligible) {
            info!("No eligible clinicians for patient {}", patient.id);
            return Ok(AssessmentSlots::new());
        }

        let clinician_ids: Vec<Uuid> = eligible.iter().map(|c| c.id).collect();
        let slots = self.repository.find_slots_for_clinicians(now, &clinician_ids)?;

        if is_empty(&slots) {
            info!("No open slots for the {} eligible clinicians", eligible.len());
            return Ok(AssessmentSlots::new());
        }

        let results = pair_slots_by_clinician(&eligible, slots.iter().collect(), &self.config);

        info!(
            "Proposed {} assessment pairs across {} clinicians for patient {}",
            results.values().map(Vec::len).sum::<usize>(),
            results.len(),
            patient.id
        );

        Ok(results)
    }
}
