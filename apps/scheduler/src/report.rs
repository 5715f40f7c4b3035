use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use assessment_cell::{AssessmentPair, AssessmentSlots};
use shared_config::SchedulingConfig;
use shared_models::{Clinician, Patient};

#[derive(Debug, Serialize)]
pub struct AssessmentReport {
    pub patient_id: Uuid,
    pub patient_name: String,
    pub evaluated_at: DateTime<Utc>,
    pub assessment_duration_minutes: i64,
    pub assessment_window_days: i64,
    pub clinicians: Vec<ClinicianPairs>,
}

#[derive(Debug, Serialize)]
pub struct ClinicianPairs {
    pub clinician_id: Uuid,
    pub clinician_name: String,
    pub pairs: Vec<AssessmentPair>,
}

impl AssessmentReport {
    /// Clinicians are listed in roster order; ids missing from the roster are
    /// reported without a name.
    pub fn build(
        patient: &Patient,
        roster: &[Clinician],
        slots: &AssessmentSlots,
        evaluated_at: DateTime<Utc>,
        config: &SchedulingConfig,
    ) -> Self {
        let mut clinicians: Vec<ClinicianPairs> = roster
            .iter()
            .filter_map(|clinician| {
                slots.get(&clinician.id).map(|pairs| ClinicianPairs {
                    clinician_id: clinician.id,
                    clinician_name: clinician.full_name(),
                    pairs: pairs.clone(),
                })
            })
            .collect();

        clinicians.extend(
            slots
                .iter()
                .filter(|(id, _)| !roster.iter().any(|c| c.id == **id))
                .map(|(id, pairs)| ClinicianPairs {
                    clinician_id: *id,
                    clinician_name: String::new(),
                    pairs: pairs.clone(),
                }),
        );

        Self {
            patient_id: patient.id,
            patient_name: patient.full_name(),
            evaluated_at,
            assessment_duration_minutes: config.assessment_duration_minutes,
            assessment_window_days: config.assessment_window_days,
            clinicians,
        }
    }
}
