pub mod time;
pub mod eligibility;
pub mod retrieval;
pub mod optimizer;
pub mod quota;
pub mod pairing;
pub mod matching;

pub use eligibility::find_clinicians_by_insurance_and_state;
pub use retrieval::find_appointment_slots_by_clinician_ids;
pub use optimizer::optimize_assessment_slots;
pub use quota::{filter_slots_by_availability, AppointmentLoad};
pub use pairing::generate_assessment_pairs_for_clinician;
pub use matching::{
    assessment_pairs_for_clinician, generate_assessment_slots_for_patient, AssessmentMatchingService,
};
