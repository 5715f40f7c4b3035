use shared_models::{Clinician, ClinicianType, InsurancePayer, UsState};

/// Clinicians of `clinician_type` who take `insurance` and practise in `state`,
/// in input order.
pub fn find_clinicians_by_insurance_and_state<'a>(
    insurance: InsurancePayer,
    state: UsState,
    clinician_type: ClinicianType,
    clinicians: &'a [Clinician],
) -> Vec<&'a Clinician> {
    clinicians
        .iter()
        .filter(|clinician| {
            clinician.clinician_type == clinician_type
                && clinician.accepts_insurance(insurance)
                && clinician.is_licensed_in(state)
        })
        .collect()
}
