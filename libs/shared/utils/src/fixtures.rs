// Stand-in clinic records: one patient, two psychologists and a therapist.

use chrono::{DateTime, ParseError, Utc};
use uuid::Uuid;

use shared_models::{
    Appointment, AppointmentStatus, AppointmentType, AvailableSlot, Clinician, ClinicianType,
    InsurancePayer, Patient, UsState,
};

pub const FIXTURE_NOW: &str = "2025-03-17T12:00:00Z";

pub const FIXTURE_PATIENT_ID: Uuid = Uuid::from_u128(0x251ef27a_2ca7_4517_ab4a_93208287224c);
/// Psychologist with no booked appointments.
pub const JANE_DOE_ID: Uuid = Uuid::from_u128(0x9c516382_c5b2_4677_a7ac_4e100fa35bdd);
/// Psychologist fully booked the week of 2025-03-16 and nearly full the week of 2025-03-23.
pub const GREGORY_HOUSE_ID: Uuid = Uuid::from_u128(0x4982c223_643d_439f_80c5_72aecabe8fb8);
/// Therapist; never eligible for assessments.
pub const JENNIFER_MELFI_ID: Uuid = Uuid::from_u128(0x3a7049db_f038_4102_8a7a_ef8582160aaf);

const GREGORY_HOUSE_APPOINTMENTS: [&str; 5] = [
    // Week of 3/16: three appointments, the weekly cap
    "2025-03-18T12:00:00Z",
    "2025-03-19T12:00:00Z",
    "2025-03-20T12:00:00Z",
    // Week of 3/23: daily cap reached on 3/25, one weekly booking left
    "2025-03-25T12:00:00Z",
    "2025-03-25T15:00:00Z",
];

const AVAILABLE_SLOTS: [(Uuid, &str); 14] = [
    (JANE_DOE_ID, "2025-03-18T12:00:00Z"),
    (JANE_DOE_ID, "2025-03-19T08:00:00Z"),
    (JANE_DOE_ID, "2025-03-19T12:00:00Z"),
    // Overlaps the 12:00 slot
    (JANE_DOE_ID, "2025-03-19T12:30:00Z"),
    (JANE_DOE_ID, "2025-03-20T12:00:00Z"),
    (JANE_DOE_ID, "2025-03-27T12:00:00Z"),
    // Week of 3/16 is fully booked for House
    (GREGORY_HOUSE_ID, "2025-03-19T12:00:00Z"),
    (GREGORY_HOUSE_ID, "2025-03-20T12:00:00Z"),
    (GREGORY_HOUSE_ID, "2025-03-27T12:00:00Z"),
    // Loses the last weekly booking to 3/27
    (GREGORY_HOUSE_ID, "2025-03-28T12:00:00Z"),
    (GREGORY_HOUSE_ID, "2025-04-01T12:00:00Z"),
    (JENNIFER_MELFI_ID, "2025-03-28T12:00:00Z"),
    // Same instant as an earlier House slot
    (GREGORY_HOUSE_ID, "2025-04-01T12:00:00Z"),
    // Already in the past at FIXTURE_NOW
    (JANE_DOE_ID, "2025-03-17T12:00:00Z"),
];

pub struct FixtureClinic {
    /// The "current" instant the fixture scenarios are written against.
    pub now: DateTime<Utc>,
    pub patient: Patient,
    pub clinicians: Vec<Clinician>,
    pub available_slots: Vec<AvailableSlot>,
}

impl FixtureClinic {
    pub fn load() -> Result<Self, ParseError> {
        let now: DateTime<Utc> = FIXTURE_NOW.parse()?;

        let patient = Patient {
            id: FIXTURE_PATIENT_ID,
            first_name: "Paul".to_string(),
            last_name: "Kleinschmidt".to_string(),
            state: UsState::Ny,
            insurance: InsurancePayer::Aetna,
            created_at: now,
            updated_at: now,
        };

        let jane_doe = ClinicianRecord {
            id: JANE_DOE_ID,
            name: ("Jane", "Doe"),
            clinician_type: ClinicianType::Psychologist,
            states: &[UsState::Ny, UsState::Fl],
            insurances: &[InsurancePayer::Aetna, InsurancePayer::Cigna],
            caps: (2, 8),
            appointments: &[],
        }
        .build(now)?;

        let gregory_house = ClinicianRecord {
            id: GREGORY_HOUSE_ID,
            name: ("Gregory", "House"),
            clinician_type: ClinicianType::Psychologist,
            states: &[UsState::Nc, UsState::Ny],
            insurances: &[InsurancePayer::Bcbs, InsurancePayer::Aetna],
            caps: (2, 3),
            appointments: &GREGORY_HOUSE_APPOINTMENTS,
        }
        .build(now)?;

        let jennifer_melfi = ClinicianRecord {
            id: JENNIFER_MELFI_ID,
            name: ("Jennifer", "Melfi"),
            clinician_type: ClinicianType::Therapist,
            states: &[UsState::Ny, UsState::Fl],
            insurances: &[InsurancePayer::Aetna, InsurancePayer::Cigna],
            caps: (9, 8),
            appointments: &[],
        }
        .build(now)?;

        let available_slots = AVAILABLE_SLOTS
            .iter()
            .map(|(clinician_id, start)| {
                Ok(AvailableSlot {
                    id: Uuid::new_v4(),
                    clinician_id: *clinician_id,
                    start_time: start.parse()?,
                    duration_minutes: 90,
                    created_at: now,
                    updated_at: now,
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(Self {
            now,
            patient,
            clinicians: vec![jane_doe, gregory_house, jennifer_melfi],
            available_slots,
        })
    }

    pub fn clinician(&self, id: Uuid) -> Option<&Clinician> {
        self.clinicians.iter().find(|c| c.id == id)
    }
}

struct ClinicianRecord {
    id: Uuid,
    name: (&'static str, &'static str),
    clinician_type: ClinicianType,
    states: &'static [UsState],
    insurances: &'static [InsurancePayer],
    caps: (u32, u32),
    appointments: &'static [&'static str],
}

impl ClinicianRecord {
    fn build(self, now: DateTime<Utc>) -> Result<Clinician, ParseError> {
        let appointments = self
            .appointments
            .iter()
            .map(|scheduled_for| {
                Ok(Appointment {
                    id: Uuid::new_v4(),
                    patient_id: Uuid::new_v4(),
                    clinician_id: self.id,
                    scheduled_for: scheduled_for.parse()?,
                    appointment_type: AppointmentType::TherapySixtyMins,
                    status: AppointmentStatus::Upcoming,
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(Clinician {
            id: self.id,
            first_name: self.name.0.to_string(),
            last_name: self.name.1.to_string(),
            clinician_type: self.clinician_type,
            states: self.states.to_vec(),
            insurances: self.insurances.to_vec(),
            appointments,
            max_daily_appointments: self.caps.0,
            max_weekly_appointments: self.caps.1,
            created_at: now,
            updated_at: now,
        })
    }
}
