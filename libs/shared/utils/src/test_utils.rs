use chrono::{DateTime, Utc};
use uuid::Uuid;

use shared_models::{
    Appointment, AppointmentStatus, AppointmentType, AvailableSlot, Clinician, ClinicianType,
    InsurancePayer, Patient, UsState,
};

pub use crate::fixtures::{
    FixtureClinic, FIXTURE_PATIENT_ID, GREGORY_HOUSE_ID, JANE_DOE_ID, JENNIFER_MELFI_ID,
};
use crate::fixtures::FIXTURE_NOW;

/// Parse an RFC 3339 instant. Panics on bad input, test data only.
pub fn utc(instant: &str) -> DateTime<Utc> {
    instant
        .parse()
        .unwrap_or_else(|e| panic!("invalid fixture instant {}: {}", instant, e))
}

/// The "current" instant every fixture scenario is evaluated at.
pub fn fixture_now() -> DateTime<Utc> {
    utc(FIXTURE_NOW)
}

pub struct TestPatient {
    pub id: Uuid,
    pub state: UsState,
    pub insurance: InsurancePayer,
}

impl Default for TestPatient {
    fn default() -> Self {
        Self {
            id: FIXTURE_PATIENT_ID,
            state: UsState::Ny,
            insurance: InsurancePayer::Aetna,
        }
    }
}

impl TestPatient {
    pub fn new(state: UsState, insurance: InsurancePayer) -> Self {
        Self {
            id: Uuid::new_v4(),
            state,
            insurance,
        }
    }

    pub fn to_patient(&self) -> Patient {
        Patient {
            id: self.id,
            first_name: "Paul".to_string(),
            last_name: "Kleinschmidt".to_string(),
            state: self.state,
            insurance: self.insurance,
            created_at: fixture_now(),
            updated_at: fixture_now(),
        }
    }
}

pub struct TestClinician {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub clinician_type: ClinicianType,
    pub states: Vec<UsState>,
    pub insurances: Vec<InsurancePayer>,
    pub appointments: Vec<DateTime<Utc>>,
    pub max_daily_appointments: u32,
    pub max_weekly_appointments: u32,
}

impl Default for TestClinician {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: "Test".to_string(),
            last_name: "Clinician".to_string(),
            clinician_type: ClinicianType::Psychologist,
            states: vec![UsState::Ny],
            insurances: vec![InsurancePayer::Aetna],
            appointments: vec![],
            max_daily_appointments: 2,
            max_weekly_appointments: 8,
        }
    }
}

impl TestClinician {
    pub fn psychologist() -> Self {
        Self::default()
    }

    pub fn therapist() -> Self {
        Self {
            clinician_type: ClinicianType::Therapist,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
    }

    pub fn with_states(mut self, states: &[UsState]) -> Self {
        self.states = states.to_vec();
        self
    }

    pub fn with_insurances(mut self, insurances: &[InsurancePayer]) -> Self {
        self.insurances = insurances.to_vec();
        self
    }

    pub fn with_caps(mut self, daily: u32, weekly: u32) -> Self {
        self.max_daily_appointments = daily;
        self.max_weekly_appointments = weekly;
        self
    }

    pub fn with_appointments_at(mut self, instants: &[&str]) -> Self {
        self.appointments = instants.iter().map(|i| utc(i)).collect();
        self
    }

    pub fn to_clinician(&self) -> Clinician {
        Clinician {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            clinician_type: self.clinician_type,
            states: self.states.clone(),
            insurances: self.insurances.clone(),
            appointments: self
                .appointments
                .iter()
                .map(|scheduled_for| Appointment {
                    id: Uuid::new_v4(),
                    patient_id: Uuid::new_v4(),
                    clinician_id: self.id,
                    scheduled_for: *scheduled_for,
                    appointment_type: AppointmentType::TherapySixtyMins,
                    status: AppointmentStatus::Upcoming,
                })
                .collect(),
            max_daily_appointments: self.max_daily_appointments,
            max_weekly_appointments: self.max_weekly_appointments,
            created_at: fixture_now(),
            updated_at: fixture_now(),
        }
    }
}

/// A 90 minute slot offered by `clinician_id` at `instant`.
pub fn slot_at(clinician_id: Uuid, instant: &str) -> AvailableSlot {
    AvailableSlot {
        id: Uuid::new_v4(),
        clinician_id,
        start_time: utc(instant),
        duration_minutes: 90,
        created_at: fixture_now(),
        updated_at: fixture_now(),
    }
}

impl FixtureClinic {
    pub fn new() -> Self {
        Self::load().unwrap_or_else(|e| panic!("fixture clinic failed to load: {}", e))
    }
}
