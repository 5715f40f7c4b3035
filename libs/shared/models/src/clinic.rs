use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum UsState {
    Ny,
    Nc,
    Fl,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum InsurancePayer {
    Aetna,
    Bcbs,
    Cigna,
    Uhc,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClinicianType {
    Therapist,
    Psychologist,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    AssessmentSession1,
    AssessmentSession2,
    TherapyIntake,
    TherapySixtyMins,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Upcoming,
    Occurred,
    NoShow,
    ReScheduled,
    Cancelled,
    LateCancellation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub state: UsState,
    pub insurance: InsurancePayer,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A booked appointment. Only `scheduled_for` feeds the load calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub clinician_id: Uuid,
    pub scheduled_for: DateTime<Utc>,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clinician {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub clinician_type: ClinicianType,
    pub states: Vec<UsState>,
    pub insurances: Vec<InsurancePayer>,
    pub appointments: Vec<Appointment>,
    pub max_daily_appointments: u32,
    pub max_weekly_appointments: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Clinician {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn accepts_insurance(&self, insurance: InsurancePayer) -> bool {
        self.insurances.contains(&insurance)
    }

    pub fn is_licensed_in(&self, state: UsState) -> bool {
        self.states.contains(&state)
    }
}

/// A start instant a clinician has offered for booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableSlot {
    pub id: Uuid,
    pub clinician_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
