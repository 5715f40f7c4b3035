use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod report;

use assessment_cell::{AssessmentMatchingService, InMemoryClinicRepository};
use shared_config::SchedulingConfig;
use shared_utils::fixtures::FixtureClinic;

fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting assessment scheduler");

    let config = SchedulingConfig::from_env();
    let clinic = FixtureClinic::load().context("Cannot load the fixture clinic")?;
    let now = evaluation_instant(clinic.now);

    let repository =
        InMemoryClinicRepository::new(clinic.clinicians.clone(), clinic.available_slots.clone());
    let service = AssessmentMatchingService::new(repository, config)
        .context("Cannot start with the current scheduling configuration")?;

    info!(
        "Matching {}-minute assessments within {} days",
        service.config().assessment_duration_minutes,
        service.config().assessment_window_days
    );

    let slots = service.find_assessment_slots(&clinic.patient, now)?;
    let report = report::AssessmentReport::build(
        &clinic.patient,
        &clinic.clinicians,
        &slots,
        now,
        service.config(),
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// `ASSESSMENT_NOW` (RFC 3339) if set and valid, else `fallback`.
fn evaluation_instant(fallback: DateTime<Utc>) -> DateTime<Utc> {
    match std::env::var("ASSESSMENT_NOW") {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("ASSESSMENT_NOW {:?} is not RFC 3339 ({}), using fixture instant", raw, e);
            fallback
        }),
        Err(_) => fallback,
    }
}
