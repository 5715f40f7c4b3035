// libs/assessment-cell/tests/pipeline_test.rs

use chrono::{DateTime, Duration, Utc, Weekday};
use uuid::Uuid;

use assessment_cell::services::time::{is_date_on_later_day, is_same_day, is_within_seven_days};
use assessment_cell::{
    filter_slots_by_availability, find_appointment_slots_by_clinician_ids,
    find_clinicians_by_insurance_and_state, generate_assessment_pairs_for_clinician,
    optimize_assessment_slots, AssessmentPair,
};
use shared_config::DEFAULT_ASSESSMENT_DURATION_MINUTES;
use shared_models::{ClinicianType, InsurancePayer, UsState};
use shared_utils::test_utils::{
    fixture_now, slot_at, utc, FixtureClinic, TestClinician, GREGORY_HOUSE_ID, JANE_DOE_ID,
};

fn instants(raw: &[&str]) -> Vec<DateTime<Utc>> {
    raw.iter().map(|i| utc(i)).collect()
}

// ==============================================================================
// ELIGIBILITY
// ==============================================================================

#[test]
fn test_eligibility_requires_specialty_insurance_and_state() {
    let matching = TestClinician::psychologist()
        .with_states(&[UsState::Ny])
        .with_insurances(&[InsurancePayer::Aetna])
        .to_clinician();
    let therapist = TestClinician::therapist()
        .with_states(&[UsState::Ny])
        .with_insurances(&[InsurancePayer::Aetna])
        .to_clinician();
    let wrong_insurance = TestClinician::psychologist()
        .with_states(&[UsState::Ny])
        .with_insurances(&[InsurancePayer::Cigna])
        .to_clinician();
    let wrong_state = TestClinician::psychologist()
        .with_states(&[UsState::Fl])
        .with_insurances(&[InsurancePayer::Aetna])
        .to_clinician();
    let clinicians = vec![therapist, wrong_insurance, matching.clone(), wrong_state];

    let eligible = find_clinicians_by_insurance_and_state(
        InsurancePayer::Aetna,
        UsState::Ny,
        ClinicianType::Psychologist,
        &clinicians,
    );

    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].id, matching.id);
}

#[test]
fn test_eligibility_keeps_input_order() {
    let clinic = FixtureClinic::new();

    let eligible = find_clinicians_by_insurance_and_state(
        InsurancePayer::Aetna,
        UsState::Ny,
        ClinicianType::Psychologist,
        &clinic.clinicians,
    );

    let ids: Vec<Uuid> = eligible.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![JANE_DOE_ID, GREGORY_HOUSE_ID]);
}

// ==============================================================================
// SLOT RETRIEVAL
// ==============================================================================

#[test]
fn test_retrieval_excludes_past_and_current_instants() {
    let clinician_id = Uuid::new_v4();
    let slots = vec![
        slot_at(clinician_id, "2025-03-20T12:00:00Z"),
        slot_at(clinician_id, "2025-03-17T12:00:00Z"),
        slot_at(clinician_id, "2025-03-16T09:00:00Z"),
        slot_at(clinician_id, "2025-03-17T12:00:01Z"),
    ];

    let found = find_appointment_slots_by_clinician_ids(fixture_now(), &[clinician_id], &slots);

    let starts: Vec<DateTime<Utc>> = found.iter().map(|s| s.start_time).collect();
    assert_eq!(starts, instants(&["2025-03-17T12:00:01Z", "2025-03-20T12:00:00Z"]));
}

#[test]
fn test_retrieval_filters_by_clinician_and_sorts() {
    let wanted = Uuid::new_v4();
    let other = Uuid::new_v4();
    let slots = vec![
        slot_at(wanted, "2025-03-21T12:00:00Z"),
        slot_at(other, "2025-03-18T12:00:00Z"),
        slot_at(wanted, "2025-03-18T09:00:00Z"),
        slot_at(wanted, "2025-03-19T09:00:00Z"),
    ];

    let found = find_appointment_slots_by_clinician_ids(fixture_now(), &[wanted], &slots);

    assert!(found.iter().all(|s| s.clinician_id == wanted));
    let starts: Vec<DateTime<Utc>> = found.iter().map(|s| s.start_time).collect();
    assert_eq!(
        starts,
        instants(&["2025-03-18T09:00:00Z", "2025-03-19T09:00:00Z", "2025-03-21T12:00:00Z"])
    );
}

// ==============================================================================
// OVERLAP REDUCTION
// ==============================================================================

#[test]
fn test_optimize_keeps_first_and_first_after_duration() {
    let slots = instants(&[
        "2024-08-19T12:00:00Z",
        "2024-08-19T12:15:00Z",
        "2024-08-19T12:30:00Z",
        "2024-08-19T12:45:00Z",
        "2024-08-19T13:00:00Z",
        "2024-08-19T13:15:00Z",
        "2024-08-19T13:30:00Z",
    ]);

    let optimized = optimize_assessment_slots(&slots, DEFAULT_ASSESSMENT_DURATION_MINUTES);

    assert_eq!(optimized, instants(&["2024-08-19T12:00:00Z", "2024-08-19T13:30:00Z"]));
}

#[test]
fn test_optimize_allows_back_to_back_slots() {
    let slots = instants(&["2025-03-18T09:00:00Z", "2025-03-18T09:30:00Z", "2025-03-18T10:00:00Z"]);

    let optimized = optimize_assessment_slots(&slots, 30);

    assert_eq!(optimized, slots);
}

#[test]
fn test_optimize_output_never_overlaps() {
    let start = utc("2025-03-18T08:00:00Z");
    let slots: Vec<DateTime<Utc>> = (0..40)
        .map(|i| start + Duration::minutes(i * 17 + (i % 3) * 5))
        .collect();

    let optimized = optimize_assessment_slots(&slots, 45);

    assert!(optimized.iter().all(|s| slots.contains(s)));
    for window in optimized.windows(2) {
        assert!(window[1] >= window[0] + Duration::minutes(45));
    }
}

#[test]
fn test_optimize_empty_input() {
    let optimized = optimize_assessment_slots::<DateTime<Utc>>(&[], 90);

    assert!(optimized.is_empty());
}

#[test]
fn test_optimize_duration_past_representable_time_keeps_only_first() {
    let slots = instants(&["2025-03-18T09:00:00Z", "2025-03-19T09:00:00Z", "2025-04-18T09:00:00Z"]);

    let optimized = optimize_assessment_slots(&slots, 200_000_000_000);

    assert_eq!(optimized, instants(&["2025-03-18T09:00:00Z"]));
}

#[test]
fn test_optimize_slot_at_end_of_time() {
    let last = DateTime::<Utc>::MAX_UTC - Duration::minutes(30);
    let slots = vec![utc("2025-03-18T09:00:00Z"), last];

    let optimized = optimize_assessment_slots(&slots, 90);

    assert_eq!(optimized, slots);
}

// ==============================================================================
// QUOTA FILTER
// ==============================================================================

#[test]
fn test_filter_respects_existing_load() {
    let clinic = FixtureClinic::new();
    let gregory_house = clinic.clinician(GREGORY_HOUSE_ID).unwrap();

    let slots = instants(&[
        // Week of 3/16 is already at the weekly cap
        "2025-03-18T14:00:00Z",
        "2025-03-20T14:00:00Z",
        "2025-03-21T14:00:00Z",
        // 3/25 already has two appointments
        "2025-03-25T09:00:00Z",
        "2025-03-26T12:00:00Z",
    ]);

    let bookable = filter_slots_by_availability(&slots, gregory_house, Weekday::Sun);

    assert_eq!(bookable, instants(&["2025-03-26T12:00:00Z"]));
}

#[test]
fn test_filter_counts_provisional_bookings() {
    let clinician = TestClinician::psychologist().with_caps(1, 2).to_clinician();
    let slots = instants(&[
        "2025-03-18T09:00:00Z",
        "2025-03-18T14:00:00Z", // same day as an accepted slot
        "2025-03-19T09:00:00Z",
        "2025-03-20T09:00:00Z", // weekly cap reached by the two above
        "2025-03-24T09:00:00Z", // next week
    ]);

    let bookable = filter_slots_by_availability(&slots, &clinician, Weekday::Sun);

    assert_eq!(
        bookable,
        instants(&["2025-03-18T09:00:00Z", "2025-03-19T09:00:00Z", "2025-03-24T09:00:00Z"])
    );
}

#[test]
fn test_filter_preserves_input_order() {
    let clinician = TestClinician::psychologist().with_caps(5, 5).to_clinician();
    let slots = instants(&["2025-03-20T09:00:00Z", "2025-03-18T09:00:00Z", "2025-03-19T09:00:00Z"]);

    let bookable = filter_slots_by_availability(&slots, &clinician, Weekday::Sun);

    assert_eq!(bookable, slots);
}

#[test]
fn test_filter_zero_cap_rejects_everything() {
    let clinician = TestClinician::psychologist().with_caps(0, 10).to_clinician();
    let slots = instants(&["2025-03-18T09:00:00Z", "2025-03-25T09:00:00Z"]);

    let bookable = filter_slots_by_availability(&slots, &clinician, Weekday::Sun);

    assert!(bookable.is_empty());
}

#[test]
fn test_filter_rejects_slot_exactly_at_cap() {
    let clinician = TestClinician::psychologist()
        .with_caps(1, 10)
        .with_appointments_at(&["2025-03-18T08:00:00Z"])
        .to_clinician();

    let bookable =
        filter_slots_by_availability(&instants(&["2025-03-18T16:00:00Z"]), &clinician, Weekday::Sun);

    assert!(bookable.is_empty());
}

#[test]
fn test_filter_never_exceeds_caps() {
    let clinician = TestClinician::psychologist()
        .with_caps(2, 5)
        .with_appointments_at(&["2025-03-17T09:00:00Z", "2025-03-18T09:00:00Z"])
        .to_clinician();
    let start = utc("2025-03-16T07:00:00Z");
    let slots: Vec<DateTime<Utc>> = (0..60).map(|i| start + Duration::hours(i * 5)).collect();

    let bookable = filter_slots_by_availability(&slots, &clinician, Weekday::Sun);

    let mut all = bookable.clone();
    all.extend(clinician.appointments.iter().map(|a| a.scheduled_for));
    for instant in &all {
        let same_day = all.iter().filter(|other| is_same_day(**other, *instant)).count();
        assert!(same_day <= 2, "day cap exceeded on {}", instant);
    }
    let first_week = all
        .iter()
        .filter(|i| **i < utc("2025-03-23T00:00:00Z"))
        .count();
    assert!(first_week <= 5);
}

// ==============================================================================
// PAIRING
// ==============================================================================

#[test]
fn test_pairs_skip_same_day_and_distant_slots() {
    let slots = instants(&[
        "2025-03-18T08:00:00Z",
        "2025-03-18T12:00:00Z",
        "2025-03-25T20:00:00Z",
        "2025-03-26T08:00:00Z",
    ]);

    let pairs = generate_assessment_pairs_for_clinician(&slots, 7);

    assert_eq!(
        pairs,
        vec![
            AssessmentPair(utc("2025-03-18T08:00:00Z"), utc("2025-03-25T20:00:00Z")),
            AssessmentPair(utc("2025-03-18T12:00:00Z"), utc("2025-03-25T20:00:00Z")),
            AssessmentPair(utc("2025-03-25T20:00:00Z"), utc("2025-03-26T08:00:00Z")),
        ]
    );
}

#[test]
fn test_pairs_are_ordered_and_within_window() {
    let start = utc("2025-03-18T09:00:00Z");
    let slots: Vec<DateTime<Utc>> = (0..20).map(|i| start + Duration::hours(i * 13)).collect();

    let pairs = generate_assessment_pairs_for_clinician(&slots, 7);

    assert!(!pairs.is_empty());
    for pair in &pairs {
        assert!(is_date_on_later_day(pair.second(), pair.first()));
        assert!(is_within_seven_days(pair.second(), pair.first()));
    }
}

#[test]
fn test_pairs_need_two_slots() {
    assert!(generate_assessment_pairs_for_clinician::<DateTime<Utc>>(&[], 7).is_empty());
    assert!(generate_assessment_pairs_for_clinician(&instants(&["2025-03-18T09:00:00Z"]), 7).is_empty());
}

#[test]
fn test_pair_serializes_as_instant_array() {
    let pair = AssessmentPair(utc("2025-03-18T12:00:00Z"), utc("2025-03-19T08:00:00Z"));

    let json = serde_json::to_value(pair).unwrap();

    assert_eq!(
        json,
        serde_json::json!(["2025-03-18T12:00:00Z", "2025-03-19T08:00:00Z"])
    );
}

#[test]
fn test_pairs_from_slot_records() {
    let slots = vec![
        slot_at(JANE_DOE_ID, "2025-03-18T12:00:00Z"),
        slot_at(JANE_DOE_ID, "2025-03-19T08:00:00Z"),
    ];

    let pairs = generate_assessment_pairs_for_clinician(&slots, 7);

    assert_eq!(
        pairs,
        vec![AssessmentPair(utc("2025-03-18T12:00:00Z"), utc("2025-03-19T08:00:00Z"))]
    );
}
