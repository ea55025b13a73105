use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mavex::core::generator::{SALINE_SCHEDULE, SPO2_CEILING, SPO2_FLOOR};
use mavex::core::roster::{builtin_records, PatientRecord, SexTag};
use mavex::models::patient::{PatientId, Sex};
use mavex::models::vitals::TIME_LABELS;
use mavex::ui::text::DashboardView;
use mavex::{reduce, Action, DashboardState, MonitorError, Roster, VitalsGenerator};

fn roster(seed: u64) -> Roster {
    Roster::builtin(&mut VitalsGenerator::seeded(seed)).unwrap()
}

#[test]
fn every_patient_has_a_well_formed_series() {
    let roster = roster(2024);
    let baselines = [72.0, 78.0, 68.0];
    for (patient, baseline) in roster.patients().iter().zip(baselines) {
        let times: Vec<_> = patient.data.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, TIME_LABELS);
        let saline: Vec<_> = patient.data.iter().map(|s| s.saline).collect();
        assert_eq!(saline, SALINE_SCHEDULE);
        for sample in &patient.data {
            assert!((SPO2_FLOOR..=SPO2_CEILING).contains(&sample.spo2));
            let hr = f64::from(sample.heart_rate);
            assert!((baseline..=baseline + 5.0).contains(&hr), "{hr} outside {baseline}+5");
        }
    }
}

#[test]
fn same_seed_builds_identical_rosters() {
    assert_eq!(roster(99).patients(), roster(99).patients());
}

#[test]
fn generated_names_are_found_by_any_casing_of_a_fragment() {
    let mut rng = StdRng::seed_from_u64(17);
    let template = builtin_records().remove(0);
    let records: Vec<PatientRecord> = (1..=25)
        .map(|id| PatientRecord {
            id: PatientId(id),
            name: Name().fake_with_rng(&mut rng),
            ..template.clone()
        })
        .collect();
    let roster = Roster::from_records(records, &mut VitalsGenerator::seeded(1)).unwrap();

    for patient in roster.patients() {
        let fragment: String = patient.name.chars().take(3).collect();
        for query in [fragment.to_lowercase(), fragment.to_uppercase()] {
            let hits = roster.filter(&query);
            assert!(hits.iter().any(|p| p.id == patient.id), "{query:?} missed {}", patient.name);
            assert!(hits.iter().all(|p| p.name.to_lowercase().contains(&query.to_lowercase())));
        }
    }
}

#[test]
fn walking_through_the_dashboard() {
    let roster = roster(5);
    let mut state = DashboardState::initial(&roster);
    assert_eq!(state.selected, Some(PatientId(1)));

    state = reduce(&state, Action::Search("sharma".into()), &roster);
    let visible: Vec<_> = state.visible_patients(&roster).iter().map(|p| p.id).collect();
    assert_eq!(visible, [PatientId(2)]);

    state = reduce(&state, Action::SelectPatient(PatientId(2)), &roster);
    let selected = state.selected_patient(&roster).unwrap();
    assert!(matches!(selected.sex, Sex::Female { .. }));
    assert!(selected.menstrual_data().is_some());

    state = reduce(&state, Action::HideSidebar, &roster);
    let screen = DashboardView { state: &state, roster: &roster }.to_string();
    assert!(screen.contains("Patient Dashboard - Priya Sharma"));
    assert!(screen.contains("-- Menstrual Tracking --"));
    assert!(!screen.contains("Search: sharma"));
}

#[test]
fn roster_file_replaces_builtin_patients() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ward.json");
    let mut records = builtin_records();
    records.truncate(2);
    records[0].name = "Meera Iyer".into();
    records[0].gender = SexTag::Female;
    std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    let roster = Roster::from_file(&path, &mut VitalsGenerator::seeded(3)).unwrap();
    assert_eq!(roster.len(), 2);
    let meera = roster.get(PatientId(1)).unwrap();
    assert_eq!(meera.sex.label(), "Female");
    assert!(meera.menstrual_data().is_none());
}

#[test]
fn malformed_roster_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"[{"id": 1, "name": "Nobody"}]"#).unwrap();

    let err = Roster::from_file(&path, &mut VitalsGenerator::seeded(3)).unwrap_err();
    assert!(matches!(err, MonitorError::RosterFormat(_)));

    let missing = Roster::from_file(dir.path().join("absent.json"), &mut VitalsGenerator::seeded(3));
    assert!(matches!(missing, Err(MonitorError::RosterFile(_))));
}

#[test]
fn patient_json_uses_camel_case_keys() {
    let roster = roster(3);
    let priya = roster.get(PatientId(2)).unwrap();
    let json = serde_json::to_string(priya).unwrap();
    for key in ["\"deviceId\"", "\"menstrualData\"", "\"lastPeriod\"", "\"cycleLength\"", "\"nextPeriod\""] {
        assert!(json.contains(key), "missing {key} in {json}");
    }
    assert!(!json.contains('_'), "snake_case key in {json}");
}
