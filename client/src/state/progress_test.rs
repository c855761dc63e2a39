use super::*;

fn sample_record(case_id: u64, progress: u32) -> MaintenanceRecord {
    MaintenanceRecord {
        case_id,
        entry_time: "2025-03-25".to_owned(),
        car_model: "Model 3".to_owned(),
        repair_items: vec!["oil change".to_owned()],
        technician_id: "T1".to_owned(),
        progress,
        completed_items: Vec::new(),
    }
}

#[test]
fn progress_state_default_shows_no_record() {
    let state = ProgressState::default();
    assert!(state.record.is_none());
}

#[test]
fn found_record_is_stored_and_reported() {
    let mut state = ProgressState::default();
    assert!(state.apply_lookup(Some(sample_record(101, 50))));
    assert_eq!(state.record.as_ref().map(|r| r.case_id), Some(101));
}

#[test]
fn absent_reply_clears_previous_record() {
    let mut state = ProgressState::default();
    state.apply_lookup(Some(sample_record(101, 50)));

    assert!(!state.apply_lookup(None));
    assert!(state.record.is_none());
}

#[test]
fn zero_progress_record_is_still_a_found_record() {
    let mut state = ProgressState::default();
    assert!(state.apply_lookup(Some(sample_record(101, 0))));
    assert_eq!(state.record.as_ref().map(|r| r.progress), Some(0));
}
