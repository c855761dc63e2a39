use super::*;

#[test]
fn handoff_state_default_has_nothing_pending() {
    let state = HandoffState::default();
    assert!(!state.is_pending());
}

#[test]
fn take_returns_the_recorded_handoff() {
    let mut state = HandoffState::default();
    state.set(101, "T1");

    let handoff = state.take().expect("handoff");
    assert_eq!(handoff.case_id, 101);
    assert_eq!(handoff.technician_id, "T1");
}

#[test]
fn take_consumes_exactly_once() {
    let mut state = HandoffState::default();
    state.set(101, "T1");

    assert!(state.take().is_some());
    assert!(state.take().is_none());
    assert!(!state.is_pending());
}

#[test]
fn set_replaces_an_unconsumed_handoff() {
    let mut state = HandoffState::default();
    state.set(101, "T1");
    state.set(202, "T2");

    let handoff = state.take().expect("handoff");
    assert_eq!(handoff.case_id, 202);
    assert_eq!(handoff.technician_id, "T2");
}
