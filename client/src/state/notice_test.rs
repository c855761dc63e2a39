use super::*;

#[test]
fn notice_state_default_shows_nothing() {
    let state = NoticeState::default();
    assert!(state.current.is_none());
}

#[test]
fn success_replaces_current_notice() {
    let mut state = NoticeState::default();
    state.failure("Booking failed");
    state.success("Booking confirmed");

    let notice = state.current.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, "Booking confirmed");
}

#[test]
fn failure_replaces_current_notice() {
    let mut state = NoticeState::default();
    state.success("Progress updated");
    state.failure("Update failed: case not found");

    let notice = state.current.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(notice.text, "Update failed: case not found");
}

#[test]
fn clear_dismisses_the_notice() {
    let mut state = NoticeState::default();
    state.success("Maintenance record added");
    state.clear();
    assert!(state.current.is_none());
}
