use super::*;

#[test]
fn payment_state_default_has_no_receipt() {
    let state = PaymentState::default();
    assert!(state.receipt.is_none());
}

#[test]
fn issued_receipt_is_stored_and_reported() {
    let mut state = PaymentState::default();
    assert!(state.apply_reply(Some("RCPT-101".to_owned())));
    assert_eq!(state.receipt.as_deref(), Some("RCPT-101"));
}

#[test]
fn refused_payment_leaves_prior_receipt_untouched() {
    let mut state = PaymentState::default();
    state.apply_reply(Some("RCPT-101".to_owned()));

    assert!(!state.apply_reply(None));
    assert_eq!(state.receipt.as_deref(), Some("RCPT-101"));
}

#[test]
fn refused_payment_on_empty_state_stores_nothing() {
    let mut state = PaymentState::default();
    assert!(!state.apply_reply(None));
    assert!(state.receipt.is_none());
}
