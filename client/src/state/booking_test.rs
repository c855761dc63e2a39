use super::*;

#[test]
fn booking_state_default_has_no_token() {
    let state = BookingState::default();
    assert!(state.nft_token.is_none());
}

#[test]
fn issued_token_is_stored_and_reported() {
    let mut state = BookingState::default();
    assert!(state.apply_reply(Some("NFT-101-T1".to_owned())));
    assert_eq!(state.nft_token.as_deref(), Some("NFT-101-T1"));
}

#[test]
fn refused_booking_keeps_the_prior_token() {
    let mut state = BookingState::default();
    state.apply_reply(Some("NFT-101-T1".to_owned()));

    assert!(!state.apply_reply(None));
    assert_eq!(state.nft_token.as_deref(), Some("NFT-101-T1"));
}

#[test]
fn later_token_replaces_the_earlier_one() {
    let mut state = BookingState::default();
    state.apply_reply(Some("NFT-101-T1".to_owned()));
    state.apply_reply(Some("NFT-202-T2".to_owned()));
    assert_eq!(state.nft_token.as_deref(), Some("NFT-202-T2"));
}
