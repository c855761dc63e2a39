use super::*;

#[test]
fn validate_booking_form_trims_both_fields() {
    let args = validate_booking_form(" T1 ", " 2025-03-25 10:00 ").expect("args");
    assert_eq!(args.technician_id, "T1");
    assert_eq!(args.slot, "2025-03-25 10:00");
}

#[test]
fn validate_booking_form_requires_technician_id() {
    assert_eq!(
        validate_booking_form("  ", "2025-03-25 10:00"),
        Err("Enter a technician id.")
    );
}

#[test]
fn validate_booking_form_requires_slot() {
    assert_eq!(validate_booking_form("T1", ""), Err("Enter a booking slot."));
}
