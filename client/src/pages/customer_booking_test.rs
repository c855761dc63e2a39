use super::*;

#[test]
fn validate_customer_booking_form_builds_contract_args() {
    let args = validate_customer_booking_form(
        " 101 ",
        " T1 ",
        " 2025-03-25 10:00 ",
        " ABC-123 ",
    )
    .expect("args");

    assert_eq!(args.case_id, 101);
    assert_eq!(args.technician_id, "T1");
    assert_eq!(args.slot, "2025-03-25 10:00");
    assert_eq!(args.license_plate, "ABC-123");
}

#[test]
fn validate_customer_booking_form_requires_numeric_case_id() {
    assert_eq!(
        validate_customer_booking_form("first", "T1", "2025-03-25 10:00", "ABC-123"),
        Err("Enter a numeric case id.")
    );
}

#[test]
fn validate_customer_booking_form_requires_each_text_field() {
    assert_eq!(
        validate_customer_booking_form("101", "", "2025-03-25 10:00", "ABC-123"),
        Err("Enter a technician id.")
    );
    assert_eq!(
        validate_customer_booking_form("101", "T1", "  ", "ABC-123"),
        Err("Enter a booking slot.")
    );
    assert_eq!(
        validate_customer_booking_form("101", "T1", "2025-03-25 10:00", ""),
        Err("Enter a license plate.")
    );
}
