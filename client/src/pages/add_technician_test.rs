use super::*;

#[test]
fn validate_technician_form_builds_contract_args() {
    let args = validate_technician_form(
        " T2 ",
        " Rowan ",
        "engine repair, electrical",
        " 4 ",
        "2025-03-26 09:00, 2025-03-26 10:00",
    )
    .expect("args");

    assert_eq!(args.id, "T2");
    assert_eq!(args.name, "Rowan");
    assert_eq!(args.qualifications, vec!["engine repair", "electrical"]);
    assert_eq!(args.rating, 4);
    assert_eq!(
        args.available_slots,
        vec!["2025-03-26 09:00", "2025-03-26 10:00"]
    );
}

#[test]
fn validate_technician_form_requires_id_and_name() {
    assert_eq!(
        validate_technician_form("", "Rowan", "engine", "4", "slot"),
        Err("Enter a technician id.")
    );
    assert_eq!(
        validate_technician_form("T2", " ", "engine", "4", "slot"),
        Err("Enter a name.")
    );
}

#[test]
fn validate_technician_form_requires_a_qualification() {
    assert_eq!(
        validate_technician_form("T2", "Rowan", " , ", "4", "slot"),
        Err("Enter at least one qualification.")
    );
}

#[test]
fn validate_technician_form_bounds_the_rating() {
    assert_eq!(
        validate_technician_form("T2", "Rowan", "engine", "6", "slot"),
        Err("Enter a rating from 0 to 5.")
    );
    assert_eq!(
        validate_technician_form("T2", "Rowan", "engine", "four", "slot"),
        Err("Enter a rating from 0 to 5.")
    );
}

#[test]
fn validate_technician_form_requires_a_slot() {
    assert_eq!(
        validate_technician_form("T2", "Rowan", "engine", "4", ""),
        Err("Enter at least one available slot.")
    );
}
