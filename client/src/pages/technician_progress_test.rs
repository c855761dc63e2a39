use super::*;

#[test]
fn validate_progress_form_builds_contract_args() {
    let args = validate_progress_form(" 101 ", " oil change ").expect("args");
    assert_eq!(args.case_id, 101);
    assert_eq!(args.completed_item, "oil change");
}

#[test]
fn validate_progress_form_requires_numeric_case_id() {
    assert_eq!(
        validate_progress_form("one-oh-one", "oil change"),
        Err("Enter a numeric case id.")
    );
}

#[test]
fn validate_progress_form_requires_completed_item() {
    assert_eq!(
        validate_progress_form("101", "   "),
        Err("Enter the completed item.")
    );
}
