use super::*;

#[test]
fn validate_payment_form_builds_contract_args() {
    let args = validate_payment_form(" 101 ", " 100 ").expect("args");
    assert_eq!(args.case_id, 101);
    assert_eq!(args.amount, 100);
}

#[test]
fn validate_payment_form_requires_numeric_case_id() {
    assert_eq!(
        validate_payment_form("abc", "100"),
        Err("Enter a numeric case id.")
    );
}

#[test]
fn validate_payment_form_requires_whole_amount() {
    assert_eq!(
        validate_payment_form("101", "99.5"),
        Err("Enter a whole payment amount.")
    );
    assert_eq!(
        validate_payment_form("101", ""),
        Err("Enter a whole payment amount.")
    );
}
