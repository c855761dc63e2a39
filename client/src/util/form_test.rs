use super::*;

// =============================================================
// split_list
// =============================================================

#[test]
fn split_list_trims_each_item() {
    assert_eq!(
        split_list("oil change , tire check,battery"),
        vec!["oil change", "tire check", "battery"]
    );
}

#[test]
fn split_list_preserves_item_order() {
    assert_eq!(split_list("b,a,c"), vec!["b", "a", "c"]);
}

#[test]
fn split_list_drops_blank_items() {
    assert_eq!(split_list("oil change, ,tires,"), vec!["oil change", "tires"]);
}

#[test]
fn split_list_of_blank_input_is_empty() {
    assert!(split_list("   ").is_empty());
    assert!(split_list("").is_empty());
}

// =============================================================
// numeric fields
// =============================================================

#[test]
fn parse_case_id_accepts_trimmed_digits() {
    assert_eq!(parse_case_id(" 101 "), Some(101));
}

#[test]
fn parse_case_id_rejects_garbage() {
    assert_eq!(parse_case_id("abc"), None);
    assert_eq!(parse_case_id("10.5"), None);
    assert_eq!(parse_case_id(""), None);
}

#[test]
fn parse_case_id_rejects_negative_values() {
    assert_eq!(parse_case_id("-1"), None);
}

#[test]
fn parse_rating_accepts_the_contract_scale() {
    assert_eq!(parse_rating("0"), Some(0));
    assert_eq!(parse_rating(" 5 "), Some(5));
}

#[test]
fn parse_rating_rejects_values_above_five() {
    assert_eq!(parse_rating("6"), None);
    assert_eq!(parse_rating("255"), None);
}

#[test]
fn parse_amount_accepts_whole_numbers_only() {
    assert_eq!(parse_amount("100"), Some(100));
    assert_eq!(parse_amount("99.5"), None);
}

// =============================================================
// required_text
// =============================================================

#[test]
fn required_text_trims_surrounding_whitespace() {
    assert_eq!(required_text("  ABC-123  ").as_deref(), Some("ABC-123"));
}

#[test]
fn required_text_rejects_blank_fields() {
    assert_eq!(required_text(""), None);
    assert_eq!(required_text("   "), None);
}
