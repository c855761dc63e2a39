//! Form-field parsing shared by the page components.
//!
//! The contract takes trimmed text, ordered lists, and fixed-width
//! integers; these helpers do exactly that translation and nothing more.
//! Anything beyond argument typing (slot conflicts, payment checks,
//! identity) is the remote service's concern.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Split a comma-separated field into an ordered list of trimmed items.
///
/// Blank items are dropped, so `"oil change, , tires"` yields two items.
#[must_use]
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Parse a case-id field into the contract's integer form.
#[must_use]
pub fn parse_case_id(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}

/// Parse a rating field, bounded to the contract's 0-5 scale.
#[must_use]
pub fn parse_rating(input: &str) -> Option<u8> {
    let rating: u8 = input.trim().parse().ok()?;
    (rating <= 5).then_some(rating)
}

/// Parse a payment-amount field into the contract's integer form.
#[must_use]
pub fn parse_amount(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}

/// Trim a required text field; `None` when blank.
#[must_use]
pub fn required_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
