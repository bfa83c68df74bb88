use super::*;

// =============================================================
// Description truncation
// =============================================================

#[test]
fn short_description_still_gets_ellipsis() {
    assert_eq!(truncate_description("short"), "short...");
}

#[test]
fn empty_description_renders_bare_ellipsis() {
    assert_eq!(truncate_description(""), "...");
}

#[test]
fn exactly_fifty_characters_pass_through_with_ellipsis() {
    let description = "a".repeat(50);
    assert_eq!(truncate_description(&description), format!("{description}..."));
}

#[test]
fn long_description_is_cut_at_fifty_characters() {
    let description = format!("{}{}", "b".repeat(50), "tail that must not appear");
    let rendered = truncate_description(&description);
    assert_eq!(rendered, format!("{}...", "b".repeat(50)));
    assert_eq!(rendered.chars().count(), 53);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let description = "é".repeat(60);
    let rendered = truncate_description(&description);
    assert_eq!(rendered, format!("{}...", "é".repeat(50)));
}

// =============================================================
// Price formatting
// =============================================================

#[test]
fn price_text_contains_currency_prefix_and_value() {
    assert_eq!(display_price(9.99), "$9.99");
}

#[test]
fn whole_number_price_drops_trailing_zeroes() {
    assert_eq!(display_price(10.0), "$10");
}
