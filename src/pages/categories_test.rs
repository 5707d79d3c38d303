use super::*;

#[test]
fn draft_requires_a_name() {
    assert_eq!(build_category_draft("  ", "income"), Err("Category name is required."));
}

#[test]
fn kind_parses_from_select_values() {
    assert_eq!(parse_kind("income"), MoneyKind::Income);
    assert_eq!(parse_kind("expense"), MoneyKind::Expense);
}

#[test]
fn unknown_kind_falls_back_to_income() {
    assert_eq!(parse_kind(""), MoneyKind::Income);
    assert_eq!(parse_kind("gibberish"), MoneyKind::Income);
}

#[test]
fn draft_keeps_name_and_kind() {
    let draft = build_category_draft(" Donations ", "expense").unwrap();
    assert_eq!(draft.name, "Donations");
    assert_eq!(draft.kind, MoneyKind::Expense);
}
