use super::*;

fn tx(kind: MoneyKind, amount: f64) -> Transaction {
    Transaction {
        id: "t-1".to_owned(),
        concept: "test".to_owned(),
        amount,
        kind,
        category_id: None,
        date: "2026-01-01".to_owned(),
    }
}

// =============================================================
// Totals
// =============================================================

#[test]
fn empty_list_sums_to_zero() {
    let totals = summarize(&[]);
    assert_eq!(totals, Totals::default());
    assert!((totals.balance()).abs() < f64::EPSILON);
}

#[test]
fn income_and_expense_accumulate_separately() {
    let totals = summarize(&[
        tx(MoneyKind::Income, 100.0),
        tx(MoneyKind::Income, 50.5),
        tx(MoneyKind::Expense, 30.0),
    ]);
    assert!((totals.income - 150.5).abs() < f64::EPSILON);
    assert!((totals.expense - 30.0).abs() < f64::EPSILON);
    assert!((totals.balance() - 120.5).abs() < f64::EPSILON);
}

#[test]
fn balance_can_go_negative() {
    let totals = summarize(&[tx(MoneyKind::Income, 10.0), tx(MoneyKind::Expense, 25.0)]);
    assert!((totals.balance() + 15.0).abs() < f64::EPSILON);
}

// =============================================================
// Display
// =============================================================

#[test]
fn money_renders_two_decimals() {
    assert_eq!(money(1234.5), "1234.50");
    assert_eq!(money(0.0), "0.00");
}

#[test]
fn signed_money_negates_expenses() {
    assert_eq!(signed_money(MoneyKind::Income, 250.0), "250.00");
    assert_eq!(signed_money(MoneyKind::Expense, 250.0), "-250.00");
}
