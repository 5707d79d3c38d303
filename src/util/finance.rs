//! Transaction aggregation and money display helpers.

#[cfg(test)]
#[path = "finance_test.rs"]
mod finance_test;

use crate::net::types::{MoneyKind, Transaction};

/// Aggregated income and expense across a transaction list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    /// Net balance: income minus expense.
    #[must_use]
    pub fn balance(self) -> f64 {
        self.income - self.expense
    }
}

/// Sum the listed transactions by kind. Amounts are stored unsigned; the
/// kind carries the direction.
#[must_use]
pub fn summarize(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for tx in transactions {
        match tx.kind {
            MoneyKind::Income => totals.income += tx.amount,
            MoneyKind::Expense => totals.expense += tx.amount,
        }
    }
    totals
}

/// Fixed two-decimal money display.
#[must_use]
pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Signed money display for table rows: expenses render negative.
#[must_use]
pub fn signed_money(kind: MoneyKind, amount: f64) -> String {
    match kind {
        MoneyKind::Income => money(amount),
        MoneyKind::Expense => money(-amount),
    }
}
