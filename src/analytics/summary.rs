use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::budget::{Transaction, TransactionKind};

use super::SummaryPeriod;

/// Period-bounded totals derived from the transaction log.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub savings: f64,
    /// Savings as a percentage of income; zero when there is no income.
    pub savings_rate: f64,
    /// Number of transactions inside the window.
    pub transactions: usize,
    pub period: SummaryPeriod,
}

/// Sums income and expenses for transactions dated on or after the period
/// start. There is no upper bound; future-dated entries count as well.
pub fn financial_summary(
    transactions: &[Transaction],
    period: SummaryPeriod,
    today: NaiveDate,
) -> FinancialSummary {
    let start = period.start(today);
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut count = 0usize;
    for transaction in transactions.iter().filter(|t| t.date >= start) {
        count += 1;
        match transaction.kind {
            TransactionKind::Income => total_income += transaction.amount,
            TransactionKind::Expense => total_expenses += transaction.amount,
        }
    }
    let savings = total_income - total_expenses;
    let savings_rate = if total_income > 0.0 {
        savings / total_income * 100.0
    } else {
        0.0
    };
    FinancialSummary {
        total_income,
        total_expenses,
        savings,
        savings_rate,
        transactions: count,
        period,
    }
}

/// One expense category's current-month total.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Groups the current calendar month's expenses by category, sorted
/// descending by amount. The sort is stable, so categories tied on amount
/// keep first-encounter order.
pub fn category_breakdown(transactions: &[Transaction], today: NaiveDate) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for transaction in transactions {
        if !transaction.is_expense()
            || transaction.date.year() != today.year()
            || transaction.date.month() != today.month()
        {
            continue;
        }
        match totals.iter_mut().find(|t| t.category == transaction.category) {
            Some(entry) => entry.amount += transaction.amount,
            None => totals.push(CategoryTotal {
                category: transaction.category.clone(),
                amount: transaction.amount,
            }),
        }
    }
    totals.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    totals
}
