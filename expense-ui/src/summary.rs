//! Summary Statistics
//!
//! Aggregates shown above the expense table, recomputed from the full list
//! on every refresh.

use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

use crate::model::Expense;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Sum of all amounts
    pub total: f64,
    /// Sum of amounts dated in the current month
    pub monthly_total: f64,
    pub transaction_count: usize,
    /// Distinct category labels, compared exactly
    pub category_count: usize,
}

impl Summary {
    pub fn compute(expenses: &[Expense], today: NaiveDate) -> Self {
        let monthly_total = expenses
            .iter()
            .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
            .map(|e| e.amount)
            .sum();

        let categories: HashSet<&str> = expenses.iter().map(|e| e.category.as_str()).collect();

        Self {
            total: expenses.iter().map(|e| e.amount).sum(),
            monthly_total,
            transaction_count: expenses.len(),
            category_count: categories.len(),
        }
    }
}
