//! Display formatting for dates and amounts.

use chrono::NaiveDate;

/// Fixed currency symbol
pub const CURRENCY_SYMBOL: &str = "₹";

/// `2024-01-05` -> `Jan 5, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `12.5` -> `₹12.50`
pub fn format_amount(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// CSS class for a category badge.
pub fn category_class(category: &str) -> String {
    format!("category-{}", category.to_lowercase())
}
