//! Expense Records
//!
//! Wire types shared by the API client, the controller and the views, plus
//! validation of the add-expense form.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Wire format of `date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An expense as returned by `GET /api/expenses`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Expense {
    /// Notes for display; `None` when absent or empty.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}

/// Body of `POST /api/expenses`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub notes: Option<String>,
}

/// Accepts `12.5` as well as `"12.5"`.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount {:?}", s))),
    }
}

/// Order for display: newest date first, equal dates keep their input order.
pub fn newest_first(expenses: &[Expense]) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Form validation failures, shown verbatim in the banner
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid date")]
    InvalidDate,

    #[error("Please choose a category")]
    MissingCategory,

    #[error("Please enter a valid amount")]
    InvalidAmount,
}

/// Raw contents of the add-expense form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub notes: String,
}

impl ExpenseForm {
    /// Turn the raw inputs into a request body.
    pub fn validate(&self) -> Result<NewExpense, FormError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate)?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(FormError::MissingCategory);
        }

        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(FormError::InvalidAmount);
        }

        let notes = self.notes.trim();

        Ok(NewExpense {
            date,
            category: category.to_string(),
            amount,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}
