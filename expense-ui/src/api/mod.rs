//! Expense API
//!
//! The seam between the dashboard and the REST server. The controller only
//! sees [`ExpenseApi`]; the browser build plugs in [`HttpExpenseApi`].

pub mod client;

pub use client::HttpExpenseApi;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::model::{Expense, NewExpense};

/// Failures surfaced by an [`ExpenseApi`] call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The server answered with `{"error": ...}`
    #[error("{0}")]
    Server(String),

    /// Non-2xx status without an error body
    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    Decode(String),
}

#[async_trait(?Send)]
pub trait ExpenseApi {
    /// `GET /api/expenses`
    async fn list_expenses(&self) -> Result<Vec<Expense>, ClientError>;

    /// `POST /api/expenses`
    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, ClientError>;

    /// `DELETE /api/expenses/{id}`
    async fn delete_expense(&self, id: i64) -> Result<(), ClientError>;
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Interpret a response body, whatever its status.
///
/// An object carrying a string `error` is an application error, even on 2xx.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    let ok = (200..300).contains(&status);

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !ok => return Err(ClientError::Status(status)),
        Err(e) => return Err(ClientError::Decode(e.to_string())),
    };

    if let Ok(ErrorBody { error }) = serde_json::from_value::<ErrorBody>(value.clone()) {
        return Err(ClientError::Server(error));
    }

    if !ok {
        return Err(ClientError::Status(status));
    }

    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}
