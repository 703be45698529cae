//! HTTP API Client
//!
//! [`ExpenseApi`] over `gloo-net` against the expense REST API.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::{DeserializeOwned, IgnoredAny};

use super::{interpret, ClientError, ExpenseApi};
use crate::model::{Expense, NewExpense};

/// Same origin as the page
pub const DEFAULT_API_BASE: &str = "";

const API_URL_KEY: &str = "expense_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    url.trim_end_matches('/').to_string()
}

#[derive(Clone, Debug)]
pub struct HttpExpenseApi {
    base: String,
}

impl HttpExpenseApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Client for the base URL configured in local storage.
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base, path)
    }
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    interpret(status, &body)
}

#[async_trait(?Send)]
impl ExpenseApi for HttpExpenseApi {
    async fn list_expenses(&self) -> Result<Vec<Expense>, ClientError> {
        let response = Request::get(&self.url("/expenses"))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read(response).await
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, ClientError> {
        let response = Request::post(&self.url("/expenses"))
            .json(expense)
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read(response).await
    }

    async fn delete_expense(&self, id: i64) -> Result<(), ClientError> {
        let response = Request::delete(&self.url(&format!("/expenses/{}", id)))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        read::<IgnoredAny>(response).await.map(|_| ())
    }
}
