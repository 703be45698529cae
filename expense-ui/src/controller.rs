//! Dashboard Controller
//!
//! Page logic for the expense dashboard: initial load, manual refresh, form
//! submission and deletion. Talks to the server through [`ExpenseApi`] and
//! to the page through [`ExpenseView`], so it runs the same against the
//! browser and against in-memory doubles.

use std::cell::Cell;

use crate::api::{ClientError, ExpenseApi};
use crate::model::{Expense, ExpenseForm};
use crate::state::banner::Severity;

pub const MSG_ADDED: &str = "Expense added successfully!";
pub const MSG_DELETED: &str = "Expense deleted successfully!";
pub const MSG_REFRESHED: &str = "Data refreshed successfully!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this expense?";

/// What the controller needs from the page
pub trait ExpenseView {
    /// Replace the full list behind the table, summary and chart.
    fn show_expenses(&self, expenses: Vec<Expense>);

    fn notify(&self, message: String, severity: Severity);

    /// Clear the form and set its date to today.
    fn reset_form(&self);

    /// Enable or disable the submit and delete buttons.
    fn set_busy(&self, busy: bool);

    /// Ask the user to confirm; `false` cancels.
    fn confirm(&self, message: &str) -> bool;
}

pub struct DashboardController<A, V> {
    api: A,
    view: V,
    busy: Cell<bool>,
}

impl<A: ExpenseApi, V: ExpenseView> DashboardController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            busy: Cell::new(false),
        }
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Page start: default the form, then fetch everything.
    pub async fn init(&self) {
        self.view.reset_form();
        self.load().await;
    }

    /// Fetch the list and hand it to the view. Leaves the view untouched
    /// on failure.
    pub async fn load(&self) -> bool {
        match self.api.list_expenses().await {
            Ok(expenses) => {
                self.view.show_expenses(expenses);
                true
            }
            Err(e) => {
                self.view
                    .notify(format!("Error loading expenses: {}", e), Severity::Error);
                false
            }
        }
    }

    /// Refresh button.
    pub async fn refresh(&self) {
        self.view.notify(MSG_REFRESHED.to_string(), Severity::Success);
        self.load().await;
    }

    /// Validate and submit the form. Ignored while another change is in flight.
    pub async fn submit(&self, form: ExpenseForm) {
        if self.is_busy() {
            return;
        }

        let expense = match form.validate() {
            Ok(expense) => expense,
            Err(e) => {
                self.view.notify(e.to_string(), Severity::Error);
                return;
            }
        };

        self.set_busy(true);
        let result = self.api.create_expense(&expense).await;
        self.set_busy(false);

        match result {
            Ok(_) => {
                self.view.notify(MSG_ADDED.to_string(), Severity::Success);
                self.view.reset_form();
                self.load().await;
            }
            Err(e) => self.report_failure("Error adding expense", e),
        }
    }

    /// Delete after confirmation. Ignored while another change is in flight.
    pub async fn delete(&self, id: i64) {
        if self.is_busy() || !self.view.confirm(CONFIRM_DELETE) {
            return;
        }

        self.set_busy(true);
        let result = self.api.delete_expense(id).await;
        self.set_busy(false);

        match result {
            Ok(()) => {
                self.view.notify(MSG_DELETED.to_string(), Severity::Success);
                self.load().await;
            }
            Err(e) => self.report_failure("Error deleting expense", e),
        }
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
        self.view.set_busy(busy);
    }

    /// Server messages are shown as-is, everything else gets a prefix.
    fn report_failure(&self, prefix: &str, error: ClientError) {
        let message = match error {
            ClientError::Server(message) => message,
            other => format!("{}: {}", prefix, other),
        };
        self.view.notify(message, Severity::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewExpense;
    use crate::summary::Summary;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    /// In-memory server
    #[derive(Default)]
    struct FakeApi {
        expenses: RefCell<Vec<Expense>>,
        next_id: Cell<i64>,
        created: RefCell<Vec<NewExpense>>,
        deleted: RefCell<Vec<i64>>,
        fail_list: Cell<bool>,
        fail_create: RefCell<Option<ClientError>>,
    }

    impl FakeApi {
        fn seeded(rows: &[(&str, &str, f64)]) -> Self {
            let api = FakeApi::default();
            for (date, category, amount) in rows {
                api.insert(NewExpense {
                    date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                    category: category.to_string(),
                    amount: *amount,
                    notes: None,
                });
            }
            api
        }

        fn insert(&self, new: NewExpense) -> Expense {
            self.next_id.set(self.next_id.get() + 1);
            let expense = Expense {
                id: self.next_id.get(),
                date: new.date,
                category: new.category,
                amount: new.amount,
                notes: new.notes,
            };
            self.expenses.borrow_mut().push(expense.clone());
            expense
        }
    }

    #[async_trait(?Send)]
    impl ExpenseApi for FakeApi {
        async fn list_expenses(&self) -> Result<Vec<Expense>, ClientError> {
            tokio::task::yield_now().await;
            if self.fail_list.get() {
                return Err(ClientError::Network("connection refused".into()));
            }
            Ok(self.expenses.borrow().clone())
        }

        async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, ClientError> {
            tokio::task::yield_now().await;
            self.created.borrow_mut().push(expense.clone());
            if let Some(err) = self.fail_create.borrow().clone() {
                return Err(err);
            }
            Ok(self.insert(expense.clone()))
        }

        async fn delete_expense(&self, id: i64) -> Result<(), ClientError> {
            tokio::task::yield_now().await;
            self.deleted.borrow_mut().push(id);
            let mut expenses = self.expenses.borrow_mut();
            let before = expenses.len();
            expenses.retain(|e| e.id != id);
            if expenses.len() == before {
                return Err(ClientError::Server("Expense not found".into()));
            }
            Ok(())
        }
    }

    /// Records everything the controller asks of the page
    #[derive(Default)]
    struct RecordingView {
        shown: RefCell<Option<Vec<Expense>>>,
        messages: RefCell<Vec<(String, Severity)>>,
        resets: Cell<usize>,
        busy_changes: RefCell<Vec<bool>>,
        answer: Cell<bool>,
        confirmations: Cell<usize>,
    }

    impl RecordingView {
        fn confirming() -> Self {
            let view = Self::default();
            view.answer.set(true);
            view
        }

        fn last_message(&self) -> Option<(String, Severity)> {
            self.messages.borrow().last().cloned()
        }

        fn shown_ids(&self) -> Vec<i64> {
            self.shown
                .borrow()
                .as_ref()
                .map(|list| crate::model::newest_first(list).iter().map(|e| e.id).collect())
                .unwrap_or_default()
        }
    }

    impl ExpenseView for RecordingView {
        fn show_expenses(&self, expenses: Vec<Expense>) {
            *self.shown.borrow_mut() = Some(expenses);
        }

        fn notify(&self, message: String, severity: Severity) {
            self.messages.borrow_mut().push((message, severity));
        }

        fn reset_form(&self) {
            self.resets.set(self.resets.get() + 1);
        }

        fn set_busy(&self, busy: bool) {
            self.busy_changes.borrow_mut().push(busy);
        }

        fn confirm(&self, message: &str) -> bool {
            assert_eq!(message, CONFIRM_DELETE);
            self.confirmations.set(self.confirmations.get() + 1);
            self.answer.get()
        }
    }

    fn form(date: &str, category: &str, amount: &str) -> ExpenseForm {
        ExpenseForm {
            date: date.to_string(),
            category: category.to_string(),
            amount: amount.to_string(),
            notes: String::new(),
        }
    }

    fn sample_api() -> FakeApi {
        FakeApi::seeded(&[
            ("2024-01-05", "Food", 12.50),
            ("2024-02-01", "Food", 7.00),
            ("2024-01-20", "Transport", 20.00),
        ])
    }

    #[tokio::test]
    async fn test_init_resets_form_and_loads() {
        let controller = DashboardController::new(sample_api(), RecordingView::default());
        controller.init().await;

        let view = controller.view();
        assert_eq!(view.resets.get(), 1);
        assert_eq!(view.shown_ids(), vec![2, 3, 1]);
        assert!(view.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_refresh_updates_summary() {
        let controller = DashboardController::new(sample_api(), RecordingView::confirming());
        controller.init().await;

        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let summary = Summary::compute(controller.view().shown.borrow().as_ref().unwrap(), today);
        assert!((summary.total - 39.5).abs() < 1e-9);
        assert_eq!(summary.category_count, 2);

        // the 2024-02-01 record
        controller.delete(2).await;

        let view = controller.view();
        assert_eq!(view.shown_ids(), vec![3, 1]);
        assert_eq!(
            view.last_message(),
            Some((MSG_DELETED.to_string(), Severity::Success))
        );

        let summary = Summary::compute(view.shown.borrow().as_ref().unwrap(), today);
        assert!((summary.total - 32.5).abs() < 1e-9);
        assert_eq!(summary.transaction_count, 2);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let controller = DashboardController::new(sample_api(), RecordingView::default());
        controller.delete(1).await;

        assert_eq!(controller.view().confirmations.get(), 1);
        assert!(controller.api.deleted.borrow().is_empty());
        assert!(controller.view().messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_shows_server_message() {
        let controller = DashboardController::new(sample_api(), RecordingView::confirming());
        controller.delete(99).await;

        assert_eq!(
            controller.view().last_message(),
            Some(("Expense not found".to_string(), Severity::Error))
        );
        assert!(controller.view().shown.borrow().is_none());
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_submit_success() {
        let controller = DashboardController::new(FakeApi::default(), RecordingView::default());

        let mut input = form("2024-03-02", "Bills", "99.90");
        input.notes = "  electricity ".to_string();
        controller.submit(input).await;

        let created = controller.api.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].amount, 99.9);
        assert_eq!(created[0].notes.as_deref(), Some("electricity"));

        let view = controller.view();
        assert_eq!(view.resets.get(), 1);
        assert_eq!(view.shown_ids(), vec![1]);
        assert_eq!(view.messages.borrow()[0], (MSG_ADDED.to_string(), Severity::Success));
        assert_eq!(*view.busy_changes.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_invalid_amount_never_reaches_api() {
        let controller = DashboardController::new(FakeApi::default(), RecordingView::default());

        for amount in ["", "abc", "0", "-3"] {
            controller.submit(form("2024-03-02", "Food", amount)).await;
        }

        assert!(controller.api.created.borrow().is_empty());
        assert!(controller
            .view()
            .messages
            .borrow()
            .iter()
            .all(|(m, s)| m == "Please enter a valid amount" && *s == Severity::Error));
        assert_eq!(controller.view().resets.get(), 0);
    }

    #[tokio::test]
    async fn test_submit_server_error_shown_verbatim() {
        let api = FakeApi::default();
        *api.fail_create.borrow_mut() = Some(ClientError::Server("Missing required fields".into()));
        let controller = DashboardController::new(api, RecordingView::default());

        controller.submit(form("2024-03-02", "Food", "5")).await;

        let view = controller.view();
        assert_eq!(
            view.last_message(),
            Some(("Missing required fields".to_string(), Severity::Error))
        );
        assert_eq!(view.resets.get(), 0);
        assert!(view.shown.borrow().is_none());
    }

    #[tokio::test]
    async fn test_submit_transport_error_is_prefixed() {
        let api = FakeApi::default();
        *api.fail_create.borrow_mut() = Some(ClientError::Network("timed out".into()));
        let controller = DashboardController::new(api, RecordingView::default());

        controller.submit(form("2024-03-02", "Food", "5")).await;

        assert_eq!(
            controller.view().last_message(),
            Some(("Error adding expense: timed out".to_string(), Severity::Error))
        );
    }

    #[tokio::test]
    async fn test_busy_guard_ignores_second_submit() {
        let controller = DashboardController::new(FakeApi::default(), RecordingView::default());

        tokio::join!(
            controller.submit(form("2024-03-02", "Food", "5")),
            controller.submit(form("2024-03-03", "Food", "6")),
        );

        assert_eq!(controller.api.created.borrow().len(), 1);
        assert_eq!(controller.view().shown_ids(), vec![1]);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_busy_guard_ignores_delete_during_submit() {
        let controller = DashboardController::new(sample_api(), RecordingView::confirming());

        tokio::join!(
            controller.submit(form("2024-03-02", "Food", "5")),
            controller.delete(1),
        );

        assert_eq!(controller.api.created.borrow().len(), 1);
        assert!(controller.api.deleted.borrow().is_empty());
        assert_eq!(controller.view().confirmations.get(), 0);
        assert_eq!(controller.view().shown_ids(), vec![4, 2, 3, 1]);
    }

    #[tokio::test]
    async fn test_refresh_failure_replaces_success_banner() {
        let api = sample_api();
        api.fail_list.set(true);
        let controller = DashboardController::new(api, RecordingView::default());

        controller.refresh().await;

        let messages = controller.view().messages.borrow().clone();
        assert_eq!(
            messages,
            vec![
                (MSG_REFRESHED.to_string(), Severity::Success),
                (
                    "Error loading expenses: connection refused".to_string(),
                    Severity::Error
                ),
            ]
        );
        assert!(controller.view().shown.borrow().is_none());
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let controller = DashboardController::new(sample_api(), RecordingView::default());
        controller.refresh().await;

        assert_eq!(
            controller.view().last_message(),
            Some((MSG_REFRESHED.to_string(), Severity::Success))
        );
        assert_eq!(controller.view().shown_ids(), vec![2, 3, 1]);
    }
}
