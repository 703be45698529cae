//! Dashboard State
//!
//! Reactive state behind the dashboard page, provided through context. It is
//! also the page-side [`ExpenseView`] the controller drives.

use leptos::*;

use crate::controller::ExpenseView;
use crate::model::{Expense, ExpenseForm, DATE_FORMAT};
use crate::state::banner::{Banner, Severity};

/// Form field signals
#[derive(Clone, Copy)]
pub struct FormState {
    pub date: RwSignal<String>,
    pub category: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub notes: RwSignal<String>,
}

impl FormState {
    fn new() -> Self {
        Self {
            date: create_rw_signal(String::new()),
            category: create_rw_signal(String::new()),
            amount: create_rw_signal(String::new()),
            notes: create_rw_signal(String::new()),
        }
    }

    /// Current field contents
    pub fn snapshot(&self) -> ExpenseForm {
        ExpenseForm {
            date: self.date.get_untracked(),
            category: self.category.get_untracked(),
            amount: self.amount.get_untracked(),
            notes: self.notes.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Last fetched list, in server order
    pub expenses: RwSignal<Vec<Expense>>,
    pub form: FormState,
    /// A create or delete is in flight
    pub busy: RwSignal<bool>,
    pub banner: Banner,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState {
        expenses: create_rw_signal(Vec::new()),
        form: FormState::new(),
        busy: create_rw_signal(false),
        banner: Banner::new(),
    };

    provide_context(state);
    state
}

/// Fetch the dashboard state from context.
pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>().expect("DashboardState not found")
}

/// Today's date in the browser's time zone.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

impl ExpenseView for DashboardState {
    fn show_expenses(&self, expenses: Vec<Expense>) {
        self.expenses.set(expenses);
    }

    fn notify(&self, message: String, severity: Severity) {
        if severity == Severity::Error {
            web_sys::console::error_1(&message.clone().into());
        }
        self.banner.show(message, severity);
    }

    fn reset_form(&self) {
        self.form.date.set(today().format(DATE_FORMAT).to_string());
        self.form.category.set(String::new());
        self.form.amount.set(String::new());
        self.form.notes.set(String::new());
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
