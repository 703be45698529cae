//! UI Components
//!
//! Leptos components for the expense dashboard.

pub mod chart;
pub mod expense_form;
pub mod expense_table;
pub mod summary_panel;
pub mod toast;

pub use chart::Chart;
pub use expense_form::ExpenseForm;
pub use expense_table::ExpenseTable;
pub use summary_panel::SummaryPanel;
pub use toast::Toast;
