//! Expense Table Component
//!
//! Newest-first table of expenses with a delete button per row.

use leptos::*;

use crate::format::{category_class, format_amount, format_date};
use crate::model::{newest_first, Expense};
use crate::state::use_dashboard_state;

const COLUMNS: usize = 5;

const EMPTY_MESSAGE: &str = "No expenses found";

/// Display-ready contents of one table row
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    /// Id the delete button acts on
    pub id: i64,
    pub date: String,
    pub category: String,
    pub badge_class: String,
    pub amount: String,
    pub notes: String,
}

impl From<&Expense> for TableRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            date: format_date(expense.date),
            category: expense.category.clone(),
            badge_class: format!("category-badge {}", category_class(&expense.category)),
            amount: format_amount(expense.amount),
            notes: expense.notes().unwrap_or("-").to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableBody {
    /// One placeholder row spanning every column
    Empty { message: &'static str, colspan: usize },
    Rows(Vec<TableRow>),
}

/// Rows for the table body, newest first.
pub fn table_body(expenses: &[Expense]) -> TableBody {
    if expenses.is_empty() {
        return TableBody::Empty {
            message: EMPTY_MESSAGE,
            colspan: COLUMNS,
        };
    }

    TableBody::Rows(newest_first(expenses).iter().map(TableRow::from).collect())
}

#[component]
pub fn ExpenseTable(
    /// Called with the record id when a delete button is pressed
    #[prop(into)]
    on_delete: Callback<i64>,
) -> impl IntoView {
    let state = use_dashboard_state();

    let body = create_memo(move |_| state.expenses.with(|list| table_body(list)));

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-left">
                <thead class="text-gray-400 text-sm border-b border-gray-700">
                    <tr>
                        <th class="py-2">"Date"</th>
                        <th class="py-2">"Category"</th>
                        <th class="py-2">"Amount"</th>
                        <th class="py-2">"Notes"</th>
                        <th class="py-2">"Action"</th>
                    </tr>
                </thead>
                <tbody id="expenses-table-body">
                    {move || match body.get() {
                        TableBody::Empty { message, colspan } => view! {
                            <tr>
                                <td colspan=colspan class="py-6 text-center text-gray-400">
                                    {message}
                                </td>
                            </tr>
                        }.into_view(),
                        TableBody::Rows(rows) => rows
                            .into_iter()
                            .map(|row| view! { <ExpenseRow row=row on_delete=on_delete /> })
                            .collect_view(),
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ExpenseRow(row: TableRow, on_delete: Callback<i64>) -> impl IntoView {
    let state = use_dashboard_state();
    let id = row.id;

    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <td class="py-2">{row.date}</td>
            <td class="py-2">
                <span class=row.badge_class>{row.category}</span>
            </td>
            <td class="py-2 font-semibold">{row.amount}</td>
            <td class="py-2 text-gray-300">{row.notes}</td>
            <td class="py-2">
                <button
                    class="delete-btn px-3 py-1 bg-red-600 hover:bg-red-700 disabled:bg-gray-600
                           rounded text-sm transition-colors"
                    data-id=id
                    disabled=move || state.busy.get()
                    on:click=move |_| on_delete.call(id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
