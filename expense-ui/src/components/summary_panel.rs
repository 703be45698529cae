//! Summary Panel Component
//!
//! Four summary cards over the full expense list.

use leptos::*;

use crate::format::format_amount;
use crate::state::{today, use_dashboard_state};
use crate::summary::Summary;

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let state = use_dashboard_state();

    // "this month" is read from the clock on every recompute
    let summary = create_memo(move |_| state.expenses.with(|list| Summary::compute(list, today())));

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <SummaryCard
                label="Total Expenses"
                id="total-expenses"
                value=Signal::derive(move || format_amount(summary.get().total))
            />
            <SummaryCard
                label="This Month"
                id="monthly-expenses"
                value=Signal::derive(move || format_amount(summary.get().monthly_total))
            />
            <SummaryCard
                label="Transactions"
                id="total-transactions"
                value=Signal::derive(move || summary.get().transaction_count.to_string())
            />
            <SummaryCard
                label="Categories"
                id="total-categories"
                value=Signal::derive(move || summary.get().category_count.to_string())
            />
        </div>
    }
}

#[component]
fn SummaryCard(
    label: &'static str,
    id: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div id=id class="text-3xl font-bold mt-2">
                {move || value.get()}
            </div>
        </div>
    }
}
