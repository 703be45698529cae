//! Expense Form Component
//!
//! Form for adding an expense. Validation happens in the controller.

use leptos::*;

use crate::model::ExpenseForm as FormInput;
use crate::state::use_dashboard_state;

/// Categories offered in the picker
pub const CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Shopping",
    "Entertainment",
    "Bills",
    "Health",
    "Education",
    "Other",
];

#[component]
pub fn ExpenseForm(
    /// Called with the raw field contents on submit
    #[prop(into)]
    on_submit: Callback<FormInput>,
) -> impl IntoView {
    let state = use_dashboard_state();
    let form = state.form;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(form.snapshot());
    };

    view! {
        <form id="expense-form" on:submit=submit class="space-y-4">
            <div>
                <label for="date" class="block text-sm text-gray-400 mb-2">"Date"</label>
                <input
                    id="date"
                    type="date"
                    prop:value=move || form.date.get()
                    on:input=move |ev| form.date.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label for="category" class="block text-sm text-gray-400 mb-2">"Category"</label>
                <select
                    id="category"
                    on:change=move |ev| form.category.set(event_target_value(&ev))
                    prop:value=move || form.category.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"Select a category"</option>
                    {CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c>{c}</option> })
                        .collect_view()}
                </select>
            </div>

            <div>
                <label for="amount" class="block text-sm text-gray-400 mb-2">"Amount (₹)"</label>
                <input
                    id="amount"
                    type="number"
                    min="0.01"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || form.amount.get()
                    on:input=move |ev| form.amount.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label for="notes" class="block text-sm text-gray-400 mb-2">"Notes (optional)"</label>
                <input
                    id="notes"
                    type="text"
                    prop:value=move || form.notes.get()
                    on:input=move |ev| form.notes.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || state.busy.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors flex items-center justify-center space-x-2"
            >
                {move || if state.busy.get() {
                    view! {
                        <div class="loading-spinner w-5 h-5" />
                        <span>"Saving..."</span>
                    }.into_view()
                } else {
                    view! {
                        <span>"Add Expense"</span>
                    }.into_view()
                }}
            </button>
        </form>
    }
}
