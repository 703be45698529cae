//! Dashboard Page
//!
//! Summary, add-expense form, category chart and expense table, wired to the
//! dashboard controller.

use leptos::*;

use crate::app::Controller;
use crate::components::{Chart, ExpenseForm, ExpenseTable, SummaryPanel};
use crate::model::ExpenseForm as FormInput;

/// Dashboard page component
#[component]
pub fn Dashboard(controller: Controller) -> impl IntoView {
    // Default the form and fetch the list on mount
    let init = controller.clone();
    create_effect(move |_| {
        let controller = init.clone();
        spawn_local(async move { controller.init().await });
    });

    let refresh = controller.clone();
    let on_refresh = move |_| {
        let controller = refresh.clone();
        spawn_local(async move { controller.refresh().await });
    };

    let submit = controller.clone();
    let on_submit = Callback::new(move |form: FormInput| {
        let controller = submit.clone();
        spawn_local(async move { controller.submit(form).await });
    });

    let on_delete = Callback::new(move |id: i64| {
        let controller = controller.clone();
        spawn_local(async move { controller.delete(id).await });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Simple Expense Tracker"</h1>
                    <p class="text-gray-400 mt-1">"Where your money went"</p>
                </div>

                <button
                    id="refresh-btn"
                    on:click=on_refresh
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium
                           transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            <section>
                <SummaryPanel />
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Add Expense"</h2>
                    <ExpenseForm on_submit=on_submit />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Spending by Category"</h2>
                    <Chart />
                </section>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Expenses"</h2>
                <ExpenseTable on_delete=on_delete />
            </section>
        </div>
    }
}
