//! App Root Component
//!
//! Builds the HTTP client and dashboard state and hands both to the
//! controller the page runs on.

use leptos::*;
use std::rc::Rc;

use crate::api::HttpExpenseApi;
use crate::components::Toast;
use crate::controller::DashboardController;
use crate::pages::Dashboard;
use crate::state::{provide_dashboard_state, DashboardState};

/// The controller as wired in the browser
pub type Controller = Rc<DashboardController<HttpExpenseApi, DashboardState>>;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_dashboard_state();

    let api = HttpExpenseApi::from_storage();
    let controller: Controller = Rc::new(DashboardController::new(api, state));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <main class="flex-1 container mx-auto px-4 py-8">
                <Dashboard controller=controller />
            </main>

            // Banner
            <Toast />
        </div>
    }
}
