//! Toast Notification Component
//!
//! Renders the message banner.

use leptos::*;

use crate::state::{use_dashboard_state, Severity};

/// Banner container; empty while no message is showing
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <div id="message" class="fixed top-4 right-4 z-50" role="status">
            {move || {
                state.banner.current().map(|msg| view! {
                    <ToastMessage message=msg.text severity=msg.severity />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    severity: Severity,
) -> impl IntoView {
    let (icon, class) = match severity {
        Severity::Success => ("✓", "message success bg-green-600"),
        Severity::Error => ("✕", "message error bg-red-600"),
    };

    view! {
        <div class=format!(
            "{} flex items-center space-x-3 text-white px-4 py-3 rounded-lg shadow-lg \
             animate-slide-in",
            class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
