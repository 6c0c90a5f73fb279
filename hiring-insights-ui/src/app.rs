//! App Root Component
//!
//! Main application component with global providers.

use leptos::*;

use crate::pages::Dashboard;
use crate::state::global::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <main class="container mx-auto px-4 py-8">
                <Dashboard />
            </main>
        </div>
    }
}
