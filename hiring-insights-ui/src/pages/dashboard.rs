//! Dashboard Page
//!
//! Page header plus the hiring insights card: timeframe selector, chart and
//! legend.

use leptos::*;

use crate::components::{Chart, ChartLegend, TimeframeSelect};
use crate::state::use_dashboard_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_dashboard_state();

    // Measure the viewport once mounted, then follow resizes
    create_effect(move |_| {
        state.viewport_width.set(window_width());
    });
    let resize = window_event_listener(ev::resize, move |_| {
        state.viewport_width.set(window_width());
    });
    on_cleanup(move || resize.remove());

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-500 mt-1">"Track your hiring metrics and insights"</p>
            </div>

            // Main chart
            <section class="bg-white rounded-xl shadow-sm p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Hiring Insights"</h2>
                    <TimeframeSelect />
                </div>

                <Chart />
                <ChartLegend />
            </section>
        </div>
    }
}

/// Current `window.innerWidth`, if available
fn window_width() -> Option<f64> {
    window().inner_width().ok().and_then(|w| w.as_f64())
}
