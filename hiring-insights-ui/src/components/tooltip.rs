//! Tooltip Component
//!
//! Overlay listing each metric's value for the hovered day.

use leptos::*;

use crate::state::use_dashboard_state;

/// Hover tooltip, hidden while nothing is hovered
#[component]
pub fn ChartTooltip() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        {move || {
            state.tooltip().map(|tooltip| {
                view! {
                    <div
                        role="tooltip"
                        class="absolute top-2 right-2 bg-white border border-gray-200 rounded-md shadow px-3 py-2 text-sm pointer-events-none"
                    >
                        <p class="font-medium text-gray-700 mb-1">{tooltip.label.clone()}</p>
                        {tooltip.entries.iter().map(|entry| {
                            view! {
                                <p style=format!("color: {}", entry.color)>{entry.to_string()}</p>
                            }
                        }).collect_view()}
                    </div>
                }
            })
        }}
    }
}
