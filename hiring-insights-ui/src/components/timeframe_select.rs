//! Timeframe Selector
//!
//! Dropdown over the four selectable windows. Each option's `selected`
//! property tracks the timeframe signal.

use hiring_insights::Timeframe;
use leptos::*;

use crate::state::use_dashboard_state;

/// Timeframe selection dropdown
#[component]
pub fn TimeframeSelect() -> impl IntoView {
    let state = use_dashboard_state();

    let on_change = move |ev| {
        // Options only carry enumerated values
        if let Ok(timeframe) = event_target_value(&ev).parse::<Timeframe>() {
            state.select(timeframe);
        }
    };

    view! {
        <select
            aria-label="Select timeframe"
            class="w-40 rounded-md border border-gray-300 bg-white px-3 py-2 text-sm"
            on:change=on_change
        >
            {Timeframe::all()
                .iter()
                .map(|tf| {
                    let tf = *tf;
                    view! {
                        <option
                            value=tf.value()
                            prop:selected=move || state.timeframe.get() == tf
                        >
                            {tf.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
