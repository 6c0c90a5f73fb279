//! Legend Component

use hiring_insights::chart::legend_entries;
use leptos::*;

/// Chart legend showing series colors
#[component]
pub fn ChartLegend() -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {legend_entries()
                .into_iter()
                .map(|entry| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", entry.color)
                            />
                            <span class="text-sm text-gray-600">{entry.name}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
