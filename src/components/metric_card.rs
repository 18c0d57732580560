//! Metric Card Component
//!
//! Displays one aggregated metric of the summary row.

use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Card title
    title: &'static str,
    /// Aggregated value for the selected period
    value: u32,
    /// Caption under the value
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{title}</span>
            </div>

            <div class="text-3xl font-bold mt-2">{value}</div>

            <p class="text-xs text-gray-500 mt-1">{subtitle}</p>
        </div>
    }
}
