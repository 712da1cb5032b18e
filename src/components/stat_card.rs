//! Stat Card Component
//!
//! Displays a single report stat with its label. Values arrive already
//! formatted, with placeholder text for anything the payload left out.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Label under the value
    label: &'static str,
    /// Pre-formatted value to display
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="text-3xl font-bold">
                {move || value.get()}
            </div>
            <div class="text-gray-400 text-sm mt-1">{label}</div>
        </div>
    }
}
