//! Loading Component
//!
//! Loading spinners for pages and in-flight flows.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Loading panel with a caption, shown while a flow is in flight
#[component]
pub fn LoadingPanel(
    #[prop(into)]
    caption: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-4">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-400 text-sm">{caption}</p>
        </div>
    }
}
