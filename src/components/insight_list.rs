//! Insight List Component
//!
//! Bullet list of per-section insight strings from the report payload.

use leptos::*;

/// Insight list component; renders nothing when there are no insights
#[component]
pub fn InsightList(
    #[prop(into)]
    insights: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        {move || {
            let items = insights.get();
            if items.is_empty() {
                view! {}.into_view()
            } else {
                view! {
                    <ul class="space-y-2">
                        {items.into_iter().map(|insight| view! {
                            <li class="flex items-start space-x-2 text-gray-300">
                                <span class="text-primary-400 mt-1">"•"</span>
                                <span>{insight}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view()
            }
        }}
    }
}
