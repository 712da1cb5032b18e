//! Overview Section
//!
//! Year-at-a-glance stats and the opening narrative.

use leptos::*;

use crate::components::{InsightList, StatCard};
use crate::report::{fmt_count, fmt_percent, fmt_stat, fmt_text};
use crate::state::global::GlobalState;

/// Overview section component
#[component]
pub fn OverviewSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let overview = create_memo(move |_| {
        state
            .report
            .get()
            .and_then(|report| report.overview)
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    label="Total Games"
                    value=Signal::derive(move || fmt_count(overview.get().total_games))
                />
                <StatCard
                    label="Win Rate"
                    value=Signal::derive(move || fmt_percent(overview.get().win_rate))
                />
                <StatCard
                    label="Average KDA"
                    value=Signal::derive(move || fmt_stat(overview.get().avg_kda, 2))
                />
                <StatCard
                    label="Main Role"
                    value=Signal::derive(move || fmt_text(overview.get().main_role.as_deref()))
                />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Season Insights"</h2>
                <InsightList insights=Signal::derive(move || overview.get().insights) />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Your Year on the Rift"</h2>
                <p class="text-gray-300 leading-relaxed">
                    {move || {
                        overview.get().narrative.unwrap_or_else(|| {
                            "Your personalized narrative will appear here...".to_string()
                        })
                    }}
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::report::{fmt_count, fmt_percent, fmt_stat, fmt_text, Overview};

    #[test]
    fn test_missing_overview_renders_placeholders() {
        let overview = Overview::default();
        assert_eq!(fmt_count(overview.total_games), "-");
        assert_eq!(fmt_percent(overview.win_rate), "0%");
        assert_eq!(fmt_stat(overview.avg_kda, 2), "-");
        assert_eq!(fmt_text(overview.main_role.as_deref()), "-");
    }
}
