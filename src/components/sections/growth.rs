//! Growth Section
//!
//! Year-over-year improvement stats.

use leptos::*;

use crate::components::{InsightList, StatCard};
use crate::report::{fmt_improvement, fmt_percent, fmt_text};
use crate::state::global::GlobalState;

/// Growth section component
#[component]
pub fn GrowthSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let growth = create_memo(move |_| {
        state
            .report
            .get()
            .and_then(|report| report.growth)
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    label="KDA Improvement"
                    value=Signal::derive(move || fmt_improvement(growth.get().kda_improvement))
                />
                <StatCard
                    label="Rank Progress"
                    value=Signal::derive(move || {
                        fmt_text(growth.get().rank_progress.as_deref())
                    })
                />
                <StatCard
                    label="New Champions"
                    value=Signal::derive(move || {
                        format!("+{}", growth.get().new_champions.unwrap_or(0))
                    })
                />
                <StatCard
                    label="Consistency"
                    value=Signal::derive(move || fmt_percent(growth.get().consistency))
                />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Growth Insights"</h2>
                <InsightList insights=Signal::derive(move || growth.get().insights) />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Analysis"</h2>
                <p class="text-gray-300 leading-relaxed">
                    {move || {
                        growth.get().narrative.unwrap_or_else(|| {
                            "Loading your growth analysis...".to_string()
                        })
                    }}
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::report::{fmt_improvement, fmt_text, Growth};

    #[test]
    fn test_missing_growth_renders_placeholders() {
        let growth = Growth::default();
        assert_eq!(fmt_improvement(growth.kda_improvement), "+0%");
        assert_eq!(fmt_text(growth.rank_progress.as_deref()), "-");
        assert_eq!(format!("+{}", growth.new_champions.unwrap_or(0)), "+0");
    }
}
