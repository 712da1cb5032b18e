//! Performance Section
//!
//! Per-game combat and farming averages.

use leptos::*;

use crate::components::{InsightList, StatCard};
use crate::report::fmt_stat;
use crate::state::global::GlobalState;

/// Performance section component
#[component]
pub fn PerformanceSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let perf = create_memo(move |_| {
        state
            .report
            .get()
            .and_then(|report| report.performance)
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                <StatCard
                    label="Avg Kills"
                    value=Signal::derive(move || fmt_stat(perf.get().avg_kills, 1))
                />
                <StatCard
                    label="Avg Assists"
                    value=Signal::derive(move || fmt_stat(perf.get().avg_assists, 1))
                />
                <StatCard
                    label="Avg Deaths"
                    value=Signal::derive(move || fmt_stat(perf.get().avg_deaths, 1))
                />
                <StatCard
                    label="CS / Min"
                    value=Signal::derive(move || fmt_stat(perf.get().cs_per_minute, 1))
                />
                <StatCard
                    label="Vision Score"
                    value=Signal::derive(move || fmt_stat(perf.get().vision_score, 1))
                />
                <StatCard
                    label="Damage / Min"
                    value=Signal::derive(move || fmt_stat(perf.get().damage_per_minute, 0))
                />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Performance Insights"</h2>
                <InsightList insights=Signal::derive(move || perf.get().insights) />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Analysis"</h2>
                <p class="text-gray-300 leading-relaxed">
                    {move || {
                        perf.get().narrative.unwrap_or_else(|| {
                            "Loading your performance analysis...".to_string()
                        })
                    }}
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::report::{fmt_stat, Performance};

    #[test]
    fn test_missing_performance_renders_placeholders() {
        let perf = Performance::default();
        assert_eq!(fmt_stat(perf.avg_kills, 1), "-");
        assert_eq!(fmt_stat(perf.cs_per_minute, 1), "-");
        assert_eq!(fmt_stat(perf.damage_per_minute, 0), "-");
    }
}
