//! Team Impact Section
//!
//! Objective control, kill participation, and teamfight presence.

use leptos::*;

use crate::components::{InsightList, StatCard};
use crate::report::{fmt_percent, fmt_stat};
use crate::state::global::GlobalState;

/// Team impact section component
#[component]
pub fn TeamImpactSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let team = create_memo(move |_| {
        state
            .report
            .get()
            .and_then(|report| report.team_impact)
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    label="Kill Participation"
                    value=Signal::derive(move || fmt_percent(team.get().kill_participation))
                />
                <StatCard
                    label="Objective Control"
                    value=Signal::derive(move || fmt_percent(team.get().objective_control))
                />
                <StatCard
                    label="Teamfight Presence"
                    value=Signal::derive(move || fmt_percent(team.get().teamfight_presence))
                />
                <StatCard
                    label="Support Rating"
                    value=Signal::derive(move || fmt_stat(team.get().support_rating, 1))
                />
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Team Insights"</h2>
                <InsightList insights=Signal::derive(move || team.get().insights) />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Analysis"</h2>
                <p class="text-gray-300 leading-relaxed">
                    {move || {
                        team.get().narrative.unwrap_or_else(|| {
                            "Loading your team impact analysis...".to_string()
                        })
                    }}
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::report::{fmt_percent, fmt_stat, TeamImpact};

    #[test]
    fn test_missing_team_impact_renders_placeholders() {
        let team = TeamImpact::default();
        assert_eq!(fmt_percent(team.kill_participation), "0%");
        assert_eq!(fmt_percent(team.objective_control), "0%");
        assert_eq!(fmt_stat(team.support_rating, 1), "-");
    }
}
