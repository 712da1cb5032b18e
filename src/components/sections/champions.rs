//! Champions Section
//!
//! Cards for the year's most-played champions; the first card is featured.

use leptos::*;

use crate::components::InsightList;
use crate::report::{fmt_count, fmt_percent, fmt_stat, Champion};
use crate::state::global::GlobalState;

/// Champions section component
#[component]
pub fn ChampionsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let champions = create_memo(move |_| {
        state
            .report
            .get()
            .and_then(|report| report.champions)
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    let top = champions.get().top_champions;
                    if top.is_empty() {
                        view! {
                            <p class="col-span-full text-center text-gray-400">
                                "No champion data available"
                            </p>
                        }.into_view()
                    } else {
                        top.into_iter().enumerate().map(|(index, champ)| view! {
                            <ChampionCard champ=champ featured={index == 0} />
                        }).collect_view()
                    }
                }}
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Champion Insights"</h2>
                <InsightList insights=Signal::derive(move || champions.get().insights) />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Analysis"</h2>
                <p class="text-gray-300 leading-relaxed">
                    {move || {
                        champions.get().narrative.unwrap_or_else(|| {
                            "Loading your champion analysis...".to_string()
                        })
                    }}
                </p>
            </section>
        </div>
    }
}

/// Single champion card
#[component]
fn ChampionCard(champ: Champion, featured: bool) -> impl IntoView {
    let border = if featured {
        "border-primary-500"
    } else {
        "border-gray-700"
    };

    view! {
        <div class=format!("bg-gray-800 rounded-xl p-5 border {} space-y-4", border)>
            <div class="flex items-center space-x-3">
                <span class="text-3xl">"♞"</span>
                <div>
                    <h3 class="font-semibold text-lg">{champ.name.clone()}</h3>
                    <div class="text-gray-400 text-sm">{champ.role.clone()}</div>
                </div>
            </div>

            <div class="grid grid-cols-3 gap-2 text-center">
                <div>
                    <div class="text-gray-400 text-xs">"Games"</div>
                    <div class="font-semibold">{fmt_count(champ.games_played)}</div>
                </div>
                <div>
                    <div class="text-gray-400 text-xs">"Win Rate"</div>
                    <div class="font-semibold">{fmt_percent(champ.win_rate)}</div>
                </div>
                <div>
                    <div class="text-gray-400 text-xs">"KDA"</div>
                    <div class="font-semibold">{fmt_stat(champ.kda, 2)}</div>
                </div>
            </div>

            <div class="grid grid-cols-3 gap-2 text-center text-sm">
                <div>
                    <div class="text-gray-500 text-xs">"CS/Min"</div>
                    <div>{fmt_stat(champ.cs_per_min, 1)}</div>
                </div>
                <div>
                    <div class="text-gray-500 text-xs">"DMG/Min"</div>
                    <div>{fmt_stat(champ.damage_per_min, 0)}</div>
                </div>
                <div>
                    <div class="text-gray-500 text-xs">"Vision"</div>
                    <div>{fmt_stat(champ.vision_score, 1)}</div>
                </div>
            </div>

            <p class="text-gray-400 text-sm">
                {champ.description.unwrap_or_else(|| "Your signature champion".to_string())}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::report::Champions;

    #[test]
    fn test_missing_champions_section_is_empty() {
        let champs = Champions::default();
        assert!(champs.top_champions.is_empty());
        assert!(champs.insights.is_empty());
        assert!(champs.narrative.is_none());
    }
}
