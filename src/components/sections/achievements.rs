//! Achievements Section
//!
//! Unlocked achievements and the year's outstanding games.

use leptos::*;

use crate::report::{fmt_stat, Achievement, TopGame};
use crate::state::global::GlobalState;

/// Achievements section component
#[component]
pub fn AchievementsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let achievements = create_memo(move |_| {
        state
            .report
            .get()
            .and_then(|report| report.achievements)
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    let list = achievements.get().list;
                    if list.is_empty() {
                        view! {
                            <p class="col-span-full text-center text-gray-400">
                                "No achievements unlocked yet"
                            </p>
                        }.into_view()
                    } else {
                        list.into_iter().map(|achievement| view! {
                            <AchievementCard achievement=achievement />
                        }).collect_view()
                    }
                }}
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Outstanding Games"</h2>
                <div class="space-y-2">
                    {move || {
                        achievements.get().top_games.into_iter().take(5).map(|game| view! {
                            <MatchRow game=game />
                        }).collect_view()
                    }}
                </div>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Analysis"</h2>
                <p class="text-gray-300 leading-relaxed">
                    {move || {
                        achievements.get().narrative.unwrap_or_else(|| {
                            "Loading your achievements...".to_string()
                        })
                    }}
                </p>
            </section>
        </div>
    }
}

/// Single achievement card, tinted by rarity
#[component]
fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let rarity_class = match achievement.rarity.to_lowercase().as_str() {
        "legendary" => "border-yellow-500",
        "epic" => "border-purple-500",
        "rare" => "border-blue-500",
        _ => "border-gray-700",
    };

    view! {
        <div class=format!("bg-gray-800 rounded-xl p-5 border {}", rarity_class)>
            <div class="flex items-start space-x-3">
                <span class="text-3xl">{achievement.icon.unwrap_or_else(|| "🏆".to_string())}</span>
                <div>
                    <h3 class="font-semibold">{achievement.name}</h3>
                    <p class="text-gray-400 text-sm mt-1">{achievement.description}</p>
                    <div class="text-gray-500 text-xs mt-2">{achievement.date}</div>
                </div>
            </div>
        </div>
    }
}

/// One outstanding game row
#[component]
fn MatchRow(game: TopGame) -> impl IntoView {
    let result_class = match game.result.to_lowercase().as_str() {
        "victory" | "win" => "text-green-400",
        "defeat" | "loss" => "text-red-400",
        _ => "text-gray-400",
    };

    view! {
        <div class="flex items-center justify-between py-3 px-4 bg-gray-700 rounded-lg">
            <div class="flex items-center space-x-4">
                <div>
                    <div class=format!("font-semibold {}", result_class)>{game.result.clone()}</div>
                    <div class="text-gray-400 text-xs">{game.duration.clone()}</div>
                </div>
                <div>
                    <div class="font-medium">{game.champion.clone()}</div>
                    <div class="text-gray-400 text-xs">{game.role.clone()}</div>
                </div>
            </div>
            <div class="text-right">
                <div class="font-semibold">
                    {format!("{}/{}/{}", game.kills, game.deaths, game.assists)}
                </div>
                <div class="text-gray-400 text-xs">
                    {format!("{} KDA", fmt_stat(game.kda, 2))}
                </div>
            </div>
            <div class="text-xl font-bold text-primary-400">{game.grade.clone()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::report::Achievements;

    #[test]
    fn test_missing_achievements_section_is_empty() {
        let achievements = Achievements::default();
        assert!(achievements.list.is_empty());
        assert!(achievements.top_games.is_empty());
        assert!(achievements.narrative.is_none());
    }
}
