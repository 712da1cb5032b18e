//! Goals Section
//!
//! Next-season goals grouped into five fixed categories, each with a
//! progress rollup.

use leptos::*;

use crate::report::{category_progress, Goal};
use crate::state::global::GlobalState;

/// Goals section component
#[component]
pub fn GoalsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let goals = create_memo(move |_| {
        state
            .report
            .get()
            .and_then(|report| report.future_goals)
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            {move || {
                goals.get().categories().into_iter().map(|(label, category_goals)| {
                    let progress = category_progress(category_goals);
                    let category_goals = category_goals.to_vec();

                    view! {
                        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                            <div class="flex items-center justify-between">
                                <h2 class="text-xl font-semibold">{label}</h2>
                                <span class="text-gray-400 text-sm">{format!("{}%", progress)}</span>
                            </div>

                            // Category progress rollup
                            <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                                <div
                                    class="h-full bg-primary-500 rounded-full"
                                    style=format!("width: {}%", progress)
                                />
                            </div>

                            {if category_goals.is_empty() {
                                view! {
                                    <p class="text-gray-500 text-sm">"No goals in this category"</p>
                                }.into_view()
                            } else {
                                category_goals.into_iter().map(|goal| view! {
                                    <GoalCard goal=goal />
                                }).collect_view()
                            }}
                        </section>
                    }
                }).collect_view()
            }}

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Coach's Note"</h2>
                <p class="text-gray-300 leading-relaxed">
                    {move || {
                        goals.get().narrative.unwrap_or_else(|| {
                            "These personalized goals are designed to help you improve..."
                                .to_string()
                        })
                    }}
                </p>
            </section>
        </div>
    }
}

/// Single goal card with its action steps
#[component]
fn GoalCard(goal: Goal) -> impl IntoView {
    let priority_class = match goal.priority.to_lowercase().as_str() {
        "high" => "bg-red-600",
        "medium" => "bg-yellow-600",
        "low" => "bg-green-600",
        _ => "bg-gray-600",
    };
    let progress = goal.progress.unwrap_or(0.0);

    view! {
        <div class="bg-gray-700 rounded-lg p-4 space-y-3">
            <div class="flex items-center justify-between">
                <h4 class="font-medium">{goal.title}</h4>
                <span class=format!("px-2 py-1 rounded text-xs font-medium {}", priority_class)>
                    {goal.priority.clone()}
                </span>
            </div>

            <p class="text-gray-400 text-sm">{goal.description}</p>

            <div class="flex items-center space-x-3">
                <div class="flex-1 h-2 bg-gray-600 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-primary-500 rounded-full"
                        style=format!("width: {}%", progress)
                    />
                </div>
                <span class="text-gray-400 text-sm">{format!("{}%", progress)}</span>
            </div>

            {(!goal.actions.is_empty()).then(|| view! {
                <div class="space-y-1">
                    <h5 class="text-sm text-gray-400">"Action Steps:"</h5>
                    {goal.actions.into_iter().map(|action| view! {
                        <label class="flex items-center space-x-2 text-sm">
                            <input type="checkbox" checked=action.completed disabled=true />
                            <span class="text-gray-300">{action.text}</span>
                        </label>
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::report::{category_progress, FutureGoals};

    #[test]
    fn test_missing_goals_roll_up_to_zero() {
        let goals = FutureGoals::default();
        for (_, category) in goals.categories() {
            assert_eq!(category_progress(category), 0);
        }
    }
}
