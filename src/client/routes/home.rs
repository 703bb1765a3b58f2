use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use goal_tracker::model::{Filter, Goal, GoalDraft};

use crate::client::{
    components::{AnalysisChart, FilterTabs, GoalCard, GoalForm, GoalSummary, Page},
    store::GoalState,
};

#[component]
pub fn Home() -> Element {
    let service = use_context::<Signal<GoalState>>();
    let filter = use_signal(Filter::default);
    let mut draft = use_signal(GoalDraft::default);

    let state = service.read();
    let goals: Vec<Goal> = state.filtered(filter()).into_iter().cloned().collect();
    let (completed, total) = state.summary();
    let chart_points = state.chart_points();
    drop(state);

    let show_chart = filter() == Filter::Analysis && !chart_points.is_empty();

    rsx!(
        Title { "Goal Tracker" }
        Meta {
            name: "description",
            content: "Track numeric goals with escalating progress clicks."
        }
        Page { class: "flex justify-center",
            div { class: "card bg-base-100 shadow-xl w-full max-w-xl h-fit",
                div { class: "card-body",
                    h1 { class: "card-title text-2xl", "🎯 Goal Tracker" }
                    FilterTabs { filter }
                    if show_chart {
                        AnalysisChart { points: chart_points }
                    }
                    GoalForm { draft }
                    GoalSummary { completed, total }
                    if goals.is_empty() {
                        p { class: "text-base-content/60", "No goals found." }
                    } else {
                        div { class: "flex flex-col gap-4",
                            {goals.into_iter().map(|goal| rsx!(
                                GoalCard {
                                    key: "{goal.id}",
                                    goal: goal.clone(),
                                    on_edit: move |loaded: GoalDraft| draft.set(loaded),
                                    on_edit_ended: move |_: ()| draft.set(GoalDraft::default()),
                                }
                            ))}
                        }
                    }
                }
            }
        }
    )
}
