use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaTrash};
use dioxus_free_icons::Icon;
use goal_tracker::{
    model::{Direction, Goal, GoalDraft},
    tracker::next_delta,
};

use crate::client::{components::ProgressBar, store::GoalState, util::celebrate::celebrate};

#[component]
pub fn GoalCard(
    goal: Goal,
    on_edit: EventHandler<GoalDraft>,
    on_edit_ended: EventHandler<()>,
) -> Element {
    let mut service = use_context::<Signal<GoalState>>();

    let id = goal.id;
    let step = next_delta(&goal);
    let background = if goal.is_completed() {
        "bg-success/20"
    } else {
        "bg-base-200"
    };

    let mut click = move |direction: Direction| {
        let outcome = service.write().update_progress(id, direction);
        if outcome.is_some_and(|outcome| outcome.celebrate) {
            celebrate();
        }
    };

    rsx!(
        div {
            class: "p-4 rounded-xl shadow-sm transition-opacity duration-300 ease-in-out {background}",
            div { class: "flex justify-between mb-1",
                div {
                    h2 { class: "font-medium", "{goal.text}" }
                    p { class: "text-xs text-base-content/60",
                        "Level: {goal.level} | Reward: {goal.reward}"
                    }
                }
                div { class: "flex gap-2 items-start",
                    button {
                        class: "btn btn-ghost btn-xs text-info",
                        onclick: move |_| {
                            if let Some(draft) = service.write().start_editing(id) {
                                on_edit.call(draft);
                            }
                        },
                        Icon { width: 12, height: 12, icon: FaPenToSquare }
                        "Edit"
                    }
                    button {
                        class: "btn btn-ghost btn-xs text-error",
                        onclick: move |_| {
                            let was_editing = service.read().editing() == Some(id);
                            if service.write().delete(id) && was_editing {
                                on_edit_ended.call(());
                            }
                        },
                        Icon { width: 12, height: 12, icon: FaTrash }
                        "Delete"
                    }
                }
            }
            ProgressBar {
                progress: goal.progress,
                target: goal.target,
                percent: goal.percent(),
            }
            div { class: "flex items-center gap-2 mt-2",
                button {
                    class: "btn btn-error btn-sm",
                    onclick: move |_| click(Direction::Decrease),
                    "-{step}"
                }
                button {
                    class: "btn btn-success btn-sm",
                    onclick: move |_| click(Direction::Increase),
                    "+{step}"
                }
            }
        }
    )
}
