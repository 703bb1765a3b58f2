use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFloppyDisk, FaPlus, FaXmark};
use dioxus_free_icons::Icon;
use goal_tracker::model::{GoalDraft, Level, Reward};

use crate::client::store::GoalState;

/// Form for creating a goal, or updating the goal loaded through its Edit button.
///
/// Invalid input is ignored: the submit button does nothing until the text is filled in and
/// the target is a positive number.
#[component]
pub fn GoalForm(draft: Signal<GoalDraft>) -> Element {
    let mut draft = draft;
    let mut service = use_context::<Signal<GoalState>>();

    let editing = service.read().editing().is_some();
    let current = draft.read().clone();

    let submit = move |_: MouseEvent| {
        let submitted = service.write().submit(&draft.read());
        if submitted.is_ok() {
            draft.set(GoalDraft::default());
        }
    };

    rsx!(
        div { class: "flex flex-col gap-2",
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "New goal...",
                value: "{current.text}",
                oninput: move |e| draft.write().text = e.value(),
            }
            div { class: "flex gap-2 flex-wrap",
                input {
                    r#type: "number",
                    min: "1",
                    class: "input input-bordered w-24",
                    value: "{current.target}",
                    oninput: move |e| draft.write().target = e.value(),
                }
                select {
                    class: "select select-bordered",
                    onchange: move |e| {
                        if let Ok(level) = e.value().parse::<Level>() {
                            draft.write().level = level;
                        }
                    },
                    option { value: "beginner", selected: current.level == Level::Beginner, "Beginner" }
                    option { value: "expert", selected: current.level == Level::Expert, "Expert" }
                }
                select {
                    class: "select select-bordered",
                    onchange: move |e| {
                        if let Ok(reward) = e.value().parse::<Reward>() {
                            draft.write().reward = reward;
                        }
                    },
                    option { value: "immediate", selected: current.reward == Reward::Immediate, "Immediate Reward" }
                    option { value: "delayed", selected: current.reward == Reward::Delayed, "Delayed Reward" }
                }
                button {
                    class: "btn btn-primary flex gap-2",
                    onclick: submit,
                    if editing {
                        Icon { width: 16, height: 16, icon: FaFloppyDisk }
                        "Update"
                    } else {
                        Icon { width: 16, height: 16, icon: FaPlus }
                        "Add"
                    }
                }
                if editing {
                    button {
                        class: "btn btn-ghost flex gap-2",
                        onclick: move |_| {
                            service.write().cancel_editing();
                            draft.set(GoalDraft::default());
                        },
                        Icon { width: 16, height: 16, icon: FaXmark }
                        "Cancel"
                    }
                }
            }
        }
    )
}
