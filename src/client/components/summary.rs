use dioxus::prelude::*;

#[component]
pub fn GoalSummary(completed: usize, total: usize) -> Element {
    rsx!(
        div { class: "text-sm text-base-content/70",
            "Goals Completed: {completed} / {total}"
        }
    )
}
