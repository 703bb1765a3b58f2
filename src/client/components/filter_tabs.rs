use dioxus::prelude::*;
use goal_tracker::model::Filter;

#[component]
pub fn FilterTabs(filter: Signal<Filter>) -> Element {
    let mut filter = filter;
    let selected = filter();

    rsx!(
        div { class: "flex gap-2",
            {Filter::ALL.into_iter().map(|tab| {
                let class = if tab == selected {
                    "btn btn-sm btn-primary"
                } else {
                    "btn btn-sm"
                };
                rsx!(
                    button {
                        key: "{tab}",
                        class,
                        onclick: move |_| filter.set(tab),
                        "{tab}"
                    }
                )
            })}
        }
    )
}
