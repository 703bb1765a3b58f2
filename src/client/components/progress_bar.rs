use dioxus::prelude::*;

#[component]
pub fn ProgressBar(progress: u32, target: u32, percent: f64) -> Element {
    rsx!(
        div { class: "flex items-center gap-2",
            div { class: "w-full bg-base-300 rounded-full h-2.5",
                div {
                    class: "bg-primary h-2.5 rounded-full transition-all",
                    style: "width: {percent}%",
                }
            }
            span { class: "text-sm whitespace-nowrap", "{progress}/{target}" }
        }
    )
}
