use dioxus::prelude::*;

/// Full-height page body below the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen bg-base-200 pt-[80px] px-4 pb-8 {class}",
            {children}
        }
    )
}
