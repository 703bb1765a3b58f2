use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Goal Tracker" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-xl", "Nothing at /{path}" }
                Link {
                    to: Route::Home {},
                    class: "btn btn-primary",
                    "Back to goals"
                }
            }
        }
    )
}
