use dioxus::prelude::*;

pub use crate::client::router::Route;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Goal Tracker"
                        }
                        p { class: "text-xs",
                            "v{VERSION}"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
