use dioxus::prelude::*;
use dioxus_logger::tracing;
use goal_tracker::{
    storage::{self, GoalStore, MemoryStore},
    Config, GoalService,
};

use crate::client::{router::Route, store::GoalState, util::celebrate::CONFETTI_SRC};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();

    let service = use_signal(move || {
        let store = storage::open(&config).unwrap_or_else(|e| {
            tracing::error!("Failed to open goal storage, changes will not persist: {}", e);
            Box::new(MemoryStore::new()) as Box<dyn GoalStore>
        });
        GoalService::load(store)
    });
    use_context_provider::<Signal<GoalState>>(|| service);

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Script { src: CONFETTI_SRC }
        Router::<Route> {}
    }
}
