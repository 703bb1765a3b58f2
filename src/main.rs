#![allow(non_snake_case)]

mod client;

use dioxus_logger::tracing;
use goal_tracker::Config;

fn main() {
    #[cfg(feature = "desktop")]
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!("Starting goal tracker");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}
