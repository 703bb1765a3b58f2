use dioxus::{document::EvalError, prelude::*};
use dioxus_logger::tracing;

/// Browser build of canvas-confetti, exposes a global `confetti()` function.
pub const CONFETTI_SRC: &str =
    "https://cdn.jsdelivr.net/npm/canvas-confetti@1.9.3/dist/confetti.browser.min.js";

const FIRE_CONFETTI: &str =
    "if (typeof confetti !== 'function') { return false; } confetti(); return true;";

/// Fires the confetti effect for a goal completed with an immediate reward.
///
/// A missing script or a renderer without JavaScript skips the effect and logs at debug level.
pub fn celebrate() {
    spawn(async move {
        let result = document::eval(FIRE_CONFETTI).join::<bool>().await;
        if let Some(reason) = skipped_reason(&result) {
            tracing::debug!("Skipped confetti effect: {}", reason);
        }
    });
}

/// Why the effect did not run, or `None` when confetti fired.
fn skipped_reason(result: &Result<bool, EvalError>) -> Option<String> {
    match result {
        Ok(true) => None,
        Ok(false) => Some("confetti script is not loaded".to_string()),
        Err(e) => Some(format!("{:?}", e)),
    }
}
