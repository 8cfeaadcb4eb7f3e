use serde_json::{Value, json};

use crate::{application::state::SharedState, interfaces::page::PAGE_ROUTES};

#[must_use]
pub fn health_payload(state: &SharedState) -> Value {
    json!({
        "ok": true,
        "uptimeMs": state.uptime_ms(),
    })
}

#[must_use]
pub fn ready_payload(state: &SharedState) -> Value {
    json!({
        "ok": true,
        "runtime": "rust",
        "version": state.config().runtime_version,
    })
}

#[must_use]
pub fn info_payload(state: &SharedState) -> Value {
    json!({
        "name": "firefox-flag",
        "runtime": "rust",
        "version": state.config().runtime_version,
        "routes": PAGE_ROUTES,
    })
}
