use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    response::IntoResponse,
};

use crate::{
    application::state::SharedState,
    domain::browser::{BrowserMatcher, PageData},
};

pub const PAGE_ROUTES: [&str; 2] = ["/", "/__data.json"];

/// Builds the page payload from the request headers.
///
/// The raw header bytes are matched, including obs-text; a missing
/// `User-Agent` is treated as empty.
#[must_use]
pub fn load(matcher: &BrowserMatcher, headers: &HeaderMap) -> PageData {
    let user_agent = headers.get(header::USER_AGENT).map(HeaderValue::as_bytes);
    PageData::from_user_agent(matcher, user_agent)
}

pub async fn load_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let payload = load(state.matcher(), &headers);
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(payload),
    )
}
