use std::future::Future;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    application::state::SharedState,
    domain::error::DomainError,
    interfaces::{page, status},
};

pub fn build_router(state: SharedState) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(healthz_handler))
        .route("/readyz", get(readyz_handler))
        .route("/info", get(info_handler));

    for path in page::PAGE_ROUTES {
        router = router.route(path, get(page::load_handler));
    }

    router.with_state(state)
}

pub async fn serve(
    listener: TcpListener,
    state: SharedState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), DomainError> {
    let local_addr = listener.local_addr().map_err(|error| {
        DomainError::Unavailable(format!("failed to read listener address: {error}"))
    })?;

    info!(
        "firefox-flag listening on http://{}:{}, version={}",
        local_addr.ip(),
        local_addr.port(),
        state.config().runtime_version,
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|error| DomainError::Unavailable(format!("server runtime error: {error}")))
}

async fn healthz_handler(State(state): State<SharedState>) -> impl IntoResponse {
    (StatusCode::OK, Json(status::health_payload(&state)))
}

async fn readyz_handler(State(state): State<SharedState>) -> impl IntoResponse {
    (StatusCode::OK, Json(status::ready_payload(&state)))
}

async fn info_handler(State(state): State<SharedState>) -> impl IntoResponse {
    (StatusCode::OK, Json(status::info_payload(&state)))
}
