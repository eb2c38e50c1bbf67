use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use auth_shared::constants::MAX_REQUEST_BODY_BYTES;

use crate::handlers::{assets, auth, health};
use crate::middleware::cors;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Session API. Wrong methods fall through to the JSON 404.
        .route(
            "/api/check-session",
            get(auth::check_session).fallback(auth::api_not_found),
        )
        .route("/api/login", post(auth::login).fallback(auth::api_not_found))
        .route("/api/logout", post(auth::logout).fallback(auth::api_not_found))
        // Unknown API paths and static assets
        .fallback(assets::fallback)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(middleware::from_fn(cors::api_cors_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
}
