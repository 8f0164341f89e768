//! Route table.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers;
use crate::state::AppState;

/// Build the API router. Each request gets an INFO span and one INFO event
/// when its response is sent.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/questions",
            post(handlers::create_question).get(handlers::list_questions),
        )
        .route("/api/surveys", post(handlers::create_survey))
        .route("/api/surveys/{id}", get(handlers::get_survey))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
