use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{Latch, PersonStore};

use crate::identity;
use crate::persons;
use crate::slow;

/// Shared handler state: the process-wide store and the slow-request latch,
/// constructed once at startup and injected by value.
#[derive(Clone)]
pub struct ServerState {
    pub persons: Arc<PersonStore>,
    pub slow_latch: Arc<Latch>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Person resource. Verbs outside get/put/delete on a single person
    // (POST included) are answered 405 by the method router before any
    // body is read.
    let persons = Router::new()
        .route("/v1/person", get(persons::list_persons))
        .route(
            "/v1/person/:name",
            get(persons::get_person)
                .put(persons::put_person)
                .delete(persons::delete_person),
        );

    // Test-harness route
    let slow = Router::new().route("/slow", get(slow::slow_request));

    Router::new()
        .route("/health", get(health))
        .merge(persons)
        .merge(slow)
        .layer(middleware::from_fn(identity::resolve_caller_identity))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
