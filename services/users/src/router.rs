use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;

use userbase_core::error::not_found;
use userbase_core::health::{healthz, readyz};
use userbase_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::user::users;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users: every method lands on the dispatcher
        .route("/users", any(users))
        .fallback(not_found)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
