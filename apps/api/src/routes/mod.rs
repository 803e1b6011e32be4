pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::impact::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/impact/analyze", post(handlers::handle_analyze))
        .route("/api/v1/impact/classify", post(handlers::handle_classify))
        .route("/api/v1/impact/catalog", get(handlers::handle_catalog))
        .route(
            "/api/v1/impact/dimensions/:dimension",
            get(handlers::handle_dimension),
        )
        .with_state(state)
}
