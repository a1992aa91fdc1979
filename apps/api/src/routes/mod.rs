pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/interview", get(handlers::handle_get_session))
        .route(
            "/api/v1/interview/profile",
            post(handlers::handle_submit_profile),
        )
        .route("/api/v1/interview/start", post(handlers::handle_start))
        .route("/api/v1/interview/answer", post(handlers::handle_answer))
        .route("/api/v1/interview/reset", post(handlers::handle_reset))
        .with_state(state)
}
