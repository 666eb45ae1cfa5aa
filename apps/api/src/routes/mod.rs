pub mod health;
pub mod score;

use axum::{
    routing::{get, post},
    Router,
};

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/score", post(score::handle_score))
        .route("/api/score-file", post(score::handle_score_file))
}
