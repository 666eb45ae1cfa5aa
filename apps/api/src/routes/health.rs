use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness banner for anyone poking the base URL.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Resume Builder API is running."
    }))
}

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy"
    }))
}
