pub mod catalog_routes;
pub mod ui_routes;
pub mod valuation_routes;

use axum::{extract::State, response::Json};
use serde_json::json;

use crate::state::AppState;

/// GET /health
///
/// Estado del servicio y del artefacto del modelo
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "auto-valuate",
        "status": "ok",
        "model_loaded": state.model_loaded(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
