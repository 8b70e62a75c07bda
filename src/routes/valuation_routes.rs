use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::valuation_controller::ValuationController;
use crate::dto::valuation_dto::{ApiResponse, ValuationRequest, ValuationResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_valuation_router() -> Router<AppState> {
    Router::new().route("/", post(appraise_vehicle))
}

async fn appraise_vehicle(
    State(state): State<AppState>,
    Json(request): Json<ValuationRequest>,
) -> Result<Json<ApiResponse<ValuationResponse>>, AppError> {
    let controller =
        ValuationController::new(state.model.clone(), state.config.model_path.clone());
    let response = controller.appraise(request)?;
    Ok(Json(response))
}
