use axum::{
    extract::Path,
    routing::get,
    Json, Router,
};

use crate::dto::valuation_dto::{BrandModelsResponse, CatalogResponse};
use crate::models::catalog;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_brands))
        .route("/:brand/models", get(list_models_for_brand))
}

async fn list_brands() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        brands: catalog::brands().iter().map(|b| b.to_string()).collect(),
    })
}

async fn list_models_for_brand(
    Path(brand): Path<String>,
) -> Result<Json<BrandModelsResponse>, AppError> {
    let models =
        catalog::models_for_brand(&brand).ok_or_else(|| not_found_error("Brand", &brand))?;

    Ok(Json(BrandModelsResponse {
        brand,
        models: models.iter().map(|m| m.to_string()).collect(),
    }))
}
