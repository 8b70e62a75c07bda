//! Controller de valoración
//!
//! Orquesta una submission: valida rangos, verifica el invariante
//! marca/modelo contra el catálogo, arma el registro e invoca el servicio.
//! Cada submission produce exactamente un resultado o un error; no queda
//! estado entre invocaciones.

use std::sync::Arc;

use validator::Validate;

use crate::dto::valuation_dto::{ApiResponse, ValuationRequest, ValuationResponse};
use crate::models::catalog;
use crate::services::pricing_model::PricingModel;
use crate::services::valuation_service::ValuationService;
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::{validate_not_empty, validate_positive};

pub struct ValuationController {
    model: Option<Arc<PricingModel>>,
    model_path: String,
}

impl ValuationController {
    pub fn new(model: Option<Arc<PricingModel>>, model_path: String) -> Self {
        Self { model, model_path }
    }

    pub fn appraise(
        &self,
        request: ValuationRequest,
    ) -> AppResult<ApiResponse<ValuationResponse>> {
        // Sin artefacto no se pasa del formulario
        let model = self
            .model
            .clone()
            .ok_or_else(|| AppError::MissingArtifact(self.model_path.clone()))?;

        // Validar campos
        if validate_not_empty(&request.brand).is_err() {
            return Err(validation_error("brand", "brand is required"));
        }
        if validate_not_empty(&request.model).is_err() {
            return Err(validation_error("model", "model is required"));
        }

        // Validar rangos numéricos
        request.validate()?;

        // Verificar el invariante marca/modelo contra el catálogo
        if catalog::models_for_brand(&request.brand).is_none() {
            return Err(AppError::BadRequest(format!(
                "Unknown brand '{}'",
                request.brand
            )));
        }
        if !catalog::brand_has_model(&request.brand, &request.model) {
            return Err(AppError::BadRequest(format!(
                "Model '{}' does not belong to brand '{}'",
                request.model, request.brand
            )));
        }

        // La tasa de cambio debe ser positiva
        if validate_positive(request.exchange_rate).is_err() {
            return Err(validation_error(
                "exchange_rate",
                "exchange rate must be positive",
            ));
        }

        let exchange_rate = request.exchange_rate;
        let record = request.into_record();
        let valuation = ValuationService::new(model).appraise(&record, exchange_rate)?;

        Ok(ApiResponse::success_with_message(
            ValuationResponse::new(&valuation, exchange_rate),
            "Valuation complete".to_string(),
        ))
    }
}
