//! DTOs del API de valoración

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::valuation::Valuation;
use crate::models::vehicle::{FuelType, Transmission, VehicleRecord};
use crate::utils::format::{format_currency, SOURCE_CURRENCY_SYMBOL, TARGET_CURRENCY_SYMBOL};

/// Nota informativa que acompaña cada valoración
const VALUATION_NOTE: &str =
    "Note: Values are estimates based on UK historical data converted to NGN.";

fn default_tax() -> u32 {
    145
}

fn default_mpg() -> f64 {
    55.0
}

fn default_exchange_rate() -> f64 {
    2150.0
}

// Request para valorar un vehículo. Tax, MPG y tasa de cambio llevan los
// defaults del formulario ("leave these as default if you are not sure").
#[derive(Debug, Deserialize, Validate)]
pub struct ValuationRequest {
    pub brand: String,
    pub model: String,

    #[validate(range(min = 1995, max = 2025))]
    pub year: i32,

    pub transmission: Transmission,
    pub fuel_type: FuelType,

    #[validate(range(max = 400_000))]
    pub mileage: u32,

    #[validate(range(min = 0.0, max = 8.0))]
    pub engine_size: f64,

    #[validate(range(max = 1000))]
    #[serde(default = "default_tax")]
    pub tax: u32,

    #[validate(range(min = 10.0, max = 200.0))]
    #[serde(default = "default_mpg")]
    pub mpg: f64,

    #[serde(default = "default_exchange_rate")]
    pub exchange_rate: f64,
}

impl ValuationRequest {
    /// Armar el registro de dominio. El invariante marca/modelo ya debe estar
    /// verificado contra el catálogo.
    pub fn into_record(self) -> VehicleRecord {
        VehicleRecord {
            brand: self.brand,
            model: self.model,
            year: self.year,
            transmission: self.transmission,
            fuel_type: self.fuel_type,
            mileage: self.mileage,
            engine_size: self.engine_size,
            tax: self.tax,
            mpg: self.mpg,
        }
    }
}

// Response de valoración: estimaciones crudas más sus strings de display
#[derive(Debug, Serialize)]
pub struct ValuationResponse {
    pub source_estimate: f64,
    pub target_estimate: f64,
    pub source_display: String,
    pub target_display: String,
    pub exchange_rate: f64,
    pub note: String,
}

impl ValuationResponse {
    pub fn new(valuation: &Valuation, exchange_rate: f64) -> Self {
        Self {
            source_estimate: valuation.source_estimate,
            target_estimate: valuation.target_estimate,
            source_display: format_currency(SOURCE_CURRENCY_SYMBOL, valuation.source_estimate),
            target_display: format_currency(TARGET_CURRENCY_SYMBOL, valuation.target_estimate),
            exchange_rate,
            note: VALUATION_NOTE.to_string(),
        }
    }
}

// Response del catálogo de marcas
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub brands: Vec<String>,
}

// Response de modelos de una marca
#[derive(Debug, Serialize)]
pub struct BrandModelsResponse {
    pub brand: String,
    pub models: Vec<String>,
}

/// Envelope estándar de respuestas del API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_match_the_form() {
        let request: ValuationRequest = serde_json::from_value(serde_json::json!({
            "brand": "Ford",
            "model": "Fiesta",
            "year": 2019,
            "transmission": "Manual",
            "fuel_type": "Petrol",
            "mileage": 40000,
            "engine_size": 1.5
        }))
        .unwrap();

        assert_eq!(request.tax, 145);
        assert_eq!(request.mpg, 55.0);
        assert_eq!(request.exchange_rate, 2150.0);
    }

    #[test]
    fn test_response_formats_both_currencies() {
        let valuation = Valuation::from_source(13250.0, 2150.0);
        let response = ValuationResponse::new(&valuation, 2150.0);

        assert_eq!(response.source_display, "£13,250");
        assert_eq!(response.target_display, "₦28,487,500");
        assert_eq!(response.target_estimate, 13250.0 * 2150.0);
    }
}
