//! Servicio de valoración
//!
//! Este módulo arma el registro de una fila con el schema exacto del modelo,
//! invoca la predicción y aplica la tasa de cambio. Cada invocación es
//! independiente: no queda estado entre submissions.

use std::sync::Arc;

use crate::models::valuation::Valuation;
use crate::models::vehicle::VehicleRecord;
use crate::services::pricing_model::{PredictionError, PredictionInput, PricingModel};

pub struct ValuationService {
    model: Arc<PricingModel>,
}

impl ValuationService {
    pub fn new(model: Arc<PricingModel>) -> Self {
        Self { model }
    }

    /// Armar el registro con los nombres de columna del frame de entrenamiento.
    ///
    /// Los strings de marca/modelo pasan tal cual vienen del catálogo (incluido
    /// el espacio inicial de algunas entradas): el modelo fue entrenado con
    /// exactamente esos valores.
    fn shape_record(record: &VehicleRecord) -> PredictionInput {
        PredictionInput {
            brand: record.brand.clone(),
            model: record.model.clone(),
            year: record.year,
            transmission: record.transmission.as_str().to_string(),
            mileage: record.mileage,
            fuel_type: record.fuel_type.as_str().to_string(),
            tax: record.tax,
            mpg: record.mpg,
            engine_size: record.engine_size,
        }
    }

    /// Valorar un vehículo: predecir en moneda origen y convertir con la tasa
    pub fn appraise(
        &self,
        record: &VehicleRecord,
        exchange_rate: f64,
    ) -> Result<Valuation, PredictionError> {
        let input = Self::shape_record(record);
        tracing::debug!(
            "Prediciendo precio para {} {} ({})",
            record.brand,
            record.model.trim(),
            record.year
        );
        let source_estimate = self.model.predict(&input)?;
        Ok(Valuation::from_source(source_estimate, exchange_rate))
    }
}
