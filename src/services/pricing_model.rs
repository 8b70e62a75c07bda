//! Artefacto del modelo de precios pre-entrenado
//!
//! Este módulo carga el artefacto de regresión entrenado fuera de este
//! servicio y expone su única operación: predecir el precio en moneda origen
//! a partir de un registro de una fila con los nombres de columna exactos del
//! frame de entrenamiento (`brand`, `model`, `year`, `transmission`,
//! `mileage`, `fuelType`, `tax`, `mpg`, `engineSize`).
//!
//! El artefacto es opaco para el resto del servicio: solo se necesita
//! "cargar" y "predecir". El formato serializado es una función lineal
//! ajustada: intercepto + features numéricas estandarizadas + pesos por
//! nivel de las features categóricas.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errores al cargar el artefacto
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("model artifact not found at '{0}'")]
    Missing(String),

    #[error("model artifact could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("model artifact is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model artifact is invalid: {0}")]
    Invalid(String),
}

/// Errores durante la predicción
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("unseen {feature} value '{value}' for this model")]
    UnseenCategory { feature: String, value: String },

    #[error("column '{0}' missing from the input record")]
    MissingColumn(String),

    #[error("column '{0}' has the wrong type")]
    TypeMismatch(String),

    #[error("prediction produced a non-finite value")]
    NonFinite,
}

/// Registro de una fila con el schema exacto que espera el modelo.
///
/// Los renames de serde fijan los nombres de columna del frame de
/// entrenamiento; la resolución por nombre en `predict` pasa por esta
/// serialización, así que hay una sola fuente de verdad para el schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionInput {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub transmission: String,
    pub mileage: u32,
    #[serde(rename = "fuelType")]
    pub fuel_type: String,
    pub tax: u32,
    pub mpg: f64,
    #[serde(rename = "engineSize")]
    pub engine_size: f64,
}

/// Feature numérica estandarizada: peso * (x - media) / escala
#[derive(Debug, Deserialize)]
struct NumericFeature {
    name: String,
    mean: f64,
    scale: f64,
    weight: f64,
}

/// Feature categórica: peso por nivel conocido
#[derive(Debug, Deserialize)]
struct CategoricalFeature {
    name: String,
    levels: BTreeMap<String, f64>,
}

/// Modelo de precios cargado desde disco, de solo lectura durante toda la
/// vida del proceso
#[derive(Debug, Deserialize)]
pub struct PricingModel {
    /// Código de la moneda en la que predice el modelo
    pub currency: String,
    intercept: f64,
    numeric_features: Vec<NumericFeature>,
    categorical_features: Vec<CategoricalFeature>,
}

impl PricingModel {
    /// Cargar el artefacto desde un archivo JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ArtifactError::Missing(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path)?;
        let model: PricingModel = serde_json::from_str(&raw)?;
        model.validate_coefficients()?;
        Ok(model)
    }

    /// Verificar que los coeficientes del artefacto son utilizables
    fn validate_coefficients(&self) -> Result<(), ArtifactError> {
        if !self.intercept.is_finite() {
            return Err(ArtifactError::Invalid("non-finite intercept".to_string()));
        }
        for feature in &self.numeric_features {
            if !(feature.scale.is_finite() && feature.scale > 0.0) {
                return Err(ArtifactError::Invalid(format!(
                    "numeric feature '{}' has a non-positive scale",
                    feature.name
                )));
            }
            if !(feature.mean.is_finite() && feature.weight.is_finite()) {
                return Err(ArtifactError::Invalid(format!(
                    "numeric feature '{}' has non-finite coefficients",
                    feature.name
                )));
            }
        }
        for feature in &self.categorical_features {
            if feature.levels.is_empty() {
                return Err(ArtifactError::Invalid(format!(
                    "categorical feature '{}' has no levels",
                    feature.name
                )));
            }
        }
        Ok(())
    }

    /// Predecir el precio en moneda origen para un registro.
    ///
    /// La resolución de cada feature es por nombre de columna; un nivel
    /// categórico que el modelo no vio en entrenamiento es un error.
    pub fn predict(&self, input: &PredictionInput) -> Result<f64, PredictionError> {
        let record = match serde_json::to_value(input) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => return Err(PredictionError::TypeMismatch("record".to_string())),
        };

        let mut estimate = self.intercept;

        for feature in &self.numeric_features {
            let value = record
                .get(&feature.name)
                .ok_or_else(|| PredictionError::MissingColumn(feature.name.clone()))?
                .as_f64()
                .ok_or_else(|| PredictionError::TypeMismatch(feature.name.clone()))?;
            estimate += feature.weight * (value - feature.mean) / feature.scale;
        }

        for feature in &self.categorical_features {
            let value = record
                .get(&feature.name)
                .ok_or_else(|| PredictionError::MissingColumn(feature.name.clone()))?
                .as_str()
                .ok_or_else(|| PredictionError::TypeMismatch(feature.name.clone()))?;
            let weight =
                feature
                    .levels
                    .get(value)
                    .ok_or_else(|| PredictionError::UnseenCategory {
                        feature: feature.name.clone(),
                        value: value.to_string(),
                    })?;
            estimate += weight;
        }

        if !estimate.is_finite() {
            return Err(PredictionError::NonFinite);
        }
        Ok(estimate)
    }
}
