//! Resultado de una valoración
//!
//! Efímero: se construye en cada submission y se descarta tras renderizarse.

use serde::Serialize;

/// Estimación en moneda origen (GBP) y su conversión a moneda destino (NGN)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Valuation {
    pub source_estimate: f64,
    pub target_estimate: f64,
}

impl Valuation {
    /// Construir la valoración aplicando la tasa de cambio al estimado origen
    pub fn from_source(source_estimate: f64, exchange_rate: f64) -> Self {
        Self {
            source_estimate,
            target_estimate: source_estimate * exchange_rate,
        }
    }
}
