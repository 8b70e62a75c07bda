//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El artefacto del modelo se carga una sola
//! vez al arranque y es de solo lectura el resto de la vida del proceso.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::pricing_model::PricingModel;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    /// `None` si el archivo del artefacto no estaba al arrancar; en ese caso
    /// toda interacción más allá del formulario responde el error bloqueante
    pub model: Option<Arc<PricingModel>>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, model: Option<Arc<PricingModel>>) -> Self {
        Self { config, model }
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }
}
