//! AutoValuate - servicio de valoración de autos usados
//!
//! Formulario de una página que recoge los atributos del vehículo, los
//! transforma al registro exacto que espera un modelo de regresión
//! pre-entrenado y presenta la estimación en dos monedas (GBP → NGN vía
//! tasa de cambio del usuario).

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Router};

use middleware::cors::cors_middleware;
use state::AppState;

/// Construir el router completo de la aplicación
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::ui_routes::serve_index))
        .route("/static/app.js", get(routes::ui_routes::serve_app_js))
        .route("/health", get(routes::health))
        .nest("/api/catalog", routes::catalog_routes::create_catalog_router())
        .nest(
            "/api/valuation",
            routes::valuation_routes::create_valuation_router(),
        )
        .layer(cors_middleware())
        .with_state(state)
}
