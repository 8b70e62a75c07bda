use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use auto_valuate::config::environment::EnvironmentConfig;
use auto_valuate::services::pricing_model::{ArtifactError, PricingModel};
use auto_valuate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 AutoValuate - Car Price Valuation Service");
    info!("============================================");

    let config = EnvironmentConfig::default();

    // Cargar el artefacto del modelo (una sola vez, solo lectura)
    let model = match PricingModel::load(&config.model_path) {
        Ok(model) => {
            info!(
                "✅ Modelo de precios cargado desde `{}` (moneda {})",
                config.model_path, model.currency
            );
            Some(Arc::new(model))
        }
        Err(ArtifactError::Missing(path)) => {
            // El servicio arranca igual, pero todo lo que pase del
            // formulario responde el error bloqueante
            error!("⚠️ Archivo del modelo `{}` no encontrado", path);
            None
        }
        Err(e) => {
            error!("❌ Error cargando el artefacto del modelo: {}", e);
            return Err(anyhow::anyhow!("Error del artefacto: {}", e));
        }
    };

    let state = AppState::new(config.clone(), model);
    let app = auto_valuate::build_router(state);

    // Puerto del servidor
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Formulario de valoración");
    info!("   GET  /health - Health check");
    info!("   GET  /api/catalog - Marcas disponibles");
    info!("   GET  /api/catalog/:brand/models - Modelos por marca");
    info!("   POST /api/valuation - Valorar un vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
