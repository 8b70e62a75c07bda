//! Rutas del formulario
//!
//! Sirven la página estática del formulario de valoración. Si el artefacto
//! del modelo no cargó al arranque, la página raíz sirve el error bloqueante
//! en lugar del formulario: no se renderiza el camino de submit.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../ui/index.html");
const MISSING_MODEL_HTML: &str = include_str!("../ui/missing_model.html");
const APP_JS: &str = include_str!("../ui/app.js");

/// GET /
///
/// Sirve el formulario, o el error bloqueante si no hay modelo
pub async fn serve_index(State(state): State<AppState>) -> Html<&'static str> {
    if state.model_loaded() {
        Html(INDEX_HTML)
    } else {
        Html(MISSING_MODEL_HTML)
    }
}

/// GET /static/app.js
///
/// Sirve el JavaScript del formulario
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}
