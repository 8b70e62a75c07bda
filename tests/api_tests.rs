//! Integration tests del API de valoración
//!
//! Cubren el catálogo, el endpoint de valoración de punta a punta, el
//! comportamiento con el artefacto ausente y el formateo de las dos monedas.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot` method

use auto_valuate::config::environment::EnvironmentConfig;
use auto_valuate::services::pricing_model::PricingModel;
use auto_valuate::state::AppState;

/// Artefacto de prueba: cubre un subconjunto del catálogo, como un modelo
/// real entrenado sobre un dataset que no vio todas las marcas
fn test_artifact() -> Value {
    json!({
        "currency": "GBP",
        "intercept": 12500.0,
        "numeric_features": [
            { "name": "year", "mean": 2017.0, "scale": 2.5, "weight": 1800.0 },
            { "name": "mileage", "mean": 25000.0, "scale": 15000.0, "weight": -950.0 },
            { "name": "engineSize", "mean": 1.6, "scale": 0.6, "weight": 600.0 },
            { "name": "tax", "mean": 120.0, "scale": 65.0, "weight": -40.0 },
            { "name": "mpg", "mean": 52.0, "scale": 14.0, "weight": -150.0 }
        ],
        "categorical_features": [
            { "name": "brand", "levels": { "Ford": -300.0, "Toyota": 250.0, "Mercedes": 2200.0 } },
            { "name": "model", "levels": { "Fiesta": -450.0, "Focus": -150.0, "Yaris": -250.0, " C Class": 1200.0 } },
            { "name": "transmission", "levels": { "Manual": -120.0, "Automatic": 240.0, "Semi-Auto": 180.0 } },
            { "name": "fuelType", "levels": { "Petrol": -60.0, "Diesel": 40.0, "Hybrid": 320.0 } }
        ]
    })
}

/// Función helper para crear la app de test
fn setup_app(model: Option<PricingModel>) -> axum::Router {
    let state = AppState::new(EnvironmentConfig::default(), model.map(Arc::new));
    auto_valuate::build_router(state)
}

fn loaded_app() -> axum::Router {
    setup_app(Some(serde_json::from_value(test_artifact()).unwrap()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Request de ejemplo: el Ford Fiesta del formulario con sus defaults
fn fiesta_request() -> Value {
    json!({
        "brand": "Ford",
        "model": "Fiesta",
        "year": 2019,
        "transmission": "Manual",
        "fuel_type": "Petrol",
        "mileage": 40000,
        "engine_size": 1.5,
        "tax": 145,
        "mpg": 55.0,
        "exchange_rate": 2150.0
    })
}

/// Helper para extraer el body JSON de una response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

#[tokio::test]
async fn test_health_reports_model_state() {
    let response = loaded_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["service"], "auto-valuate");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model_loaded"], true);

    let response = setup_app(None).oneshot(get("/health")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn test_catalog_lists_sorted_brands() {
    let response = loaded_app().oneshot(get("/api/catalog")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let brands: Vec<&str> = body["brands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b.as_str().unwrap())
        .collect();

    assert_eq!(brands.len(), 10);
    let mut sorted = brands.clone();
    sorted.sort_unstable();
    assert_eq!(brands, sorted);
    assert!(brands.contains(&"Ford"));
}

#[tokio::test]
async fn test_every_brand_has_models() {
    let response = loaded_app().oneshot(get("/api/catalog")).await.unwrap();
    let body = extract_json(response.into_body()).await;

    for brand in body["brands"].as_array().unwrap() {
        let brand = brand.as_str().unwrap();
        let uri = format!("/api/catalog/{}/models", brand);
        let response = loaded_app().oneshot(get(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "brand {}", brand);

        let body = extract_json(response.into_body()).await;
        assert!(
            !body["models"].as_array().unwrap().is_empty(),
            "brand {} has no models",
            brand
        );
    }
}

#[tokio::test]
async fn test_unknown_brand_is_not_found() {
    let response = loaded_app()
        .oneshot(get("/api/catalog/Lada/models"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_catalog_preserves_leading_whitespace() {
    let response = loaded_app()
        .oneshot(get("/api/catalog/Mercedes/models"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    let models: Vec<&str> = body["models"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_str().unwrap())
        .collect();

    // Las entradas del dataset llevan espacio inicial y se sirven tal cual
    assert!(models.contains(&" C Class"));
    assert!(!models.contains(&"C Class"));
}

#[tokio::test]
async fn test_valuation_end_to_end() {
    let response = loaded_app()
        .oneshot(post_json("/api/valuation", &fiesta_request()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Valuation complete");

    // Misma aritmética que el artefacto de prueba, en el mismo orden
    let expected_source = 12500.0
        + 1800.0 * (2019.0 - 2017.0) / 2.5
        + -950.0 * (40000.0 - 25000.0) / 15000.0
        + 600.0 * (1.5 - 1.6) / 0.6
        + -40.0 * (145.0 - 120.0) / 65.0
        + -150.0 * (55.0 - 52.0) / 14.0
        + -300.0
        + -450.0
        + -120.0
        + -60.0;

    let data = &body["data"];
    assert_eq!(data["source_estimate"].as_f64().unwrap(), expected_source);
    assert_eq!(
        data["target_estimate"].as_f64().unwrap(),
        expected_source * 2150.0
    );

    // Moneda origen a 0 decimales, con separadores de miles
    assert_eq!(data["source_display"], "£11,912");
    assert_eq!(data["target_display"], "₦25,611,816");
    assert_eq!(data["exchange_rate"], 2150.0);
    assert!(data["note"].as_str().unwrap().contains("estimates"));
}

#[tokio::test]
async fn test_conversion_is_exact_for_any_positive_rate() {
    for rate in [1.0, 2150.0, 0.5, 1437.25] {
        let mut request = fiesta_request();
        request["exchange_rate"] = json!(rate);

        let response = loaded_app()
            .oneshot(post_json("/api/valuation", &request))
            .await
            .unwrap();
        let body = extract_json(response.into_body()).await;
        let data = &body["data"];

        let source = data["source_estimate"].as_f64().unwrap();
        let target = data["target_estimate"].as_f64().unwrap();
        assert_eq!(target, source * rate, "rate {}", rate);
    }
}

#[tokio::test]
async fn test_identical_submissions_are_idempotent() {
    let first = loaded_app()
        .oneshot(post_json("/api/valuation", &fiesta_request()))
        .await
        .unwrap();
    let second = loaded_app()
        .oneshot(post_json("/api/valuation", &fiesta_request()))
        .await
        .unwrap();

    let first = extract_json(first.into_body()).await;
    let second = extract_json(second.into_body()).await;
    assert_eq!(first["data"]["source_estimate"], second["data"]["source_estimate"]);
    assert_eq!(first["data"]["target_estimate"], second["data"]["target_estimate"]);
}

#[tokio::test]
async fn test_boundary_years_accepted() {
    for year in [1995, 2025] {
        let mut request = fiesta_request();
        request["year"] = json!(year);

        let response = loaded_app()
            .oneshot(post_json("/api/valuation", &request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "year {}", year);
    }
}

#[tokio::test]
async fn test_boundary_mileage_accepted() {
    for mileage in [0, 400_000] {
        let mut request = fiesta_request();
        request["mileage"] = json!(mileage);

        let response = loaded_app()
            .oneshot(post_json("/api/valuation", &request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "mileage {}", mileage);
    }
}

#[tokio::test]
async fn test_out_of_range_year_rejected() {
    let mut request = fiesta_request();
    request["year"] = json!(1990);

    let response = loaded_app()
        .oneshot(post_json("/api/valuation", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_model_must_belong_to_selected_brand() {
    let mut request = fiesta_request();
    request["model"] = json!("Golf");

    let response = loaded_app()
        .oneshot(post_json("/api/valuation", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("Golf"));
}

#[tokio::test]
async fn test_whitespace_model_accepted_verbatim() {
    let mut request = fiesta_request();
    request["brand"] = json!("Mercedes");
    request["model"] = json!(" C Class");

    let response = loaded_app()
        .oneshot(post_json("/api/valuation", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Sin el espacio inicial no es una entrada del catálogo
    let mut request = fiesta_request();
    request["brand"] = json!("Mercedes");
    request["model"] = json!("C Class");

    let response = loaded_app()
        .oneshot(post_json("/api/valuation", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unseen_category_is_a_readable_error() {
    // Skoda está en el catálogo pero el artefacto de prueba no la vio
    let mut request = fiesta_request();
    request["brand"] = json!("Skoda");
    request["model"] = json!("Octavia");

    let response = loaded_app()
        .oneshot(post_json("/api/valuation", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["code"], "PREDICTION_FAILED");
    assert!(body["message"].as_str().unwrap().contains("Skoda"));
}

#[tokio::test]
async fn test_unknown_transmission_rejected() {
    let mut request = fiesta_request();
    request["transmission"] = json!("Tiptronic");

    let response = loaded_app()
        .oneshot(post_json("/api/valuation", &request))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_non_positive_exchange_rate_rejected() {
    for rate in [0.0, -10.0] {
        let mut request = fiesta_request();
        request["exchange_rate"] = json!(rate);

        let response = loaded_app()
            .oneshot(post_json("/api/valuation", &request))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "rate {}", rate);
    }
}

#[tokio::test]
async fn test_missing_artifact_blocks_valuation() {
    let response = setup_app(None)
        .oneshot(post_json("/api/valuation", &fiesta_request()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["code"], "MISSING_ARTIFACT");
}

#[tokio::test]
async fn test_missing_artifact_blocks_the_form() {
    let response = setup_app(None).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();

    // Error bloqueante, sin camino de submit
    assert!(page.contains("Model file not found"));
    assert!(!page.contains("<form"));
}

#[tokio::test]
async fn test_form_served_when_model_loaded() {
    let response = loaded_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("valuation-form"));
}

#[tokio::test]
async fn test_artifact_loaded_from_disk_serves_valuations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("uk_car_model.json");
    std::fs::write(&path, test_artifact().to_string()).unwrap();

    let model = PricingModel::load(&path).unwrap();
    let app = setup_app(Some(model));

    let response = app
        .oneshot(post_json("/api/valuation", &fiesta_request()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
