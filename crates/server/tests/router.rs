use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::AppState;
use service::customer::InMemoryCustomerRepository;

fn app() -> axum::Router {
    let state = AppState::new(Arc::new(InMemoryCustomerRepository::default()));
    routes::build_router(state, CorsLayer::very_permissive())
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let res = app()
        .oneshot(Request::get("/api/v1/customers/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn registration_missing_fields_is_rejected() {
    let res = app()
        .oneshot(
            Request::post("/api/v1/customers")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"Alex"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let res = app()
        .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/v1/customers/{id}"].is_object());
}
