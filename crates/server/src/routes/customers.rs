use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::customer::{Customer, CustomerUpdate, NewCustomer};

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/v1/customers", tag = "customers",
    responses((status = 200, description = "All customers", body = [crate::openapi::CustomerDoc]))
)]
pub async fn list(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Result<Json<Vec<Customer>>, ApiError> {
    let all = state.customers.list().await.map_err(|e| ApiError::from_service(e, uri.path()))?;
    info!(count = all.len(), "list customers");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.customers.get(id).await.map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(Json(customer))
}

#[utoipa::path(
    post, path = "/api/v1/customers", tag = "customers",
    request_body = crate::openapi::CustomerRegistrationDoc,
    responses(
        (status = 200, description = "Registered"),
        (status = 409, description = "Email already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(input): Json<NewCustomer>,
) -> Result<StatusCode, ApiError> {
    state.customers.register(input).await.map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    put, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "No changes", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
    Json(patch): Json<CustomerUpdate>,
) -> Result<StatusCode, ApiError> {
    state.customers.update(id, patch).await.map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.customers.delete(id).await.map_err(|e| ApiError::from_service(e, uri.path()))?;
    Ok(StatusCode::OK)
}
