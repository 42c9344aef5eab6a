//! Product controller.

use crate::{
    extractors::JsonBody,
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use catalog_core::{CatalogError, ProductId};
use catalog_service::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/:id", get(get_product).put(update_product))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Missing or ill-typed field", body = catalog_core::ErrorResponse),
        (status = 500, description = "Store failure", body = catalog_core::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    debug!("Create product request: {}", request.name);

    let response = state.product_service.create_product(request).await?;
    Ok(created(response))
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Invalid ID", body = catalog_core::ErrorResponse),
        (status = 404, description = "Product not found", body = catalog_core::ErrorResponse),
        (status = 500, description = "Read path and fallback both failed", body = catalog_core::ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ProductResponse> {
    debug!("Get product request: {}", id);

    let product_id = parse_product_id(&id)?;
    let response = state.product_service.get_product(product_id).await?;
    ok(response)
}

/// Replace a product's name and price.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid ID or body", body = catalog_core::ErrorResponse),
        (status = 404, description = "Product not found", body = catalog_core::ErrorResponse),
        (status = 500, description = "Store failure", body = catalog_core::ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateProductRequest>,
) -> ApiResult<ProductResponse> {
    debug!("Update product request: {}", id);

    let product_id = parse_product_id(&id)?;
    let response = state.product_service.update_product(product_id, request).await?;
    ok(response)
}

fn parse_product_id(id: &str) -> Result<ProductId, AppError> {
    ProductId::parse(id)
        .map_err(|_| AppError(CatalogError::validation(format!("Invalid product ID: {}", id))))
}
