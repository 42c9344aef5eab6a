//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{HealthResponse, ReadinessResponse};
use catalog_core::ErrorResponse;
use catalog_service::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use utoipa::OpenApi;

/// OpenAPI documentation for the catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog Service API",
        version = "1.0.0",
        description = "Product CRUD over a primary/replica store with a read-through cache"
    ),
    paths(
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            CreateProductRequest,
            UpdateProductRequest,
            ProductResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "products", description = "Product endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
