//! JSON body extractor with `{ "error": ... }` rejections.
//!
//! Axum's own `Json` extractor answers malformed bodies with plain-text
//! errors and a mix of 400/415/422 statuses. `JsonBody<T>` maps every
//! rejection to 400 with the service's error body.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::ErrorResponse;
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is a 400 `{ "error": ... }` body.
///
/// # Example
///
/// ```ignore
/// use catalog_rest::extractors::JsonBody;
///
/// async fn create_product(JsonBody(request): JsonBody<CreateProductRequest>) {
///     // request has every required field with the right type
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T> std::ops::Deref for JsonBody<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection for [`JsonBody`].
#[derive(Debug)]
pub struct JsonBodyRejection(pub JsonRejection);

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let body = ErrorResponse::message(format!("Invalid request body: {}", self.0.body_text()));
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection)?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header::CONTENT_TYPE};
    use http_body_util::BodyExt;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
        count: i64,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn rejection_of(req: Request) -> (StatusCode, serde_json::Value) {
        let rejection = JsonBody::<Payload>::from_request(req, &()).await.unwrap_err();
        let response = rejection.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let req = request(Some("application/json"), r#"{"name":"a","count":2}"#);
        let JsonBody(payload) = JsonBody::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.name, "a");
        assert_eq!(payload.count, 2);
    }

    #[tokio::test]
    async fn test_missing_field_is_400() {
        let (status, body) = rejection_of(request(Some("application/json"), r#"{"name":"a"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("count"));
    }

    #[tokio::test]
    async fn test_wrong_type_is_400() {
        let (status, _) =
            rejection_of(request(Some("application/json"), r#"{"name":"a","count":"x"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let (status, body) = rejection_of(request(None, r#"{"name":"a","count":2}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
