//! Glue for axum services: validation failures as `400 Bad Request`
//! responses, and an extractor that validates a JSON body.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::error_messages::VALIDATION_ERROR;
use crate::records::Schema;
use crate::validation::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
    errors: ValidationErrors,
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: VALIDATION_ERROR,
            errors: self,
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Extracts a JSON body and validates it as `T`.
///
/// A body that is not JSON is rejected the way [`Json`] rejects it; a body
/// that fails validation is rejected with the full error list.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Validated<T>
where
    T: Schema + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        T::validate(&raw).map(Validated).map_err(IntoResponse::into_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{DeleteUserRecord, SignInRecord};
    use crate::validation::{ErrorKind, FieldError};
    use axum::body::{to_bytes, Body};
    use axum::http::header::CONTENT_TYPE;
    use axum::http::Request as HttpRequest;
    use serde_json::json;

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_errors_into_bad_request() {
        let errors = ValidationErrors::from(FieldError::new(
            "userId",
            ErrorKind::InvalidFormat,
            "Invalid uuid",
        ));

        let response = errors.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({
            "message": "Validation failed",
            "errors": [{ "field": "userId", "kind": "invalid_format", "message": "Invalid uuid" }],
        }));
    }

    #[tokio::test]
    async fn test_extractor_accepts_valid_body() {
        let req = json_request(r#"{"email": "a@b.com", "password": "secret1"}"#);

        let Validated(record) = Validated::<SignInRecord>::from_request(req, &())
            .await
            .unwrap();

        assert_eq!(record.email.as_str(), "a@b.com");
    }

    #[tokio::test]
    async fn test_extractor_rejects_invalid_body() {
        let req = json_request(r#"{"userId": "not-a-uuid"}"#);

        let response = Validated::<DeleteUserRecord>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["field"], "userId");
        assert_eq!(body["errors"][0]["message"], "Invalid uuid");
    }

    #[tokio::test]
    async fn test_extractor_rejects_non_json() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::from("email=a@b.com"))
            .unwrap();

        let response = Validated::<SignInRecord>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
