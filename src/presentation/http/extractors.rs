// src/presentation/http/extractors.rs
use crate::domain::article::ArticleId;
use crate::presentation::http::error::{FieldIssue, HttpError};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

/// `/articles/{id}` path parameters. Anything but a UUID is rejected with
/// 422 before the handler runs.
#[derive(Debug, Clone, Copy, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ArticleParams {
    /// Article identifier (UUID).
    pub id: Uuid,
}

impl<S> FromRequestParts<S> for ArticleParams
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || {
            HttpError::invalid_input(
                StatusCode::UNPROCESSABLE_ENTITY,
                vec![FieldIssue::new("id", "Invalid article ID")],
            )
        };

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;
        let id = ArticleId::parse(&raw).map_err(|_| invalid())?;

        Ok(Self { id: id.into() })
    }
}

/// JSON body that has passed `validator` rules. Every body failure,
/// including a rejected content type, is answered with 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                HttpError::malformed_body(StatusCode::BAD_REQUEST, rejection.body_text())
            })?;

        value
            .validate()
            .map_err(|errors| HttpError::from_validation_errors(StatusCode::BAD_REQUEST, &errors))?;

        Ok(Self(value))
    }
}
