use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::operations::ArticleOperation;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = ValidationIssue)]
pub struct FieldIssue {
    /// Field path, e.g. `title` or `id`.
    pub path: String,
    /// Human-readable reason.
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = ArticleError)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssue>,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    code: &'static str,
    issues: Vec<FieldIssue>,
}

impl HttpError {
    /// Map a classified application error to its HTTP shape. Infrastructure
    /// failures collapse to the operation's generic message.
    pub fn from_error(err: ApplicationError, operation: ArticleOperation) -> Self {
        match err {
            ApplicationError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "CONFLICT", msg),
            ApplicationError::Infrastructure(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                operation.failure_message(),
            ),
        }
    }

    pub fn invalid_input(status: StatusCode, issues: Vec<FieldIssue>) -> Self {
        let mut err = Self::new(status, "VALIDATION_ERROR", "Validation failed");
        err.issues = issues;
        err
    }

    pub fn from_validation_errors(status: StatusCode, errors: &ValidationErrors) -> Self {
        let mut issues: Vec<FieldIssue> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e.message.as_ref().map_or_else(
                        || format!("{field} is invalid ({})", e.code),
                        ToString::to_string,
                    );
                    FieldIssue::new(field.clone(), message)
                })
            })
            .collect();
        issues.sort_by(|a, b| a.path.cmp(&b.path));
        Self::invalid_input(status, issues)
    }

    pub fn malformed_body(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::new(status, "INVALID_JSON", detail)
    }

    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code,
            issues: Vec::new(),
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            message: self.message,
            code: Some(self.code.to_string()),
            issues: self.issues,
        };
        (self.status, Json(payload)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self, operation: ArticleOperation) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self, operation: ArticleOperation) -> HttpResult<T> {
        self.map_err(|err| {
            if let ApplicationError::Infrastructure(detail) = &err {
                tracing::error!(
                    operation = operation.operation_id(),
                    error = %detail,
                    "article operation failed"
                );
            }
            HttpError::from_error(err, operation)
        })
    }
}
