use crate::presentation::http::openapi::{MessageResponse, StatusResponse};
use axum::Json;

#[utoipa::path(
    get,
    path = "/",
    description = "API index",
    responses(
        (status = 200, description = "API name", body = MessageResponse)
    ),
    tag = "System"
)]
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse::new("Articles API"))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
