// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::article::value_objects::TAG_MIN_LEN;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticleParams, ValidatedJson};
use crate::presentation::http::openapi::MessageResponse;
use crate::presentation::http::operations::ArticleOperation;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Deserializer, de::Error as _};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ArticleCreate)]
pub struct CreateArticleRequest {
    #[validate(length(min = 3, message = "title must contain at least 3 character(s)"))]
    #[schema(min_length = 3, example = "Hello World")]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 10, message = "description must contain at least 10 character(s)"))]
    #[schema(min_length = 10)]
    pub description: Option<String>,
    #[validate(length(min = 3, message = "content must contain at least 3 character(s)"))]
    #[schema(min_length = 3)]
    pub content: String,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Every field optional. An absent `description` is left alone; an explicit
/// `null` clears it. `null` is rejected for the other fields.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ArticleUpdate)]
pub struct UpdateArticleRequest {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 3, message = "title must contain at least 3 character(s)"))]
    #[schema(min_length = 3)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(min = 10, message = "description must contain at least 10 character(s)"))]
    #[schema(value_type = Option<String>, min_length = 10)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 3, message = "content must contain at least 3 character(s)"))]
    #[schema(min_length = 3)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_draft: Option<bool>,
}

fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    match tags.iter().position(|tag| tag.chars().count() < TAG_MIN_LEN) {
        Some(index) => {
            let mut err = ValidationError::new("length");
            err.message = Some(Cow::Owned(format!(
                "tags[{index}] must contain at least {TAG_MIN_LEN} character(s)"
            )));
            Err(err)
        }
        None => Ok(()),
    }
}

/// Distinguishes a `null` value (`Some(None)`) from an absent key (`None`,
/// via `#[serde(default)]`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Optional but not nullable: an absent key is `None` (via
/// `#[serde(default)]`), an explicit `null` is a deserialization error.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| D::Error::custom("null is not allowed here"))
}

#[utoipa::path(
    get,
    path = "/articles",
    operation_id = "list_articles",
    description = "Get all articles",
    responses(
        (status = 200, description = "Articles fetched successfully", body = [ArticleDto]),
        (status = 500, description = "Failed to fetch articles", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http(ArticleOperation::List)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    operation_id = "get_article",
    description = "Get article by id",
    params(ArticleParams),
    responses(
        (status = 200, description = "Article fetched successfully", body = ArticleDto),
        (status = 404, description = "Article not found", body = ErrorResponse),
        (status = 422, description = "Invalid article ID", body = ErrorResponse),
        (status = 500, description = "Failed to fetch article", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ArticleParams { id }: ArticleParams,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http(ArticleOperation::Get)
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles",
    operation_id = "create_article",
    description = "Create article",
    request_body(content = CreateArticleRequest, description = "Article creation request body"),
    responses(
        (status = 201, description = "Article created successfully", body = ArticleDto),
        (status = 400, description = "Invalid article creation request body", body = ErrorResponse),
        (status = 409, description = "Article with this title already exists", body = ErrorResponse),
        (status = 500, description = "Failed to create article", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        description: payload.description,
        content: payload.content,
        tags: payload.tags.unwrap_or_default(),
        is_draft: payload.is_draft,
    };

    let operation = ArticleOperation::Create;
    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http(operation)
        .map(|article| (operation.success_status(), Json(article)))
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    operation_id = "update_article",
    description = "Update article",
    params(ArticleParams),
    request_body(content = UpdateArticleRequest, description = "Article update request body"),
    responses(
        (status = 200, description = "Article updated successfully", body = ArticleDto),
        (status = 400, description = "Invalid article update request body", body = ErrorResponse),
        (status = 404, description = "Article not found", body = ErrorResponse),
        (status = 409, description = "Article with this title already exists", body = ErrorResponse),
        (status = 422, description = "Invalid article ID", body = ErrorResponse),
        (status = 500, description = "Failed to update article", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ArticleParams { id }: ArticleParams,
    ValidatedJson(payload): ValidatedJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        description: payload.description,
        content: payload.content,
        tags: payload.tags,
        is_draft: payload.is_draft,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http(ArticleOperation::Update)
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    operation_id = "delete_article",
    description = "Delete article",
    params(ArticleParams),
    responses(
        (status = 200, description = "Article deleted successfully", body = MessageResponse),
        (status = 404, description = "Article not found", body = ErrorResponse),
        (status = 422, description = "Invalid article ID", body = ErrorResponse),
        (status = 500, description = "Failed to delete article", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticleParams { id }: ArticleParams,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http(ArticleOperation::Delete)?;

    Ok(Json(MessageResponse::new("Article deleted successfully")))
}
