use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An article as returned by every read and write endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Article)]
pub struct ArticleDto {
    pub id: Uuid,
    #[schema(min_length = 3, example = "Hello World")]
    pub title: String,
    #[schema(min_length = 10)]
    pub description: Option<String>,
    #[schema(min_length = 3)]
    pub content: String,
    pub tags: Vec<String>,
    pub is_draft: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            description: article.description.map(|d| d.into_inner()),
            content: article.content.into_inner(),
            tags: article.tags.into_iter().map(String::from).collect(),
            is_draft: article.is_draft,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
