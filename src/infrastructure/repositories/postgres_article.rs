// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    ARTICLE_NOT_FOUND, Article, ArticleContent, ArticleDescription, ArticleId,
    ArticleReadRepository, ArticleTag, ArticleTitle, ArticleUpdate, ArticleWriteRepository,
    NewArticle, publication_timestamp,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str =
    "id, title, description, content, tags, is_draft, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    content: String,
    tags: Vec<String>,
    is_draft: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = move |err: DomainError| {
            DomainError::Persistence(format!("stored article {id} is invalid: {err}"))
        };

        Ok(Self {
            id: ArticleId::from(row.id),
            title: ArticleTitle::new(row.title).map_err(corrupt)?,
            description: row
                .description
                .map(ArticleDescription::new)
                .transpose()
                .map_err(corrupt)?,
            content: ArticleContent::new(row.content).map_err(corrupt)?,
            tags: ArticleTag::many(row.tags).map_err(corrupt)?,
            is_draft: row.is_draft,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            id,
            title,
            description,
            content,
            tags,
            is_draft,
            published_at,
            created_at,
            updated_at,
        } = article;

        let tags: Vec<String> = tags.into_iter().map(String::from).collect();

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (id, title, description, content, tags, is_draft, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(Uuid::from(id))
        .bind(title.as_str())
        .bind(description.as_ref().map(ArticleDescription::as_str))
        .bind(content.as_str())
        .bind(tags)
        .bind(is_draft)
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            description,
            content,
            tags,
            is_draft,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.map(ArticleDescription::into_inner));
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(tags) = tags {
            let tags: Vec<String> = tags.into_iter().map(String::from).collect();
            builder.push(", tags = ");
            builder.push_bind(tags);
        }

        // SET expressions see the pre-update row, so when the flag is not part
        // of the update the stored `is_draft` decides the publication time.
        if let Some(flag) = is_draft {
            builder.push(", is_draft = ");
            builder.push_bind(flag);
            builder.push(", published_at = ");
            builder.push_bind(publication_timestamp(flag, updated_at));
        } else {
            builder.push(", published_at = CASE WHEN is_draft THEN NULL ELSE ");
            builder.push_bind(updated_at);
            builder.push(" END");
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(ARTICLE_NOT_FOUND.into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(ARTICLE_NOT_FOUND.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
