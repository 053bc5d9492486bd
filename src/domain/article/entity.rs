// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleDescription, ArticleId, ArticleTag, ArticleTitle,
};
use chrono::{DateTime, Utc};

/// `published_at` is only ever set for non-draft articles, and always to the
/// time of the save that produced it.
pub fn publication_timestamp(is_draft: bool, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if is_draft { None } else { Some(now) }
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: Option<ArticleDescription>,
    pub content: ArticleContent,
    pub tags: Vec<ArticleTag>,
    pub is_draft: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Apply a partial update in place. Fields absent from the update keep
    /// their value; `published_at` and `updated_at` are always recomputed.
    pub fn apply(&mut self, update: ArticleUpdate) {
        let ArticleUpdate {
            id: _,
            title,
            description,
            content,
            tags,
            is_draft,
            updated_at,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(is_draft) = is_draft {
            self.is_draft = is_draft;
        }

        self.published_at = publication_timestamp(self.is_draft, updated_at);
        self.updated_at = updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: Option<ArticleDescription>,
    pub content: ArticleContent,
    pub tags: Vec<ArticleTag>,
    pub is_draft: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        title: ArticleTitle,
        description: Option<ArticleDescription>,
        content: ArticleContent,
        tags: Vec<ArticleTag>,
        is_draft: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ArticleId::generate(),
            title,
            description,
            content,
            tags,
            is_draft,
            published_at: publication_timestamp(is_draft, now),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_article(self) -> Article {
        Article {
            id: self.id,
            title: self.title,
            description: self.description,
            content: self.content,
            tags: self.tags,
            is_draft: self.is_draft,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial replacement of an article's client-editable fields.
///
/// `description` is doubly optional: `None` leaves it untouched while
/// `Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub description: Option<Option<ArticleDescription>>,
    pub content: Option<ArticleContent>,
    pub tags: Option<Vec<ArticleTag>>,
    pub is_draft: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            description: None,
            content: None,
            tags: None,
            is_draft: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: Option<ArticleDescription>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_tags(mut self, tags: Vec<ArticleTag>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_draft_flag(mut self, is_draft: bool) -> Self {
        self.is_draft = Some(is_draft);
        self
    }
}
