use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{
        ArticleContent, ArticleDescription, ArticleId, ArticleTag, ArticleTitle, ArticleUpdate,
    },
};
use uuid::Uuid;

/// Partial update. `description: Some(None)` clears the stored description.
pub struct UpdateArticleCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_draft: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            description,
            content,
            tags,
            is_draft,
        } = command;

        let mut update = ArticleUpdate::new(ArticleId::from(id), self.clock.now());

        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(description) = description {
            update = update.with_description(description.map(ArticleDescription::new).transpose()?);
        }
        if let Some(content) = content {
            update = update.with_content(ArticleContent::new(content)?);
        }
        if let Some(tags) = tags {
            update = update.with_tags(ArticleTag::many(tags)?);
        }
        if let Some(is_draft) = is_draft {
            update = update.with_draft_flag(is_draft);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, is_draft = updated.is_draft, "article updated");
        Ok(updated.into())
    }
}
