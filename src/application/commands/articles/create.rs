// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleDescription, ArticleTag, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub is_draft: bool,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
    is_draft: bool,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn draft(mut self, is_draft: bool) -> Self {
        self.is_draft = is_draft;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description,
            content: self.content.ok_or("content is required")?,
            tags: self.tags,
            is_draft: self.is_draft,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let description = command
            .description
            .map(ArticleDescription::new)
            .transpose()?;
        let content = ArticleContent::new(command.content)?;
        let tags = ArticleTag::many(command.tags)?;

        let new_article = NewArticle::new(
            title,
            description,
            content,
            tags,
            command.is_draft,
            self.clock.now(),
        );

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, is_draft = created.is_draft, "article created");
        Ok(created.into())
    }
}
