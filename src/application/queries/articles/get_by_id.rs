use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ARTICLE_NOT_FOUND, ArticleId},
};
use uuid::Uuid;

pub struct GetArticleByIdQuery {
    pub id: Uuid,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .read_repo
            .find_by_id(ArticleId::from(query.id))
            .await?
            .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;
        Ok(article.into())
    }
}
