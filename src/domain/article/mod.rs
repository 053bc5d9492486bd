pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, publication_timestamp};
pub use repository::{
    ARTICLE_NOT_FOUND, ArticleReadRepository, ArticleWriteRepository, DUPLICATE_TITLE,
};
pub use value_objects::{ArticleContent, ArticleDescription, ArticleId, ArticleTag, ArticleTitle};
