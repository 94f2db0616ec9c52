pub mod entity;
pub mod extraction;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use extraction::{ExtractedArticle, extract};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
