pub mod entity;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use value_objects::{ArticleId, ArticleTitle};
