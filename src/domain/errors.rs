// src/domain/errors.rs
use std::fmt;

use thiserror::Error;

use crate::domain::article::ArticleId;
use crate::domain::author::AuthorId;
use crate::domain::magazine::MagazineId;

pub type DomainResult<T> = Result<T, ValidationError>;

pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// Field whose constraint was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AuthorName,
    MagazineName,
    MagazineCategory,
    ArticleTitle,
    Author,
    Magazine,
    Article,
    Id,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::AuthorName => "author.name",
            Field::MagazineName => "magazine.name",
            Field::MagazineCategory => "magazine.category",
            Field::ArticleTitle => "article.title",
            Field::Author => "author",
            Field::Magazine => "magazine",
            Field::Article => "article",
            Field::Id => "id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("author name must be a non-empty string")]
    EmptyAuthorName,
    #[error("magazine name must be between 2 and 16 characters, got {actual}")]
    MagazineNameLength { actual: usize },
    #[error("magazine category must be a non-empty string")]
    EmptyCategory,
    #[error("article title must be between 5 and 50 characters, got {actual}")]
    ArticleTitleLength { actual: usize },
    #[error("{0} is not a registered author")]
    UnknownAuthor(AuthorId),
    #[error("{0} is not a registered magazine")]
    UnknownMagazine(MagazineId),
    #[error("{0} is not a registered article")]
    UnknownArticle(ArticleId),
    #[error("{kind} id must be positive, got {value}")]
    InvalidId { kind: &'static str, value: i64 },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::EmptyAuthorName => Field::AuthorName,
            Self::MagazineNameLength { .. } => Field::MagazineName,
            Self::EmptyCategory => Field::MagazineCategory,
            Self::ArticleTitleLength { .. } => Field::ArticleTitle,
            Self::UnknownAuthor(_) => Field::Author,
            Self::UnknownMagazine(_) => Field::Magazine,
            Self::UnknownArticle(_) => Field::Article,
            Self::InvalidId { .. } => Field::Id,
        }
    }
}
