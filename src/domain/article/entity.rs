// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::author::AuthorId;
use crate::domain::magazine::MagazineId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Join record carrying the only link between an author and a magazine.
///
/// `author` and `magazine` are handles into the registry that created the
/// article; the registry checks them on creation and on every reassignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: ArticleTitle,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author: AuthorId,
    pub magazine: MagazineId,
    pub title: ArticleTitle,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub(crate) fn from_new(id: ArticleId, new: NewArticle) -> Self {
        Self {
            id,
            author: new.author,
            magazine: new.magazine,
            title: new.title,
            created_at: new.created_at,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
